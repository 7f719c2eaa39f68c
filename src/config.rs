use clap::Parser;

// CLI argument structure
#[derive(Parser, Debug, Clone)]
#[command(name = "intake-guard")]
#[command(about = "HTTP intake guard that throttles and temporarily bans noisy clients")]
pub struct Args {
    // Port to run the server on
    #[arg(short, long, default_value_t = 8080)]
    pub port: u16,

    // Requests a client may make per window before being banned
    #[arg(long, default_value_t = 4)]
    pub request_limit: usize,

    // Sliding window length in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub time_window_ms: u64,

    // Ban duration in seconds
    #[arg(long, default_value_t = 60)]
    pub ban_duration: u64,

    // Audit log file path
    #[arg(short, long, default_value = "./log.txt")]
    pub log_file: String,
}
