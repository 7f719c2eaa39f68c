mod health;
mod intake;
mod metrics;

pub use health::health_handler;
pub use intake::intake_handler;
pub use metrics::metrics_handler;
