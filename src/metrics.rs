use lazy_static::lazy_static;
use prometheus::{Counter, Gauge, register_counter, register_gauge};

lazy_static! {
    pub static ref REQUEST_TOTAL: Counter =
        register_counter!("intake_requests_total", "Total number of requests").unwrap();
    pub static ref ALLOWED_TOTAL: Counter =
        register_counter!("intake_allowed_total", "Requests accepted").unwrap();
    pub static ref REJECTED_FORBIDDEN_TOTAL: Counter = register_counter!(
        "intake_rejected_forbidden_total",
        "Requests rejected from banned clients"
    )
    .unwrap();
    pub static ref REJECTED_THROTTLED_TOTAL: Counter = register_counter!(
        "intake_rejected_throttled_total",
        "Requests that crossed the rate limit and triggered a ban"
    )
    .unwrap();
    pub static ref ACTIVE_BANS: Gauge =
        register_gauge!("intake_active_bans", "Clients currently banned").unwrap();
}
