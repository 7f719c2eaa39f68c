use axum::body::Bytes;
use axum::extract::{ConnectInfo, State};
use axum::http::{HeaderMap, StatusCode};
use chrono::Utc;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use crate::admission::Decision;
use crate::audit::AuditRecord;
use crate::metrics::{
    ACTIVE_BANS, ALLOWED_TOTAL, REJECTED_FORBIDDEN_TOTAL, REJECTED_THROTTLED_TOTAL, REQUEST_TOTAL,
};
use crate::state::AppState;

// Client identity: X-Forwarded-For when present, peer address otherwise.
// The header is trusted as-is, so a client talking to us directly can
// spoof it to dodge a ban or frame another address. Known sharp edge,
// kept for proxy setups.
fn client_ip(headers: &HeaderMap, remote: SocketAddr) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| remote.ip().to_string())
}

// intake handler - POST only, routed as such
pub async fn intake_handler(
    State(state): State<Arc<AppState>>,
    ConnectInfo(remote): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, &'static str) {
    REQUEST_TOTAL.inc();

    let client = client_ip(&headers, remote);

    match state.admission.check(&client, Instant::now()) {
        Decision::Forbidden => {
            REJECTED_FORBIDDEN_TOTAL.inc();
            (StatusCode::FORBIDDEN, "Forbidden access")
        }
        Decision::TooManyRequests => {
            REJECTED_THROTTLED_TOTAL.inc();
            ACTIVE_BANS.set(state.admission.active_bans() as f64);
            (StatusCode::TOO_MANY_REQUESTS, "Too many requests")
        }
        Decision::Allowed => {
            ALLOWED_TOTAL.inc();

            let record = AuditRecord {
                ip: client.clone(),
                time: Utc::now(),
                body: body.to_vec(),
            };
            // an accepted request stays accepted even if the audit queue
            // is gone
            if state.audit_tx.send(record).await.is_err() {
                println!("Audit writer is down, record dropped");
            }

            println!(
                "Received request from {}: {}",
                client,
                String::from_utf8_lossy(&body)
            );
            (StatusCode::OK, "Request received")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remote() -> SocketAddr {
        "10.0.0.7:41000".parse().unwrap()
    }

    #[test]
    fn forwarded_header_wins_over_peer_address() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", "203.0.113.9".parse().unwrap());
        assert_eq!(client_ip(&headers, remote()), "203.0.113.9");
    }

    #[test]
    fn peer_address_is_used_without_the_header() {
        assert_eq!(client_ip(&HeaderMap::new(), remote()), "10.0.0.7");
    }

    #[test]
    fn empty_header_falls_back_to_peer_address() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", "".parse().unwrap());
        assert_eq!(client_ip(&headers, remote()), "10.0.0.7");
    }
}
