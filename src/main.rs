mod admission;
mod audit;
mod config;
mod handlers;
mod metrics;
mod state;

use axum::{
    Router,
    routing::{get, post},
};
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

use crate::admission::AdmissionController;
use crate::config::Args;
use crate::state::AppState;

#[tokio::main]
async fn main() {
    // parse cli arguments
    let args = Args::parse();

    let (audit_tx, audit_rx) = mpsc::channel(100);

    // creating shared state
    let state = Arc::new(AppState {
        admission: AdmissionController::new(
            args.request_limit,
            Duration::from_millis(args.time_window_ms),
            Duration::from_secs(args.ban_duration),
        ),
        audit_tx,
    });

    // spawn the background audit writer
    tokio::spawn(audit::audit_writer(audit_rx, args.log_file.clone().into()));

    // the intake route only answers POST; axum returns 405 for the rest
    let app = Router::new()
        .route("/", post(handlers::intake_handler))
        .route("/health", get(handlers::health_handler))
        .route("/metrics", get(handlers::metrics_handler))
        .with_state(state);

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    println!("Server is listening on port {}...", args.port);
    println!(
        "Rate limit: {} requests per {} ms, ban duration: {} s",
        args.request_limit, args.time_window_ms, args.ban_duration
    );
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .unwrap();
}
