//! Mock DFSP backend simulator.
//!
//! Simulates the backend a scheme-adapter SDK integrates against: static
//! party lookups, scenario-driven quotes and transfers, and an outbound
//! relay for triggering outgoing transfers.
//!
//! Usage:
//!   # Defaults: listen on 3000, relay to http://scheme-adapter:4001
//!   cargo run --package dfsp-sim-server
//!
//!   # Override via environment
//!   LISTEN_PORT=3001 OUTBOUND_ENDPOINT=http://localhost:4001 \
//!       cargo run --package dfsp-sim-server

use std::net::SocketAddr;
use std::sync::Arc;

use dfsp_sim_core::PartyDirectory;
use dfsp_sim_http::{router, AppState, Config};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dfsp_sim_server=debug,dfsp_sim_http=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(%err, "invalid configuration");
            std::process::exit(1);
        }
    };

    let directory = match PartyDirectory::bundled() {
        Ok(directory) => directory,
        Err(err) => {
            tracing::error!(%err, "failed to load party dataset");
            std::process::exit(1);
        }
    };
    tracing::info!(parties = directory.len(), "party directory loaded");
    tracing::info!(outbound = %config.outbound_endpoint, "outbound transfers relay enabled");

    let addr = SocketAddr::from(([0, 0, 0, 0], config.listen_port));
    let app = router(AppState::new(Arc::new(directory), &config));

    tracing::info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind listen port");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");

    tracing::info!("server stopped");
}

/// Completes on SIGINT (Ctrl+C) or SIGTERM, letting in-flight requests
/// finish before the listener closes.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
