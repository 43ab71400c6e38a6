//! Router assembly and shared application state.

use std::sync::Arc;
use std::time::Duration;

use axum::routing::{get, post};
use axum::Router;
use dfsp_sim_core::{HomeTransactionSequence, PartyDirectory};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::handlers;
use crate::relay::OutboundRelay;

/// State shared by all handlers.
///
/// The sequence counter is the only mutable piece; everything else is
/// immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<PartyDirectory>,
    pub sequence: Arc<HomeTransactionSequence>,
    pub relay: OutboundRelay,
    pub scenario_delay: Duration,
}

impl AppState {
    pub fn new(directory: Arc<PartyDirectory>, config: &Config) -> Self {
        Self {
            directory,
            sequence: Arc::new(HomeTransactionSequence::new()),
            relay: OutboundRelay::new(config.outbound_endpoint.clone()),
            scenario_delay: config.scenario_delay,
        }
    }
}

/// Build the backend API router.
///
/// Every method router carries a `not_found` fallback so that a wrong
/// method on a known path returns 404 with an empty body, like any
/// unknown path does.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::health).fallback(handlers::not_found))
        .route(
            "/parties/:id_type/:id_value",
            get(handlers::party_lookup).fallback(handlers::not_found),
        )
        .route(
            "/quoterequests",
            post(handlers::quote_request).fallback(handlers::not_found),
        )
        .route(
            "/transfers",
            post(handlers::incoming_transfer).fallback(handlers::not_found),
        )
        .route(
            "/send",
            post(handlers::send_transfer).fallback(handlers::not_found),
        )
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
