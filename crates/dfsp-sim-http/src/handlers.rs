//! Request handlers for the backend API.
//!
//! Each handler logs receipt and disposition. Scenario selection is pure;
//! the delay scenarios suspend only the handling task, so concurrent
//! requests keep being served.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use dfsp_sim_core::types::EXTENDED_QUOTE_EXPIRY;
use dfsp_sim_core::{
    ErrorCode, Party, Quote, QuoteRequest, QuoteScenario, TransferRequest, TransferResponse,
    TransferScenario,
};
use serde_json::Value;
use tokio::time::sleep;

use crate::error::BackendError;
use crate::server::AppState;

/// `GET /` — health probe, e.g. for Kubernetes. Empty 200, no side effects.
pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// `GET /parties/:id_type/:id_value` — static directory lookup.
pub async fn party_lookup(
    State(state): State<AppState>,
    Path((id_type, id_value)): Path<(String, String)>,
) -> Result<Json<Party>, BackendError> {
    tracing::info!(%id_type, %id_value, "party lookup received");

    match state.directory.lookup(&id_type, &id_value) {
        Some(party) => {
            tracing::info!(display_name = %party.display_name, "returning party");
            Ok(Json(party.clone()))
        }
        None => {
            tracing::info!("party not found");
            Err(BackendError::Domain(ErrorCode::PartyNotFound))
        }
    }
}

/// `POST /quoterequests` — build a quote, then let the scenario table
/// decide how it comes back.
pub async fn quote_request(
    State(state): State<AppState>,
    Json(request): Json<QuoteRequest>,
) -> Result<Json<Quote>, BackendError> {
    let scenario = QuoteScenario::for_payee(&request.to.id_value);

    tracing::info!(
        quote_id = %request.quote_id,
        payee = %request.to.id_value,
        ?scenario,
        "quote request received"
    );

    if let Some(code) = scenario.error_code() {
        tracing::info!(%code, "returning simulated quote failure");
        return Err(BackendError::Domain(code));
    }

    let now = Utc::now();
    let mut quote = Quote::from_request(&request, now);

    match scenario {
        QuoteScenario::ExpireImmediately => quote.expiration = now,
        QuoteScenario::ExtendedExpiry => quote.expiration = now + EXTENDED_QUOTE_EXPIRY,
        QuoteScenario::DelayedAccept => {
            tracing::info!(
                delay_ms = state.scenario_delay.as_millis() as u64,
                "delaying quote response to simulate a timeout"
            );
            sleep(state.scenario_delay).await;
        }
        _ => {}
    }

    tracing::info!(expiration = %quote.expiration, "returning quote");
    Ok(Json(quote))
}

/// `POST /transfers` — inbound transfer notification; the default path
/// mints a home transaction id as if booking the funds.
pub async fn incoming_transfer(
    State(state): State<AppState>,
    Json(request): Json<TransferRequest>,
) -> Result<Json<TransferResponse>, BackendError> {
    let scenario = TransferScenario::for_payee(&request.to.id_value);

    tracing::info!(payee = %request.to.id_value, ?scenario, "incoming transfer received");

    if let Some(code) = scenario.error_code() {
        tracing::info!(%code, "returning simulated transfer failure");
        return Err(BackendError::Domain(code));
    }

    if scenario == TransferScenario::DelayedAccept {
        tracing::info!(
            delay_ms = state.scenario_delay.as_millis() as u64,
            "delaying transfer response to simulate a timeout"
        );
        sleep(state.scenario_delay).await;
    }

    let home_transaction_id = state.sequence.mint();
    tracing::info!(%home_transaction_id, "acknowledging transfer");

    Ok(Json(TransferResponse {
        home_transaction_id,
    }))
}

/// `POST /send` — trigger an outgoing transfer through the relay and pass
/// the downstream outcome back to the caller.
pub async fn send_transfer(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, BackendError> {
    tracing::info!(outbound = %state.relay.base_url(), "outgoing transfer requested");

    match state.relay.forward_transfer(&body).await {
        Ok(downstream) => {
            tracing::info!("relaying downstream response");
            Ok(Json(downstream))
        }
        Err(err) => {
            tracing::warn!(%err, "outbound transfer failed");
            Err(BackendError::Relay(err))
        }
    }
}

/// Catch-all for undefined routes and methods. Empty 404.
pub async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
