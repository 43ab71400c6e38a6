//! HTTP error mapping for the mock backend.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use dfsp_sim_core::ErrorCode;
use serde::Serialize;
use thiserror::Error;

/// Errors a handler can surface to the caller.
///
/// Domain errors are part of the simulation contract and carry a fixed
/// FSPIOP code; relay errors wrap whatever went wrong talking to the
/// downstream adapter.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("domain error {0}")]
    Domain(ErrorCode),

    #[error("outbound transfer failed: {0}")]
    Relay(#[from] reqwest::Error),
}

/// Error body for domain errors: `{"statusCode": "<code>"}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DomainErrorBody {
    status_code: &'static str,
}

/// Error body for relay failures: `{"message": "<reason>"}`.
#[derive(Debug, Serialize)]
struct RelayErrorBody {
    message: String,
}

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        match self {
            BackendError::Domain(code) => {
                let status = match code {
                    ErrorCode::PartyNotFound => StatusCode::NOT_FOUND,
                    _ => StatusCode::INTERNAL_SERVER_ERROR,
                };
                let body = DomainErrorBody {
                    status_code: code.as_str(),
                };
                (status, Json(body)).into_response()
            }
            BackendError::Relay(err) => {
                let body = RelayErrorBody {
                    message: err.to_string(),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_body_uses_the_wire_field_name() {
        let body = DomainErrorBody {
            status_code: ErrorCode::PayeeRejectedQuote.as_str(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "statusCode": "5101" }));
    }

    #[test]
    fn party_not_found_maps_to_client_error() {
        let response = BackendError::Domain(ErrorCode::PartyNotFound).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn simulated_faults_map_to_server_error() {
        for code in [
            ErrorCode::PayeeRejectedQuote,
            ErrorCode::QuoteExpired,
            ErrorCode::PayeeRejectedTransfer,
            ErrorCode::TransferExpired,
        ] {
            let response = BackendError::Domain(code).into_response();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}
