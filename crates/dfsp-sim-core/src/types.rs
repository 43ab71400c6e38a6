//! Wire types for the mock backend API.
//!
//! Field names follow the scheme-adapter's backend API (camelCase JSON).
//! Amounts are decimal strings on the wire and are echoed verbatim, never
//! parsed.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default quote validity window.
pub const DEFAULT_QUOTE_EXPIRY: Duration = Duration::minutes(1);

/// Extended validity window used by the diminishing-quote scenario.
pub const EXTENDED_QUOTE_EXPIRY: Duration = Duration::minutes(15);

/// A party record held in the static directory.
///
/// Records are immutable; a lookup returns the record as bundled.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    pub display_name: String,
    pub first_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,

    pub last_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,

    pub id_type: String,
    pub id_value: String,
}

/// Party identifier carried inside quote and transfer bodies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PartyId {
    pub id_type: String,
    pub id_value: String,
}

/// Inbound quote request from the scheme adapter.
///
/// Only the fields the mock consults are deserialized; the adapter sends a
/// larger body and the remainder is ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub quote_id: Uuid,
    pub transaction_id: Uuid,
    pub amount: String,
    pub currency: String,
    pub to: PartyId,
}

/// Quote response, built fresh per request and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub quote_id: Uuid,
    pub transaction_id: Uuid,
    pub transfer_amount: String,
    pub payee_receive_amount: String,
    pub transfer_amount_currency: String,
    pub payee_receive_amount_currency: String,
    pub expiration: DateTime<Utc>,
}

impl Quote {
    /// Build a quote from a request, echoing amount and currency into both
    /// the transfer and receive fields, with the default 1-minute expiry.
    pub fn from_request(request: &QuoteRequest, now: DateTime<Utc>) -> Self {
        Self {
            quote_id: request.quote_id,
            transaction_id: request.transaction_id,
            transfer_amount: request.amount.clone(),
            payee_receive_amount: request.amount.clone(),
            transfer_amount_currency: request.currency.clone(),
            payee_receive_amount_currency: request.currency.clone(),
            expiration: now + DEFAULT_QUOTE_EXPIRY,
        }
    }
}

/// Inbound transfer notification. Only the destination identifier matters
/// to the scenario tables.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub to: PartyId,
}

/// Transfer acknowledgement carrying a freshly minted home transaction id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransferResponse {
    pub home_transaction_id: String,
}
