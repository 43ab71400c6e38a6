//! Error types for the simulator core.

use std::fmt;

use thiserror::Error;

/// Mojaloop FSPIOP error codes returned by the mock backend.
///
/// These are the codes the scheme adapter expects in the `statusCode` field
/// of an error body. The set is closed: the mock only ever simulates these
/// five outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// `3204` - party not found in the static directory.
    PartyNotFound,
    /// `5101` - payee rejected the quote.
    PayeeRejectedQuote,
    /// `3302` - quote expired.
    QuoteExpired,
    /// `5104` - payee rejected the transaction.
    PayeeRejectedTransfer,
    /// `3303` - transfer expired.
    TransferExpired,
}

impl ErrorCode {
    /// The numeric wire string placed in the `statusCode` field.
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::PartyNotFound => "3204",
            ErrorCode::PayeeRejectedQuote => "5101",
            ErrorCode::QuoteExpired => "3302",
            ErrorCode::PayeeRejectedTransfer => "5104",
            ErrorCode::TransferExpired => "3303",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while loading the bundled party dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("dataset is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("dataset contains no parties")]
    Empty,
}
