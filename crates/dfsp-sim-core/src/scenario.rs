//! Scenario tables keyed on the destination MSISDN.
//!
//! The mock selects its behavior from the `to.idValue` field of the inbound
//! body. Sentinel values trigger simulated faults, delays, or expiry
//! changes; any other value takes the default success path.

use crate::error::ErrorCode;

/// MSISDN that makes the payee reject the quote.
pub const MSISDN_REJECT_QUOTE: &str = "00000000";
/// MSISDN that returns a quote which is already expired.
pub const MSISDN_QUOTE_EXPIRES_NOW: &str = "11111111";
/// MSISDN that delays the quote response to simulate a timeout.
pub const MSISDN_DELAY_QUOTE: &str = "22222222";
/// MSISDN that returns a quote with a 15-minute expiry.
pub const MSISDN_EXTEND_QUOTE_EXPIRY: &str = "33333333";
/// MSISDN that fails the quote with QUOTE_EXPIRED.
pub const MSISDN_QUOTE_EXPIRED: &str = "44444444";

/// MSISDN that makes the payee reject the transfer.
pub const MSISDN_REJECT_TRANSFER: &str = "55555555";
/// MSISDN that delays the transfer response to simulate a timeout.
pub const MSISDN_DELAY_TRANSFER: &str = "66666666";
/// MSISDN that fails the transfer with QUOTE_EXPIRED.
pub const MSISDN_TRANSFER_QUOTE_EXPIRED: &str = "77777777";
/// MSISDN that fails the transfer with TRANSFER_EXPIRED.
pub const MSISDN_TRANSFER_EXPIRED: &str = "88888888";

/// Behavior selected for a quote request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteScenario {
    /// Return the quote as constructed (1-minute expiry).
    Accept,
    /// Fail with PAYEE_REJECTED_QUOTE.
    Reject,
    /// Return the quote with its expiration set to the current instant.
    ExpireImmediately,
    /// Suspend for the configured delay, then return the quote unmodified.
    DelayedAccept,
    /// Return the quote with the expiration pushed out to 15 minutes.
    ExtendedExpiry,
    /// Fail with QUOTE_EXPIRED.
    Expired,
}

impl QuoteScenario {
    /// Resolve the scenario for a destination MSISDN. Total: unlisted values
    /// take the default success path.
    pub fn for_payee(id_value: &str) -> Self {
        match id_value {
            MSISDN_REJECT_QUOTE => QuoteScenario::Reject,
            MSISDN_QUOTE_EXPIRES_NOW => QuoteScenario::ExpireImmediately,
            MSISDN_DELAY_QUOTE => QuoteScenario::DelayedAccept,
            MSISDN_EXTEND_QUOTE_EXPIRY => QuoteScenario::ExtendedExpiry,
            MSISDN_QUOTE_EXPIRED => QuoteScenario::Expired,
            _ => QuoteScenario::Accept,
        }
    }

    /// The domain error this scenario simulates, if it is a fault scenario.
    pub fn error_code(self) -> Option<ErrorCode> {
        match self {
            QuoteScenario::Reject => Some(ErrorCode::PayeeRejectedQuote),
            QuoteScenario::Expired => Some(ErrorCode::QuoteExpired),
            _ => None,
        }
    }
}

/// Behavior selected for an inbound transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferScenario {
    /// Mint a home transaction id and acknowledge.
    Accept,
    /// Fail with PAYEE_REJECTED_TXN.
    Reject,
    /// Suspend for the configured delay, then acknowledge.
    DelayedAccept,
    /// Fail with QUOTE_EXPIRED.
    QuoteExpired,
    /// Fail with TRANSFER_EXPIRED.
    Expired,
}

impl TransferScenario {
    /// Resolve the scenario for a destination MSISDN. Total: unlisted values
    /// take the default success path.
    pub fn for_payee(id_value: &str) -> Self {
        match id_value {
            MSISDN_REJECT_TRANSFER => TransferScenario::Reject,
            MSISDN_DELAY_TRANSFER => TransferScenario::DelayedAccept,
            MSISDN_TRANSFER_QUOTE_EXPIRED => TransferScenario::QuoteExpired,
            MSISDN_TRANSFER_EXPIRED => TransferScenario::Expired,
            _ => TransferScenario::Accept,
        }
    }

    /// The domain error this scenario simulates, if it is a fault scenario.
    pub fn error_code(self) -> Option<ErrorCode> {
        match self {
            TransferScenario::Reject => Some(ErrorCode::PayeeRejectedTransfer),
            TransferScenario::QuoteExpired => Some(ErrorCode::QuoteExpired),
            TransferScenario::Expired => Some(ErrorCode::TransferExpired),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_sentinels_map_to_their_scenarios() {
        assert_eq!(QuoteScenario::for_payee("00000000"), QuoteScenario::Reject);
        assert_eq!(
            QuoteScenario::for_payee("11111111"),
            QuoteScenario::ExpireImmediately
        );
        assert_eq!(
            QuoteScenario::for_payee("22222222"),
            QuoteScenario::DelayedAccept
        );
        assert_eq!(
            QuoteScenario::for_payee("33333333"),
            QuoteScenario::ExtendedExpiry
        );
        assert_eq!(QuoteScenario::for_payee("44444444"), QuoteScenario::Expired);
    }

    #[test]
    fn unlisted_msisdns_take_the_default_path() {
        assert_eq!(QuoteScenario::for_payee("123456789"), QuoteScenario::Accept);
        assert_eq!(QuoteScenario::for_payee(""), QuoteScenario::Accept);
        // transfer sentinels are not quote sentinels
        assert_eq!(QuoteScenario::for_payee("55555555"), QuoteScenario::Accept);

        assert_eq!(
            TransferScenario::for_payee("123456789"),
            TransferScenario::Accept
        );
        // quote sentinels are not transfer sentinels
        assert_eq!(
            TransferScenario::for_payee("00000000"),
            TransferScenario::Accept
        );
    }

    #[test]
    fn transfer_sentinels_map_to_their_scenarios() {
        assert_eq!(
            TransferScenario::for_payee("55555555"),
            TransferScenario::Reject
        );
        assert_eq!(
            TransferScenario::for_payee("66666666"),
            TransferScenario::DelayedAccept
        );
        assert_eq!(
            TransferScenario::for_payee("77777777"),
            TransferScenario::QuoteExpired
        );
        assert_eq!(
            TransferScenario::for_payee("88888888"),
            TransferScenario::Expired
        );
    }

    #[test]
    fn fault_scenarios_carry_their_error_codes() {
        assert_eq!(
            QuoteScenario::Reject.error_code(),
            Some(ErrorCode::PayeeRejectedQuote)
        );
        assert_eq!(
            QuoteScenario::Expired.error_code(),
            Some(ErrorCode::QuoteExpired)
        );
        assert_eq!(QuoteScenario::Accept.error_code(), None);
        assert_eq!(QuoteScenario::DelayedAccept.error_code(), None);

        assert_eq!(
            TransferScenario::Reject.error_code(),
            Some(ErrorCode::PayeeRejectedTransfer)
        );
        assert_eq!(
            TransferScenario::Expired.error_code(),
            Some(ErrorCode::TransferExpired)
        );
        assert_eq!(TransferScenario::Accept.error_code(), None);
    }
}
