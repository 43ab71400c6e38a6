//! # DFSP Simulator Core
//!
//! Domain types and behavior tables for a mock DFSP payments backend.
//!
//! This crate provides:
//! - Wire types for party lookups, quote requests, and transfers
//! - The static party directory, loaded from a bundled dataset
//! - Scenario tables mapping sentinel MSISDNs to simulated outcomes
//! - The home transaction sequence used to mint transfer acknowledgements
//!
//! The HTTP surface lives in `dfsp-sim-http`; nothing in this crate depends
//! on a transport.
//!
//! ## Example
//!
//! ```rust,ignore
//! use dfsp_sim_core::{PartyDirectory, QuoteScenario};
//!
//! let directory = PartyDirectory::bundled()?;
//! let party = directory.lookup("MSISDN", "123456789");
//!
//! // Sentinel MSISDNs select simulated behaviors
//! let scenario = QuoteScenario::for_payee("00000000");
//! ```

pub mod directory;
pub mod error;
pub mod scenario;
pub mod sequence;
pub mod types;

// Re-exports for convenience
pub use directory::PartyDirectory;
pub use error::{DatasetError, ErrorCode};
pub use scenario::{QuoteScenario, TransferScenario};
pub use sequence::HomeTransactionSequence;
pub use types::{Party, PartyId, Quote, QuoteRequest, TransferRequest, TransferResponse};
