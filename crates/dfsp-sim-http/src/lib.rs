//! # DFSP Simulator HTTP Surface
//!
//! The request/response surface of the mock DFSP backend.
//!
//! This crate provides:
//! - An axum router exposing the backend API consumed by the scheme adapter
//! - HTTP error mapping for the simulated domain faults
//! - The outbound relay used by `POST /send` to push transfers downstream
//! - Environment-driven configuration
//!
//! ## Server Example
//!
//! ```ignore
//! use dfsp_sim_http::{router, AppState, Config};
//! use dfsp_sim_core::PartyDirectory;
//! use std::sync::Arc;
//!
//! let config = Config::from_env()?;
//! let state = AppState::new(Arc::new(PartyDirectory::bundled()?), &config);
//! let app = router(state);
//!
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.listen_port)).await?;
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
mod error;
pub mod handlers;
mod relay;
mod server;

pub use config::Config;
pub use error::BackendError;
pub use relay::OutboundRelay;
pub use server::{router, AppState};
