//! AI Indigo search API - a small tool directory behind an x402 paywall.
//!
//! Free routes (`/`, `/health`, `/api/categories`) are always served.
//! `/api/tools` answers HTTP 402 with
//! [`PaymentRequirements`](x402::PaymentRequirements) until the caller sends an
//! `X-PAYMENT` header that the configured [`Verifier`](x402::Verifier) accepts.
//!
//! # Modules
//!
//! - [`config`] - Environment configuration ([`ServerConfig`](config::ServerConfig))
//! - [`catalog`] - Static tool table and search filter
//! - [`paywall`] - Payment gate ([`require_payment`](paywall::require_payment))
//! - [`routes`] - HTTP handlers
//! - [`metrics`] - Prometheus counters for requests and payments

pub mod catalog;
pub mod config;
pub mod cors;
pub mod error;
pub mod metrics;
pub mod paywall;
pub mod routes;
pub mod state;

pub use config::{ConfigError, ServerConfig, VerificationMode, PRICE_CENTS};
pub use error::ServerError;
pub use state::AppState;
