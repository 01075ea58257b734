//! x402 payment types for the AI Indigo search API.
//!
//! A resource server answers unpaid requests with HTTP 402 and a
//! [`PaymentRequirements`] descriptor (USDC on Base, `exact` scheme). Once the
//! caller retries with an `X-PAYMENT` header, a [`PaymentVerifier`] decides
//! whether the request is granted.
//!
//! # Verifiers
//!
//! - [`AcceptAnyVerifier`] - development stub, grants any non-empty header
//! - [`FacilitatorClient`] - calls a remote facilitator's `/verify` and `/settle`
//! - [`Verifier`] - runtime selection between the two

pub mod constants;
pub mod error;
pub mod facilitator_client;
pub mod payment;
pub mod response;
pub mod verifier;

pub use constants::*;
pub use error::X402Error;
pub use facilitator_client::FacilitatorClient;
pub use payment::*;
pub use response::*;
pub use verifier::{
    encode_settlement, verify_and_settle, AcceptAnyVerifier, PaymentOutcome, PaymentVerifier,
    Verifier,
};
