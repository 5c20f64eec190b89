//! Token service module for JWT management
//!
//! This module handles all token-related operations:
//! - Signing key derivation from the configured secret
//! - HS256 token issuance for a username
//! - Signature verification, claim extraction and expiry checks
//! - Boolean validation for authentication filters

mod clock;
mod config;
mod service;
mod signing_key;

#[cfg(test)]
mod tests;

pub use clock::{Clock, SystemClock};
pub use config::TokenServiceConfig;
pub use service::TokenService;
pub use signing_key::{derive_signing_key, SigningKey, MIN_KEY_LENGTH};
