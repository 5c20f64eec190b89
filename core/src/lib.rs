//! # Bangla LMS Core
//!
//! Core authentication logic for the Bangla LMS backend: signed token
//! issuance and validation, the claims carried by tokens, and the error
//! types reported by token operations.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
