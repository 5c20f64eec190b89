//! Domain-specific error types and error handling.

use thiserror::Error;

/// Token-related errors
///
/// Parsing and verification report these to their immediate caller. The
/// boolean validation entry point collapses every variant into `false`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// The token is not a well-formed HS256 compact token with the expected claims
    #[error("Malformed token")]
    Malformed,

    /// The signature does not verify under the configured signing key
    #[error("Invalid signature")]
    InvalidSignature,

    /// The embedded expiration is in the past
    #[error("Token expired")]
    Expired,

    #[error("Token generation failed: {message}")]
    GenerationFailed { message: String },
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;

        match err.kind() {
            ErrorKind::InvalidSignature => TokenError::InvalidSignature,
            ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Malformed,
        }
    }
}

pub type TokenResult<T> = Result<T, TokenError>;

#[cfg(test)]
mod tests;
