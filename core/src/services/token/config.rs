//! Configuration for the token service

use chrono::Duration;
use lms_shared::config::auth::{JwtConfig, DEFAULT_JWT_EXPIRATION_MS, DEFAULT_JWT_SECRET};

/// Configuration for the token service
#[derive(Clone)]
pub struct TokenServiceConfig {
    /// Secret the signing key is derived from
    pub jwt_secret: String,
    /// Token lifetime in milliseconds
    pub expiration_ms: i64,
}

impl TokenServiceConfig {
    /// Create a configuration with the default token lifetime
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            expiration_ms: DEFAULT_JWT_EXPIRATION_MS,
        }
    }

    /// Set token lifetime in milliseconds
    pub fn with_expiration_ms(mut self, expiration_ms: i64) -> Self {
        self.expiration_ms = expiration_ms;
        self
    }

    /// Token lifetime
    pub fn expiration(&self) -> Duration {
        // i64::MIN is outside the representable range
        Duration::milliseconds(self.expiration_ms.max(-i64::MAX))
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_JWT_SECRET
    }
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self::new(DEFAULT_JWT_SECRET)
    }
}

impl std::fmt::Debug for TokenServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenServiceConfig")
            .field("jwt_secret", &"<redacted>")
            .field("expiration_ms", &self.expiration_ms)
            .finish()
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            jwt_secret: config.secret.clone(),
            expiration_ms: config.expiration_ms,
        }
    }
}

impl From<JwtConfig> for TokenServiceConfig {
    fn from(config: JwtConfig) -> Self {
        Self {
            jwt_secret: config.secret,
            expiration_ms: config.expiration_ms,
        }
    }
}
