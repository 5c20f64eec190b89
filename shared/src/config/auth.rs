//! Authentication configuration

use serde::{Deserialize, Serialize};

/// Secret used when `JWT_SECRET` is not provided. Deployments must override it.
pub const DEFAULT_JWT_SECRET: &str =
    "BanglaLearningLMS2024SecretKeyForJWTAuthenticationMinimum256BitsRequired";

/// Default token lifetime in milliseconds (24 hours)
pub const DEFAULT_JWT_EXPIRATION_MS: i64 = 86_400_000;

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Secret the HMAC signing key is derived from
    pub secret: String,

    /// Token lifetime in milliseconds
    #[serde(default = "default_expiration_ms")]
    pub expiration_ms: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_JWT_SECRET),
            expiration_ms: default_expiration_ms(),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set token lifetime in milliseconds
    pub fn with_expiration_ms(mut self, expiration_ms: i64) -> Self {
        self.expiration_ms = expiration_ms;
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_JWT_SECRET
    }

    /// Read `JWT_SECRET` and `JWT_EXPIRATION` through `lookup`.
    ///
    /// A missing or unparsable expiration falls back to the default.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = lookup("JWT_SECRET").unwrap_or_else(|| String::from(DEFAULT_JWT_SECRET));
        let expiration_ms = lookup("JWT_EXPIRATION")
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(DEFAULT_JWT_EXPIRATION_MS);

        Self {
            secret,
            expiration_ms,
        }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary variable lookup
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            jwt: JwtConfig::from_vars(lookup),
        }
    }

    /// Get JWT secret
    pub fn jwt_secret(&self) -> &str {
        &self.jwt.secret
    }
}

fn default_expiration_ms() -> i64 {
    DEFAULT_JWT_EXPIRATION_MS
}
