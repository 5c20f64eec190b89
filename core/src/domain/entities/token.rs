//! Token entities for JWT-based authentication.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Claims structure for JWT payload
///
/// Timestamps are seconds since the Unix epoch, as required by the JWT
/// `NumericDate` format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl Claims {
    /// Creates claims for `subject` issued at `now` and valid for `lifetime`
    ///
    /// # Arguments
    ///
    /// * `subject` - The username the token is issued to
    /// * `now` - Issuance instant
    /// * `lifetime` - Time until expiration
    ///
    /// # Returns
    ///
    /// A new `Claims` instance with `exp = iat + lifetime`
    pub fn new(subject: impl Into<String>, now: DateTime<Utc>, lifetime: Duration) -> Self {
        let bound = if lifetime < Duration::zero() {
            DateTime::<Utc>::MIN_UTC
        } else {
            DateTime::<Utc>::MAX_UTC
        };
        let expiry = now.checked_add_signed(lifetime).unwrap_or(bound);

        Self {
            sub: subject.into(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
        }
    }

    /// The token's subject
    pub fn subject(&self) -> &str {
        &self.sub
    }

    /// Issuance instant
    pub fn issued_at(&self) -> DateTime<Utc> {
        from_numeric_date(self.iat)
    }

    /// Expiration instant
    pub fn expires_at(&self) -> DateTime<Utc> {
        from_numeric_date(self.exp)
    }

    /// Checks if the claims have expired at `now`
    ///
    /// # Returns
    ///
    /// `true` if the expiration is strictly before `now`, `false` otherwise
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.exp.saturating_mul(1000) < now.timestamp_millis()
    }
}

// Out-of-range timestamps clamp to the representable bounds.
fn from_numeric_date(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or(if secs < 0 {
        DateTime::<Utc>::MIN_UTC
    } else {
        DateTime::<Utc>::MAX_UTC
    })
}
