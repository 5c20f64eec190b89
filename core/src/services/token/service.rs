//! Main token service implementation

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, Header, Validation};
use tracing::{debug, warn};

use crate::domain::entities::token::Claims;
use crate::domain::entities::user::UserDetails;
use crate::errors::{TokenError, TokenResult};

use super::clock::{Clock, SystemClock};
use super::config::TokenServiceConfig;
use super::signing_key::{SigningKey, MIN_KEY_LENGTH};

/// Service for issuing and validating HS256 JWTs
///
/// Holds no mutable state: the signing key is derived once at construction
/// and every operation is a function of the configuration, the clock and its
/// arguments, so a single instance can be shared across threads.
pub struct TokenService<C: Clock = SystemClock> {
    config: TokenServiceConfig,
    signing_key: SigningKey,
    validation: Validation,
    clock: C,
}

impl TokenService<SystemClock> {
    /// Creates a new token service reading the system clock
    pub fn new(config: TokenServiceConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> TokenService<C> {
    /// Creates a new token service with an explicit time source
    ///
    /// # Arguments
    ///
    /// * `config` - Token service configuration
    /// * `clock` - Time source for issuance and expiry checks
    pub fn with_clock(config: TokenServiceConfig, clock: C) -> Self {
        let secret_len = config.jwt_secret.len();
        if secret_len == 0 {
            warn!("JWT secret is empty, tokens are signed with an all-zero key");
        } else if secret_len < MIN_KEY_LENGTH {
            warn!(
                secret_len,
                min_len = MIN_KEY_LENGTH,
                "JWT secret is shorter than the HS256 minimum, repeating it to fill the key"
            );
        }
        if config.is_using_default_secret() {
            warn!("Using the default JWT secret, set JWT_SECRET in production");
        }

        let signing_key = SigningKey::derive(&config.jwt_secret);

        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked against `clock`, not the library's system time.
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            config,
            signing_key,
            validation,
            clock,
        }
    }

    pub fn config(&self) -> &TokenServiceConfig {
        &self.config
    }

    pub fn signing_key(&self) -> &SigningKey {
        &self.signing_key
    }

    /// Issues a token for `username`
    ///
    /// The username is signed as-is; empty names are accepted.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - Compact token with `sub`, `iat` and `exp` claims
    /// * `Err(TokenError)` - Token encoding failed
    pub fn issue_token(&self, username: &str) -> TokenResult<String> {
        let claims = Claims::new(username, self.clock.now(), self.config.expiration());
        self.encode_jwt(&claims)
    }

    /// Issues a token for `user`'s username
    pub fn generate_token<U: UserDetails + ?Sized>(&self, user: &U) -> TokenResult<String> {
        self.issue_token(user.username())
    }

    /// Encodes claims into a JWT
    pub(crate) fn encode_jwt(&self, claims: &Claims) -> TokenResult<String> {
        let header = Header::new(Algorithm::HS256);
        encode(&header, claims, self.signing_key.encoding_key()).map_err(|e| {
            TokenError::GenerationFailed {
                message: e.to_string(),
            }
        })
    }

    /// Verifies the signature of `token` and decodes its claims
    ///
    /// Expiration is not enforced here; see [`Self::verify_token`].
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims
    /// * `Err(TokenError::InvalidSignature)` - Signature does not match the key
    /// * `Err(TokenError::Malformed)` - Anything else wrong with the token
    pub fn parse_claims(&self, token: &str) -> TokenResult<Claims> {
        decode::<Claims>(token, self.signing_key.decoding_key(), &self.validation)
            .map(|data| data.claims)
            .map_err(TokenError::from)
    }

    pub fn extract_username(&self, token: &str) -> TokenResult<String> {
        Ok(self.parse_claims(token)?.sub)
    }

    pub fn extract_expiration(&self, token: &str) -> TokenResult<DateTime<Utc>> {
        Ok(self.parse_claims(token)?.expires_at())
    }

    pub fn extract_issued_at(&self, token: &str) -> TokenResult<DateTime<Utc>> {
        Ok(self.parse_claims(token)?.issued_at())
    }

    /// Whether the token's expiration is strictly before the current time
    pub fn is_expired(&self, token: &str) -> TokenResult<bool> {
        Ok(self.parse_claims(token)?.is_expired_at(self.clock.now()))
    }

    /// Parses `token` and rejects it with [`TokenError::Expired`] if it has expired
    pub fn verify_token(&self, token: &str) -> TokenResult<Claims> {
        let claims = self.parse_claims(token)?;
        if claims.is_expired_at(self.clock.now()) {
            return Err(TokenError::Expired);
        }
        Ok(claims)
    }

    /// Checks that `token` is authentic, unexpired and issued to `user`
    ///
    /// Never fails: malformed, forged and expired tokens all yield `false`.
    pub fn validate_token<U: UserDetails + ?Sized>(&self, token: &str, user: &U) -> bool {
        match self.verify_token(token) {
            Ok(claims) if claims.sub == user.username() => true,
            Ok(_) => {
                debug!("Token subject does not match the expected user");
                false
            }
            Err(e) => {
                debug!(error = %e, "Token rejected");
                false
            }
        }
    }
}
