//! HMAC signing key derivation

use jsonwebtoken::{DecodingKey, EncodingKey};

/// Minimum key length in bytes for HS256 (256 bits)
pub const MIN_KEY_LENGTH: usize = 32;

/// HMAC-SHA256 key derived from the configured secret
#[derive(Clone)]
pub struct SigningKey {
    bytes: Vec<u8>,
    /// Key for signing JWTs
    encoding_key: EncodingKey,
    /// Key for verifying JWTs
    decoding_key: DecodingKey,
}

impl std::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningKey")
            .field("len", &self.bytes.len())
            .finish_non_exhaustive()
    }
}

impl SigningKey {
    /// Derives the signing key from `secret`
    ///
    /// Secrets of at least [`MIN_KEY_LENGTH`] bytes are used as-is. Shorter
    /// secrets are repeated cyclically to fill [`MIN_KEY_LENGTH`] bytes; an
    /// empty secret yields an all-zero key. The derivation never fails and
    /// must stay stable, since changing it invalidates every issued token.
    pub fn derive(secret: &str) -> Self {
        let secret = secret.as_bytes();
        let bytes = if secret.len() >= MIN_KEY_LENGTH {
            secret.to_vec()
        } else if secret.is_empty() {
            vec![0u8; MIN_KEY_LENGTH]
        } else {
            secret.iter().copied().cycle().take(MIN_KEY_LENGTH).collect()
        };

        Self {
            encoding_key: EncodingKey::from_secret(&bytes),
            decoding_key: DecodingKey::from_secret(&bytes),
            bytes,
        }
    }

    /// Raw key material
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Key length in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false; derived keys are at least [`MIN_KEY_LENGTH`] bytes
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Whether every key byte is zero, as derived from an empty secret
    pub fn is_all_zero(&self) -> bool {
        self.bytes.iter().all(|&b| b == 0)
    }

    pub fn encoding_key(&self) -> &EncodingKey {
        &self.encoding_key
    }

    pub fn decoding_key(&self) -> &DecodingKey {
        &self.decoding_key
    }
}

/// Derives the HS256 signing key for `secret`. See [`SigningKey::derive`].
pub fn derive_signing_key(secret: &str) -> SigningKey {
    SigningKey::derive(secret)
}
