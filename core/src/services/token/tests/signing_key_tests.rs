//! Tests for signing key derivation

use crate::services::token::{derive_signing_key, SigningKey, MIN_KEY_LENGTH};

#[test]
fn test_long_secret_is_used_verbatim() {
    let secret = "test-secret-minimum-32-bytes-long!!";
    let key = derive_signing_key(secret);

    assert_eq!(key.len(), secret.len());
    assert_eq!(key.as_bytes(), secret.as_bytes());
}

#[test]
fn test_exact_minimum_secret_is_used_verbatim() {
    let secret = "0123456789abcdef0123456789abcdef";
    assert_eq!(secret.len(), MIN_KEY_LENGTH);

    let key = derive_signing_key(secret);

    assert_eq!(key.as_bytes(), secret.as_bytes());
}

#[test]
fn test_short_secret_repeats_cyclically() {
    let key = derive_signing_key("short");

    assert_eq!(key.len(), MIN_KEY_LENGTH);
    assert_eq!(key.as_bytes(), b"shortshortshortshortshortshortsh");
    for (i, byte) in key.as_bytes().iter().enumerate() {
        assert_eq!(*byte, b"short"[i % 5]);
    }
}

#[test]
fn test_multibyte_secret_repeats_utf8_bytes() {
    // "ক" is three bytes in UTF-8
    let key = derive_signing_key("ক");
    let encoded = "ক".as_bytes();

    assert_eq!(key.len(), MIN_KEY_LENGTH);
    assert_eq!(&key.as_bytes()[..3], encoded);
    assert_eq!(key.as_bytes()[31], encoded[31 % 3]);
}

#[test]
fn test_empty_secret_yields_zero_key() {
    let key = derive_signing_key("");

    assert_eq!(key.as_bytes(), &[0u8; MIN_KEY_LENGTH]);
    assert!(key.is_all_zero());
    assert!(!key.is_empty());
}

#[test]
fn test_derivation_is_deterministic() {
    let first = SigningKey::derive("short");
    let second = SigningKey::derive("short");

    assert_eq!(first.as_bytes(), second.as_bytes());
    assert!(!first.is_all_zero());
}
