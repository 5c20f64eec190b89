//! Tests for token service

#[cfg(test)]
mod signing_key_tests;
