//! Integration tests for token issuance and validation through the public API

use std::sync::{Arc, Mutex};

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use lms_core::{Claims, Clock, TokenError, TokenService, TokenServiceConfig, UserDetails};
use lms_shared::JwtConfig;
use serde_json::Value;

struct SteppingClock {
    now: Mutex<DateTime<Utc>>,
}

impl SteppingClock {
    fn starting_now() -> Self {
        Self {
            now: Mutex::new(Utc::now()),
        }
    }

    fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now = *now + by;
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

struct Student {
    email: String,
}

impl UserDetails for Student {
    fn username(&self) -> &str {
        &self.email
    }
}

fn decode_segment(segment: &str) -> Value {
    let bytes = URL_SAFE_NO_PAD
        .decode(segment)
        .expect("Segment should be base64url");
    serde_json::from_slice(&bytes).expect("Segment should be JSON")
}

#[test]
fn test_token_lifecycle_with_short_expiration() {
    let clock = Arc::new(SteppingClock::starting_now());
    let config = TokenServiceConfig::from(
        JwtConfig::new("test-secret-minimum-32-bytes-long!!").with_expiration_ms(1000),
    );
    let service = TokenService::with_clock(config, clock.clone());
    let alice = Student {
        email: "alice".to_string(),
    };

    let token = service.generate_token(&alice).expect("Failed to issue token");
    assert!(service.validate_token(&token, &alice));

    clock.advance(Duration::milliseconds(2000));

    assert!(!service.validate_token(&token, &alice));
    assert_eq!(service.verify_token(&token), Err(TokenError::Expired));
}

#[test]
fn test_token_is_standard_hs256_jwt() {
    let service = TokenService::new(TokenServiceConfig::new("short"));
    let token = service.issue_token("alice").expect("Failed to issue token");

    let segments: Vec<&str> = token.split('.').collect();
    assert_eq!(segments.len(), 3);

    let header = decode_segment(segments[0]);
    assert_eq!(header["alg"], "HS256");

    let payload = decode_segment(segments[1]);
    assert_eq!(payload["sub"], "alice");
    assert!(payload["iat"].is_i64());
    assert!(payload["exp"].is_i64());
    assert_eq!(
        payload["exp"].as_i64().unwrap() - payload["iat"].as_i64().unwrap(),
        86_400
    );

    // Any HS256 verifier holding the derived key accepts the token
    let key = DecodingKey::from_secret(b"shortshortshortshortshortshortsh");
    let data = decode::<Claims>(&token, &key, &Validation::new(Algorithm::HS256))
        .expect("Independent verification failed");
    assert_eq!(data.claims.sub, "alice");
}

#[test]
fn test_services_sharing_a_secret_interoperate() {
    let config = JwtConfig::new("shared-deployment-secret-of-sufficient-length");
    let issuer = TokenService::new(TokenServiceConfig::from(&config));
    let verifier = TokenService::new(TokenServiceConfig::from(config));
    let stranger = TokenService::new(TokenServiceConfig::new("another-deployment-secret-entirely"));

    let token = issuer.issue_token("instructor@lms").unwrap();

    assert!(verifier.validate_token(&token, "instructor@lms"));
    assert!(!stranger.validate_token(&token, "instructor@lms"));
    assert_eq!(stranger.parse_claims(&token), Err(TokenError::InvalidSignature));
}

#[test]
fn test_garbage_never_panics() {
    let service = TokenService::new(TokenServiceConfig::new("short"));
    let inputs = [
        "",
        ".",
        "..",
        "eyJ",
        "eyJhbGciOiJub25lIn0.eyJzdWIiOiJhbGljZSJ9.",
        "eyJhbGciOiJIUzI1NiJ9.eyJzdWIiOiJhbGljZSJ9.c2ln",
        "\u{0}\u{1}\u{2}",
    ];

    for input in inputs {
        assert!(!service.validate_token(input, "alice"));
    }
}
