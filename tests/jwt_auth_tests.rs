// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! JWT authentication tests.
//!
//! These tests verify that session tokens created on register/login can be
//! decoded by the auth middleware, catching compatibility issues early.

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use recicla_contigo::middleware::auth::{create_jwt, Claims};
use uuid::Uuid;

#[test]
fn test_jwt_roundtrip() {
    // A token created by the auth routes must decode with the middleware's
    // Claims struct and algorithm.
    let signing_key = b"test_signing_key_32_bytes_long!!";
    let user_id = Uuid::new_v4();

    let token = create_jwt(&user_id, signing_key).unwrap();

    let key = DecodingKey::from_secret(signing_key);
    let validation = Validation::new(Algorithm::HS256);

    let token_data = decode::<Claims>(&token, &key, &validation)
        .expect("Failed to decode JWT - check Claims struct compatibility");

    assert_eq!(token_data.claims.sub, user_id.to_string());
    assert!(token_data.claims.exp > token_data.claims.iat);
}

#[test]
fn test_jwt_sub_parses_back_to_uuid() {
    let signing_key = b"test_signing_key_32_bytes_long!!";
    let user_id = Uuid::new_v4();

    let token = create_jwt(&user_id, signing_key).unwrap();

    let key = DecodingKey::from_secret(signing_key);
    let validation = Validation::new(Algorithm::HS256);
    let token_data = decode::<Claims>(&token, &key, &validation).unwrap();

    let parsed: Uuid = token_data
        .claims
        .sub
        .parse()
        .expect("sub claim should be parseable as Uuid");

    assert_eq!(parsed, user_id);
}

#[test]
fn test_jwt_expiration_is_30_days_out() {
    use std::time::{SystemTime, UNIX_EPOCH};

    let signing_key = b"test_signing_key_32_bytes_long!!";
    let token = create_jwt(&Uuid::new_v4(), signing_key).unwrap();

    let key = DecodingKey::from_secret(signing_key);
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false; // We'll check manually

    let token_data = decode::<Claims>(&token, &key, &validation).unwrap();

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as usize;

    // Token should expire at least 29 days in the future
    assert!(
        token_data.claims.exp > now + 86400 * 29,
        "Token expiration should be ~30 days in the future"
    );
    assert!(
        token_data.claims.exp <= now + 86400 * 31,
        "Token expiration should not exceed the validity window"
    );
}

#[test]
fn test_jwt_rejected_with_wrong_key() {
    let token = create_jwt(&Uuid::new_v4(), b"the_right_signing_key_32_bytes!!").unwrap();

    let key = DecodingKey::from_secret(b"a_different_signing_key_32bytes!");
    let validation = Validation::new(Algorithm::HS256);

    assert!(decode::<Claims>(&token, &key, &validation).is_err());
}
