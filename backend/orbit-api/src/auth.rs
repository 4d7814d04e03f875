/// JWT handling for Orbit API
///
/// Bearer tokens are signed with HS256 using a shared secret from
/// configuration. Keys are initialized once at startup and immutable
/// thereafter; validation rejects any other algorithm.
use anyhow::{anyhow, Result};
use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, Algorithm, DecodingKey, EncodingKey, Header, TokenData, Validation,
};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const JWT_ALGORITHM: Algorithm = Algorithm::HS256;

/// JWT claims carried by Orbit access tokens
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user ID as UUID string)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

static JWT_ENCODING_KEY: OnceCell<EncodingKey> = OnceCell::new();
static JWT_DECODING_KEY: OnceCell<DecodingKey> = OnceCell::new();

/// Initialize JWT keys from the configured secret
///
/// Must be called during startup before any token operation. Subsequent
/// calls are no-ops so tests can initialize freely.
pub fn initialize(secret: &str) -> Result<()> {
    if secret.is_empty() {
        return Err(anyhow!("JWT secret must not be empty"));
    }

    let _ = JWT_ENCODING_KEY.set(EncodingKey::from_secret(secret.as_bytes()));
    let _ = JWT_DECODING_KEY.set(DecodingKey::from_secret(secret.as_bytes()));

    Ok(())
}

/// Generate an access token for a user
pub fn generate_token(user_id: Uuid, ttl_secs: i64) -> Result<String> {
    let encoding_key = JWT_ENCODING_KEY
        .get()
        .ok_or_else(|| anyhow!("JWT keys not initialized"))?;

    let now = Utc::now();
    let claims = Claims {
        sub: user_id.to_string(),
        iat: now.timestamp(),
        exp: (now + Duration::seconds(ttl_secs)).timestamp(),
    };

    encode(&Header::new(JWT_ALGORITHM), &claims, encoding_key)
        .map_err(|e| anyhow!("Token generation failed: {}", e))
}

/// Validate a token and return its claims
pub fn validate_token(token: &str) -> Result<TokenData<Claims>> {
    let decoding_key = JWT_DECODING_KEY
        .get()
        .ok_or_else(|| anyhow!("JWT keys not initialized"))?;

    let validation = Validation::new(JWT_ALGORITHM);

    decode::<Claims>(token, decoding_key, &validation)
        .map_err(|e| anyhow!("Token validation failed: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init() {
        initialize("test-secret").unwrap();
    }

    #[test]
    fn round_trips_a_valid_token() {
        init();
        let user_id = Uuid::new_v4();

        let token = generate_token(user_id, 3600).unwrap();
        let data = validate_token(&token).unwrap();

        assert_eq!(data.claims.sub, user_id.to_string());
        assert!(data.claims.exp > data.claims.iat);
    }

    #[test]
    fn rejects_a_tampered_token() {
        init();
        let token = generate_token(Uuid::new_v4(), 3600).unwrap();

        let mut tampered = token.clone();
        tampered.pop();
        tampered.push(if token.ends_with('A') { 'B' } else { 'A' });

        assert!(validate_token(&tampered).is_err());
    }

    #[test]
    fn rejects_an_expired_token() {
        init();
        let token = generate_token(Uuid::new_v4(), -120).unwrap();

        assert!(validate_token(&token).is_err());
    }
}
