use anyhow::Result;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// JWT Claims - data stored in the token
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub email: String, // Account email (the uniqueness key)
    pub exp: i64,      // Expiration timestamp
    pub iat: i64,      // Issued at timestamp
}

/// JWT Service - creates and verifies session tokens
///
/// Tokens are stateless: the server keeps no session table, so a token is
/// valid until it expires.
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_ttl: chrono::Duration,
    refresh_ttl: chrono::Duration,
}

impl JwtService {
    /// Create new JWT service with the shared secret and token lifetimes
    pub fn new(secret: &str, access_ttl_secs: i64, refresh_ttl_secs: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_ttl: chrono::Duration::seconds(access_ttl_secs),
            refresh_ttl: chrono::Duration::seconds(refresh_ttl_secs),
        }
    }

    /// Create a short-lived access token (returned in the login body)
    pub fn create_access_token(&self, email: &str) -> Result<String> {
        self.sign(email, self.access_ttl)
    }

    /// Create a longer-lived refresh token (delivered via cookie)
    pub fn create_refresh_token(&self, email: &str) -> Result<String> {
        self.sign(email, self.refresh_ttl)
    }

    fn sign(&self, email: &str, ttl: chrono::Duration) -> Result<String> {
        let now = chrono::Utc::now();

        let claims = Claims {
            email: email.to_string(),
            exp: (now + ttl).timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(Into::into)
    }

    /// Verify and decode a token
    ///
    /// Returns claims if the token is valid and not expired
    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(Into::into)
    }
}
