//! JWT issuance and verification.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::{
    error::{auth::AuthError, internal::InternalError, AppError},
    model::user::User,
};

/// Claims carried by an access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID as a string.
    pub sub: String,
    pub username: String,
    pub admin: bool,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    /// User ID encoded in `sub`.
    pub fn user_id(&self) -> Result<i32, AuthError> {
        self.sub
            .parse::<i32>()
            .map_err(|_| AuthError::InvalidToken(format!("Invalid subject '{}'", self.sub)))
    }
}

/// Signs and verifies HS256 access tokens with a shared secret.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    /// Issues a token for the user, valid for the configured lifetime.
    pub fn issue(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.id.to_string(),
            username: user.username.clone(),
            admin: user.admin,
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| InternalError::TokenEncoding(e).into())
    }

    /// Verifies signature, algorithm and expiry and returns the claims.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let validation = Validation::new(Algorithm::HS256);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }
}
