//! Signed session tokens.
//!
//! Tokens are HS256 JWTs whose subject is the user ID. They carry no other state, so a token
//! stays valid until it expires even if the user is removed; the user is looked up again on
//! every authenticated request.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::error::{auth::AuthError, Error};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Expiry as seconds since the Unix epoch
    pub exp: i64,
}

/// Issues and validates session tokens with a shared secret.
#[derive(Clone)]
pub struct JwtAuth {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    duration: Duration,
}

impl JwtAuth {
    pub fn new(secret: &str, duration: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            duration,
        }
    }

    /// Generates a token for the user, valid for the configured duration.
    pub fn generate_token(&self, user_id: i32) -> Result<String, Error> {
        let claims = Claims {
            sub: user_id.to_string(),
            exp: (Utc::now() + self.duration).timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(AuthError::TokenSigningFailed)?;

        Ok(token)
    }

    /// Validates a token and returns the user ID it was issued for.
    ///
    /// # Returns
    /// - `Ok(i32)` - Token is authentic and unexpired
    /// - `Err(Error::AuthError(AuthError::InvalidToken))` - Bad signature, malformed or expired
    /// - `Err(Error::AuthError(AuthError::InvalidSubject))` - Subject is not a user ID
    pub fn validate_token(&self, token: &str) -> Result<i32, Error> {
        let data = decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map_err(AuthError::InvalidToken)?;

        let user_id = data
            .claims
            .sub
            .parse::<i32>()
            .map_err(|_| AuthError::InvalidSubject(data.claims.sub.clone()))?;

        Ok(user_id)
    }
}
