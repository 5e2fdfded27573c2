use std::collections::HashSet;

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::{Duration, OffsetDateTime};

pub const TOKEN_VALIDITY: Duration = Duration::hours(24);

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Jwt(#[from] jsonwebtoken::errors::Error),
    #[error("The token has been invalidated")]
    Invalidated,
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    iat: i64,
    exp: i64,
}

/// Issues and validates the bearer tokens of admin sessions.
///
/// The signing secret is generated at startup, so restarting the
/// server invalidates all outstanding tokens.
pub struct JwtState {
    header: Header,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    invalidated_tokens: Mutex<HashSet<String>>,
}

impl JwtState {
    pub fn new() -> Self {
        use rand::Rng as _;
        let mut secret = [0u8; 32];
        rand::thread_rng().fill(&mut secret[..]);
        Self::with_secret(&secret)
    }

    pub fn with_secret(secret: &[u8]) -> Self {
        Self {
            header: Header::default(),
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation: Validation::default(),
            invalidated_tokens: Mutex::new(HashSet::new()),
        }
    }

    pub fn generate_token(&self, username: &str) -> Result<String, Error> {
        let iat = OffsetDateTime::now_utc();
        let exp = iat + TOKEN_VALIDITY;
        let claims = Claims {
            sub: username.to_owned(),
            iat: iat.unix_timestamp(),
            exp: exp.unix_timestamp(),
        };
        Ok(encode(&self.header, &claims, &self.encoding_key)?)
    }

    pub fn invalidate_token(&self, token: String) {
        let mut invalidated_tokens = self.invalidated_tokens.lock();
        // Expired entries no longer decode and can be dropped, so the
        // set does not grow unboundedly over the process lifetime.
        invalidated_tokens
            .retain(|t| decode::<Claims>(t, &self.decoding_key, &self.validation).is_ok());
        invalidated_tokens.insert(token);
    }

    #[cfg(test)]
    fn invalidated_token_count(&self) -> usize {
        self.invalidated_tokens.lock().len()
    }

    pub fn validate_token_and_get_username(&self, token: &str) -> Result<String, Error> {
        if self.invalidated_tokens.lock().contains(token) {
            return Err(Error::Invalidated);
        }
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)?;
        Ok(data.claims.sub)
    }
}

impl Default for JwtState {
    fn default() -> Self {
        Self::new()
    }
}
