use std::str::FromStr;

use pwhash::bcrypt;
use thiserror::Error;

/// A bcrypt-hashed password.
///
/// Parsing a plain-text string hashes it; the clear text is never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Password(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid password")]
pub struct ParseError;

impl Password {
    pub const fn min_len() -> usize {
        6
    }

    /// Wrap an already-hashed value, e.g. when loading from the database.
    pub fn from_hash(hash: String) -> Self {
        Self(hash)
    }

    pub fn verify(&self, plain: &str) -> bool {
        bcrypt::verify(plain, &self.0)
    }
}

impl FromStr for Password {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.chars().count() < Self::min_len() {
            return Err(ParseError);
        }
        bcrypt::hash(s).map(Self).map_err(|_| ParseError)
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Password> for String {
    fn from(from: Password) -> Self {
        from.0
    }
}
