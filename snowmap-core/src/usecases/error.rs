use crate::repositories;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The title is invalid")]
    Title,
    #[error("The size label is invalid")]
    Size,
    #[error("Invalid URL")]
    Url,
    #[error("Could not determine coordinates from the map link")]
    MapLink,
    #[error("Invalid position")]
    InvalidPosition,
    #[error("Invalid password")]
    Password,
    #[error("Invalid credentials")]
    Credentials,
    #[error("The user already exists")]
    UserExists,
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<snowmap_entities::password::ParseError> for Error {
    fn from(_: snowmap_entities::password::ParseError) -> Self {
        Self::Password
    }
}

impl From<snowmap_entities::url::ParseError> for Error {
    fn from(_: snowmap_entities::url::ParseError) -> Self {
        Self::Url
    }
}
