// Low-level database access traits.
// Each repository is responsible for a single entity. Related entities
// are only referenced by their id and never modified or loaded by
// another repository.

use crate::entities::*;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait LocationRepo {
    fn create_location(&self, location: NewLocation) -> Result<Location>;

    fn get_location(&self, id: i64) -> Result<Location>;
    fn all_locations(&self) -> Result<Vec<Location>>;
    // Only locations cleared by moderation
    fn visible_locations(&self) -> Result<Vec<Location>>;
    fn count_locations(&self) -> Result<usize>;

    fn set_location_visibility(&self, id: i64, visible: bool) -> Result<Location>;
    fn delete_location(&self, id: i64) -> Result<()>;

    // Returns the new counter value
    fn increment_location_clicks(&self, id: i64) -> Result<u64>;
}

pub trait UserRepo {
    fn create_user(&self, username: &str, password: &Password) -> Result<()>;

    fn get_user_by_username(&self, username: &str) -> Result<User>;
    fn try_get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    fn count_users(&self) -> Result<usize>;
}
