use diesel::{
    self,
    prelude::*,
    result::Error as DieselError,
};

use snowmap_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod location;
mod user;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(diesel::result::DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}
