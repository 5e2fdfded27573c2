#[macro_use]
extern crate log;

mod create_location;
mod review_location;

pub mod prelude {
    pub use super::{create_location::*, review_location::*};
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use snowmap_core::usecases;

pub(crate) mod sqlite {
    pub use snowmap_db_sqlite::Connections;
}
