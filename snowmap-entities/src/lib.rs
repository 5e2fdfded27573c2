#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # snowmap-entities
//!
//! Reusable, agnostic domain entities for the snowdrift map.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific business logic.

pub mod geo;
pub mod location;
pub mod password;
pub mod time;
pub mod user;

pub mod url {
    pub use url::{ParseError, Url};
}
