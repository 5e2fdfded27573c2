use crate::{password::Password, time::Timestamp};

/// An admin account.
///
/// There are no roles: whoever can log in may moderate.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id         : i64,
    pub username   : String,
    pub password   : Password,
    pub created_at : Timestamp,
}
