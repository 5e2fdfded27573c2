use crate::{geo::Coordinate, time::Timestamp};

use strum::{Display, EnumString};

/// Rough visitor volume of a location, used by the map legend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Popularity {
    #[default]
    Small,
    Medium,
    Large,
}

/// A persisted point of interest.
///
/// Records are created hidden (`visible == false`) and only appear on
/// the public map after moderation.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub id          : i64,
    pub pos         : Coordinate,
    pub title       : String,
    pub description : String,
    pub size        : String,
    pub badges      : Vec<String>,
    pub categories  : Vec<String>,
    pub popularity  : Popularity,
    pub clicks      : u64,
    pub visible     : bool,
    pub created_at  : Timestamp,
}

/// A validated location draft, ready to be persisted.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct NewLocation {
    pub pos         : Coordinate,
    pub title       : String,
    pub description : String,
    pub size        : String,
    pub badges      : Vec<String>,
    pub categories  : Vec<String>,
    pub popularity  : Popularity,
    pub visible     : bool,
}
