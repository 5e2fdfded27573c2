use snowmap_entities as e;

use super::*;

impl From<e::geo::Coordinate> for Coordinate {
    fn from(from: e::geo::Coordinate) -> Self {
        let e::geo::Coordinate { lat, lng } = from;
        Self { lat, lng }
    }
}

impl From<e::location::Location> for Location {
    fn from(from: e::location::Location) -> Self {
        let e::location::Location {
            id,
            pos,
            title,
            description,
            size,
            badges,
            categories,
            popularity,
            clicks,
            visible: _,
            created_at,
        } = from;
        Self {
            id,
            lat: pos.lat,
            lng: pos.lng,
            title,
            description,
            size,
            badges,
            categories,
            popularity: popularity.to_string(),
            clicks,
            created_at: created_at.into_seconds(),
        }
    }
}

impl From<e::location::Location> for AdminLocation {
    fn from(from: e::location::Location) -> Self {
        let e::location::Location {
            id,
            pos,
            title,
            description,
            size,
            badges,
            categories,
            popularity,
            clicks,
            visible,
            created_at,
        } = from;
        Self {
            id,
            lat: pos.lat,
            lng: pos.lng,
            title,
            description,
            size,
            badges,
            categories,
            popularity: popularity.to_string(),
            clicks,
            visible,
            created_at: created_at.into_seconds(),
        }
    }
}
