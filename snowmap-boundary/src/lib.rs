use serde::{Deserialize, Serialize};

mod conv;

/// A location as shown on the public map.
#[rustfmt::skip]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Location {
    pub id          : i64,
    pub lat         : f64,
    pub lng         : f64,
    pub title       : String,
    pub description : String,
    pub size        : String,
    pub badges      : Vec<String>,
    pub categories  : Vec<String>,
    pub popularity  : String,
    pub clicks      : u64,
    pub created_at  : i64,
}

/// A location as shown in the admin panel, including the moderation flag.
#[rustfmt::skip]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AdminLocation {
    pub id          : i64,
    pub lat         : f64,
    pub lng         : f64,
    pub title       : String,
    pub description : String,
    pub size        : String,
    pub badges      : Vec<String>,
    pub categories  : Vec<String>,
    pub popularity  : String,
    pub clicks      : u64,
    pub visible     : bool,
    pub created_at  : i64,
}

/// Raw form fields of a new location submission.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NewLocation {
    pub title: String,
    pub map_link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub size: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

/// A pasted map link to be resolved into a [`Coordinate`].
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MapLinkQuery {
    pub url: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct JwtToken {
    pub token: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Visibility {
    pub visible: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct ClickCount {
    pub clicks: u64,
}

/// The JSON body of an error response.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Error {
    pub http_status: u16,
    pub message: String,
}
