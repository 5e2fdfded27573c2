// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in seconds.

use snowmap_core::entities::*;

use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = locations)]
pub struct NewLocationEntity<'a> {
    pub lat: f64,
    pub lng: f64,
    pub title: &'a str,
    pub description: &'a str,
    pub size: &'a str,
    pub badges: String,
    pub categories: String,
    pub popularity: String,
    pub clicks: i64,
    pub visible: bool,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct LocationEntity {
    pub id: i64,
    pub lat: f64,
    pub lng: f64,
    pub title: String,
    pub description: String,
    pub size: String,
    pub badges: String,
    pub categories: String,
    pub popularity: String,
    pub clicks: i64,
    pub visible: bool,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = users)]
pub struct NewUserEntity<'a> {
    pub username: &'a str,
    pub password: String,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct UserEntity {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub created_at: i64,
}

fn load_string_list(json: &str) -> Vec<String> {
    serde_json::from_str(json).unwrap_or_else(|err| {
        // Tolerate malformed rows instead of failing the whole query.
        log::warn!("Malformed string list in database ({err}): {json}");
        vec![]
    })
}

pub fn store_string_list(list: &[String]) -> String {
    serde_json::to_string(list).expect("string lists are always serializable")
}

impl From<LocationEntity> for Location {
    fn from(from: LocationEntity) -> Self {
        let LocationEntity {
            id,
            lat,
            lng,
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
        let popularity = popularity.parse::<Popularity>().unwrap_or_else(|_| {
            log::warn!("Unknown popularity value in database: {popularity}");
            Popularity::default()
        });
        Self {
            id,
            pos: Coordinate::new(lat, lng),
            title,
            description,
            size,
            badges: load_string_list(&badges),
            categories: load_string_list(&categories),
            popularity,
            clicks: clicks.max(0) as u64,
            visible,
            created_at: Timestamp::from_seconds(created_at),
        }
    }
}

impl From<UserEntity> for User {
    fn from(from: UserEntity) -> Self {
        let UserEntity {
            id,
            username,
            password,
            created_at,
        } = from;
        Self {
            id,
            username,
            password: Password::from_hash(password),
            created_at: Timestamp::from_seconds(created_at),
        }
    }
}
