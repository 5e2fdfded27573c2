use rocket::http::Header;

use super::*;
use crate::web::tests::prelude::*;
use snowmap_entities::url::Url;

fn setup() -> (Client, sqlite::Connections) {
    rocket_test_setup(vec![("/", routes())])
}

fn login_admin(client: &Client, db: &sqlite::Connections) -> json::JwtToken {
    register_admin(db, "admin", "secret");
    let res = client
        .post("/login")
        .header(ContentType::JSON)
        .body(r#"{"username":"admin","password":"secret"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    serde_json::from_str(&res.into_string().unwrap()).unwrap()
}

fn submit_location(client: &Client, map_link: &str) -> json::Location {
    let body = format!(
        r#"{{"title":"Сугроб у вокзала","map_link":"{map_link}","size":"100 м²"}}"#
    );
    let res = client
        .post("/locations")
        .header(ContentType::JSON)
        .body(body)
        .dispatch();
    assert_eq!(res.status(), Status::Created);
    serde_json::from_str(&res.into_string().unwrap()).unwrap()
}

#[test]
fn initially_no_public_locations() {
    let (client, _db) = setup();
    let res = client.get("/locations").dispatch();
    assert_eq!(res.status(), Status::Ok);
    assert_eq!(res.into_string().unwrap(), "[]");
}

#[test]
fn submitted_locations_are_hidden_until_reviewed() {
    let (client, db) = setup();
    let location = submit_location(
        &client,
        "https://yandex.by/maps/?ll=27.561500%2C53.904500&z=15",
    );
    assert_eq!(location.lat, 53.9045);
    assert_eq!(location.lng, 27.5615);
    assert_eq!(location.description, "Описание скоро появится");

    // Not on the public map yet
    let res = client.get("/locations").dispatch();
    assert_eq!(res.into_string().unwrap(), "[]");

    login_admin(&client, &db);

    // But visible in the admin panel
    let res = client.get("/admin/locations").dispatch();
    assert_eq!(res.status(), Status::Ok);
    let all: Vec<json::AdminLocation> =
        serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(all.len(), 1);
    assert!(!all[0].visible);

    // Clearing it by moderation publishes it
    let res = client
        .put(format!("/admin/locations/{}", location.id))
        .header(ContentType::JSON)
        .body(r#"{"visible":true}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Ok);

    let res = client.get("/locations").dispatch();
    let public: Vec<json::Location> = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(public.len(), 1);
    assert_eq!(public[0].id, location.id);
}

#[test]
fn submission_with_unresolvable_link_is_rejected() {
    let (client, db) = setup();
    let res = client
        .post("/locations")
        .header(ContentType::JSON)
        .body(r#"{"title":"Сугроб","map_link":"https://example.com/?foo=bar","size":"10 м²"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::BadRequest);

    login_admin(&client, &db);
    let res = client.get("/admin/locations").dispatch();
    assert_eq!(res.into_string().unwrap(), "[]");
}

#[test]
fn short_links_are_resolved_via_redirect() {
    let target = "https://yandex.by/maps/?ll=27.561500%2C53.904500&z=15"
        .parse::<Url>()
        .unwrap();
    let (client, _db) = rocket_test_setup_with_resolver(
        vec![("/", routes())],
        Box::new(FixedLinkResolver(target)),
    );
    let location = submit_location(&client, "https://clck.ru/3AbCdE");
    assert_eq!(location.lat, 53.9045);
    assert_eq!(location.lng, 27.5615);
}

#[test]
fn clicks_are_counted() {
    let (client, _db) = setup();
    let location = submit_location(
        &client,
        "https://www.google.com/maps/@53.904500,27.561500,15z",
    );

    let res = client
        .put(format!("/locations/{}/clicks", location.id))
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let count: json::ClickCount = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(count.clicks, 1);

    let res = client
        .put(format!("/locations/{}/clicks", location.id))
        .dispatch();
    let count: json::ClickCount = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(count.clicks, 2);
}

#[test]
fn clicks_for_an_unknown_location() {
    let (client, _db) = setup();
    let res = client.put("/locations/4711/clicks").dispatch();
    assert_eq!(res.status(), Status::NotFound);
}

#[test]
fn admin_routes_require_authentication() {
    let (client, _db) = setup();
    let res = client.get("/admin/locations").dispatch();
    assert_eq!(res.status(), Status::Unauthorized);
    let res = client
        .put("/admin/locations/1")
        .header(ContentType::JSON)
        .body(r#"{"visible":true}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Unauthorized);
    let res = client.delete("/admin/locations/1").dispatch();
    assert_eq!(res.status(), Status::Unauthorized);
}

#[test]
fn login_rejects_wrong_credentials() {
    let (client, db) = setup();
    register_admin(&db, "admin", "secret");
    let res = client
        .post("/login")
        .header(ContentType::JSON)
        .body(r#"{"username":"admin","password":"nope"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Unauthorized);
    let res = client
        .post("/login")
        .header(ContentType::JSON)
        .body(r#"{"username":"nobody","password":"secret"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Unauthorized);
}

#[test]
fn login_returns_a_usable_bearer_token() {
    let (client, db) = setup();
    let token = login_admin(&client, &db);

    // Drop the session cookie so that only the token authenticates.
    let res = client
        .post("/logout")
        .header(ContentType::JSON)
        .dispatch();
    assert_eq!(res.status(), Status::Ok);

    let res = client
        .get("/admin/locations")
        .header(Header::new("Authorization", format!("Bearer {}", token.token)))
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
}

#[test]
fn logout_ends_the_cookie_session() {
    let (client, db) = setup();
    login_admin(&client, &db);
    let res = client.get("/admin/locations").dispatch();
    assert_eq!(res.status(), Status::Ok);

    let res = client
        .post("/logout")
        .header(ContentType::JSON)
        .dispatch();
    assert_eq!(res.status(), Status::Ok);

    let res = client.get("/admin/locations").dispatch();
    assert_eq!(res.status(), Status::Unauthorized);
}

#[test]
fn logout_invalidates_the_bearer_token() {
    let (client, db) = setup();
    let token = login_admin(&client, &db);
    let auth_header = Header::new("Authorization", format!("Bearer {}", token.token));

    let res = client
        .post("/logout")
        .header(ContentType::JSON)
        .header(auth_header.clone())
        .dispatch();
    assert_eq!(res.status(), Status::Ok);

    let res = client.get("/admin/locations").header(auth_header).dispatch();
    assert_eq!(res.status(), Status::Unauthorized);
}

#[test]
fn parse_map_link() {
    let (client, _db) = setup();
    let res = client
        .post("/parse-map-link")
        .header(ContentType::JSON)
        .body(r#"{"url":"https://2gis.by/minsk/geo/27.561500%2C53.904500"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let pos: json::Coordinate = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(pos.lat, 53.9045);
    assert_eq!(pos.lng, 27.5615);
}

#[test]
fn parse_map_link_without_coordinates() {
    let (client, _db) = setup();
    let res = client
        .post("/parse-map-link")
        .header(ContentType::JSON)
        .body(r#"{"url":"https://example.com/"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::BadRequest);
}

#[test]
fn delete_location() {
    let (client, db) = setup();
    let location = submit_location(
        &client,
        "https://yandex.by/maps/?ll=27.561500%2C53.904500&z=15",
    );
    login_admin(&client, &db);

    let res = client
        .delete(format!("/admin/locations/{}", location.id))
        .dispatch();
    assert_eq!(res.status(), Status::Ok);

    let res = client.get("/admin/locations").dispatch();
    assert_eq!(res.into_string().unwrap(), "[]");

    let res = client
        .delete(format!("/admin/locations/{}", location.id))
        .dispatch();
    assert_eq!(res.status(), Status::NotFound);
}

#[test]
fn get_version() {
    let (client, _db) = setup();
    let res = client.get("/server/version").dispatch();
    assert_eq!(res.status(), Status::Ok);
    assert_eq!(res.into_string().unwrap(), DUMMY_VERSION);
}
