use super::*;

#[get("/locations")]
pub fn get_locations(db: sqlite::Connections) -> Result<Vec<json::Location>> {
    let locations = usecases::load_visible_locations(&db.shared()?)?;
    Ok(Json(locations.into_iter().map(Into::into).collect()))
}

#[post("/locations", format = "application/json", data = "<submission>")]
pub fn post_location(
    db: sqlite::Connections,
    link_resolver: &State<LinkResolver>,
    submission: JsonResult<json::NewLocation>,
) -> result::Result<status::Created<Json<json::Location>>, ApiError> {
    let json::NewLocation {
        title,
        map_link,
        description,
        size,
    } = submission?.into_inner();
    let submission = usecases::NewLocationSubmission {
        title,
        map_link,
        description,
        size,
    };
    let location = flows::create_location(&db, &***link_resolver, submission)?;
    let url = format!("/locations/{}", location.id);
    Ok(status::Created::new(url).body(Json(location.into())))
}

#[put("/locations/<id>/clicks")]
pub fn put_location_clicks(db: sqlite::Connections, id: i64) -> Result<json::ClickCount> {
    let mut connection = db.exclusive()?;
    let clicks = connection.transaction(|conn| usecases::bump_location_clicks(conn, id))?;
    Ok(Json(json::ClickCount { clicks }))
}
