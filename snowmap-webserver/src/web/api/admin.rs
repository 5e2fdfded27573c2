use super::*;

#[get("/admin/locations")]
pub fn get_admin_locations(
    db: sqlite::Connections,
    _account: Account,
) -> Result<Vec<json::AdminLocation>> {
    let locations = usecases::load_all_locations(&db.shared()?)?;
    Ok(Json(locations.into_iter().map(Into::into).collect()))
}

#[put(
    "/admin/locations/<id>",
    format = "application/json",
    data = "<visibility>"
)]
pub fn put_admin_location_visibility(
    db: sqlite::Connections,
    _account: Account,
    id: i64,
    visibility: JsonResult<json::Visibility>,
) -> Result<json::AdminLocation> {
    let json::Visibility { visible } = visibility?.into_inner();
    let location = flows::review_location(&db, id, visible)?;
    Ok(Json(location.into()))
}

#[delete("/admin/locations/<id>")]
pub fn delete_admin_location(
    db: sqlite::Connections,
    _account: Account,
    id: i64,
) -> Result<()> {
    flows::delete_location(&db, id)?;
    Ok(Json(()))
}
