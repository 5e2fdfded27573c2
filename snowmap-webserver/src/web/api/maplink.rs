use super::*;

#[post("/parse-map-link", format = "application/json", data = "<query>")]
pub fn post_parse_map_link(
    link_resolver: &State<LinkResolver>,
    query: JsonResult<json::MapLinkQuery>,
) -> Result<json::Coordinate> {
    let query = query?.into_inner();
    let pos = usecases::resolve_map_link(&***link_resolver, &query.url)?;
    Ok(Json(pos.into()))
}
