use super::*;
use snowmap_core::entities::Location;

pub fn review_location(
    connections: &sqlite::Connections,
    id: i64,
    visible: bool,
) -> Result<Location> {
    let mut connection = connections.exclusive()?;
    Ok(connection.transaction(|conn| usecases::review_location(conn, id, visible))?)
}

pub fn delete_location(connections: &sqlite::Connections, id: i64) -> Result<()> {
    let mut connection = connections.exclusive()?;
    connection.transaction(|conn| usecases::delete_location(conn, id))?;
    warn!("Permanently removed location {id}");
    Ok(())
}
