use super::*;
use snowmap_core::{entities::Location, gateways::link_resolver::LinkResolverGateway};

pub fn create_location(
    connections: &sqlite::Connections,
    resolver: &dyn LinkResolverGateway,
    submission: usecases::NewLocationSubmission,
) -> Result<Location> {
    // Resolve the map link before the transaction starts; it may
    // require a network round trip and must not hold the write lock.
    let draft = usecases::prepare_location_submission(resolver, submission)?;
    let mut connection = connections.exclusive()?;
    let location = connection.transaction(|conn| usecases::store_location(conn, draft))?;
    info!("Created location {} ({})", location.id, location.title);
    Ok(location)
}
