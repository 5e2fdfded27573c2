use super::prelude::*;

/// Locations cleared by moderation, for the public map.
pub fn load_visible_locations<R: LocationRepo>(repo: &R) -> Result<Vec<Location>> {
    Ok(repo.visible_locations()?)
}

/// All locations including hidden ones, for the admin panel.
pub fn load_all_locations<R: LocationRepo>(repo: &R) -> Result<Vec<Location>> {
    Ok(repo.all_locations()?)
}
