use super::prelude::*;

/// Toggle the moderation visibility flag of a location.
pub fn review_location<R: LocationRepo>(repo: &R, id: i64, visible: bool) -> Result<Location> {
    let location = repo.set_location_visibility(id, visible)?;
    log::info!(
        "Location {} is now {}",
        location.id,
        if location.visible { "visible" } else { "hidden" }
    );
    Ok(location)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use crate::repositories::Error as RepoError;

    #[test]
    fn toggle_visibility() {
        let db = MockDb::default();
        let id = db.add_location("drift", Coordinate::new(53.9, 27.5), false);
        let location = review_location(&db, id, true).unwrap();
        assert!(location.visible);
        let location = review_location(&db, id, false).unwrap();
        assert!(!location.visible);
    }

    #[test]
    fn reviewing_a_missing_location_fails() {
        let db = MockDb::default();
        assert!(matches!(
            review_location(&db, 4711, true),
            Err(Error::Repo(RepoError::NotFound))
        ));
    }
}
