use super::prelude::*;

/// Increment the click counter of a location and return the new value.
///
/// Fire-and-forget from the client's point of view; failures must never
/// block the primary user action (opening the map link).
pub fn bump_location_clicks<R: LocationRepo>(repo: &R, id: i64) -> Result<u64> {
    Ok(repo.increment_location_clicks(id)?)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    #[test]
    fn clicks_are_counted_per_location() {
        let db = MockDb::default();
        let id = db.add_location("drift", Coordinate::new(53.9, 27.5), true);
        let other = db.add_location("other", Coordinate::new(53.8, 27.6), true);
        assert_eq!(bump_location_clicks(&db, id).unwrap(), 1);
        assert_eq!(bump_location_clicks(&db, id).unwrap(), 2);
        assert_eq!(bump_location_clicks(&db, other).unwrap(), 1);
    }
}
