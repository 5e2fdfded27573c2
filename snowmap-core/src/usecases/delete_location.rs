use super::prelude::*;

pub fn delete_location<R: LocationRepo>(repo: &R, id: i64) -> Result<()> {
    repo.delete_location(id)?;
    log::info!("Deleted location {id}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use crate::repositories::Error as RepoError;

    #[test]
    fn delete_by_id() {
        let db = MockDb::default();
        let id = db.add_location("drift", Coordinate::new(53.9, 27.5), true);
        assert!(delete_location(&db, id).is_ok());
        assert_eq!(db.locations.borrow().len(), 0);
        assert!(matches!(
            delete_location(&db, id),
            Err(Error::Repo(RepoError::NotFound))
        ));
    }
}
