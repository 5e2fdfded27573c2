use super::*;

diesel::define_sql_function! {
    fn last_insert_rowid() -> BigInt;
}

impl<'a> LocationRepo for DbReadOnly<'a> {
    fn create_location(&self, _location: NewLocation) -> Result<Location> {
        unreachable!();
    }
    fn set_location_visibility(&self, _id: i64, _visible: bool) -> Result<Location> {
        unreachable!();
    }
    fn delete_location(&self, _id: i64) -> Result<()> {
        unreachable!();
    }
    fn increment_location_clicks(&self, _id: i64) -> Result<u64> {
        unreachable!();
    }

    fn get_location(&self, id: i64) -> Result<Location> {
        get_location(&mut self.conn.borrow_mut(), id)
    }
    fn all_locations(&self) -> Result<Vec<Location>> {
        all_locations(&mut self.conn.borrow_mut())
    }
    fn visible_locations(&self) -> Result<Vec<Location>> {
        visible_locations(&mut self.conn.borrow_mut())
    }
    fn count_locations(&self) -> Result<usize> {
        count_locations(&mut self.conn.borrow_mut())
    }
}

impl<'a> LocationRepo for DbReadWrite<'a> {
    fn create_location(&self, location: NewLocation) -> Result<Location> {
        create_location(&mut self.conn.borrow_mut(), location)
    }
    fn set_location_visibility(&self, id: i64, visible: bool) -> Result<Location> {
        set_location_visibility(&mut self.conn.borrow_mut(), id, visible)
    }
    fn delete_location(&self, id: i64) -> Result<()> {
        delete_location(&mut self.conn.borrow_mut(), id)
    }
    fn increment_location_clicks(&self, id: i64) -> Result<u64> {
        increment_location_clicks(&mut self.conn.borrow_mut(), id)
    }

    fn get_location(&self, id: i64) -> Result<Location> {
        get_location(&mut self.conn.borrow_mut(), id)
    }
    fn all_locations(&self) -> Result<Vec<Location>> {
        all_locations(&mut self.conn.borrow_mut())
    }
    fn visible_locations(&self) -> Result<Vec<Location>> {
        visible_locations(&mut self.conn.borrow_mut())
    }
    fn count_locations(&self) -> Result<usize> {
        count_locations(&mut self.conn.borrow_mut())
    }
}

impl<'a> LocationRepo for DbConnection<'a> {
    fn create_location(&self, location: NewLocation) -> Result<Location> {
        create_location(&mut self.conn.borrow_mut(), location)
    }
    fn set_location_visibility(&self, id: i64, visible: bool) -> Result<Location> {
        set_location_visibility(&mut self.conn.borrow_mut(), id, visible)
    }
    fn delete_location(&self, id: i64) -> Result<()> {
        delete_location(&mut self.conn.borrow_mut(), id)
    }
    fn increment_location_clicks(&self, id: i64) -> Result<u64> {
        increment_location_clicks(&mut self.conn.borrow_mut(), id)
    }

    fn get_location(&self, id: i64) -> Result<Location> {
        get_location(&mut self.conn.borrow_mut(), id)
    }
    fn all_locations(&self) -> Result<Vec<Location>> {
        all_locations(&mut self.conn.borrow_mut())
    }
    fn visible_locations(&self) -> Result<Vec<Location>> {
        visible_locations(&mut self.conn.borrow_mut())
    }
    fn count_locations(&self) -> Result<usize> {
        count_locations(&mut self.conn.borrow_mut())
    }
}

fn create_location(conn: &mut SqliteConnection, location: NewLocation) -> Result<Location> {
    let NewLocation {
        pos,
        title,
        description,
        size,
        badges,
        categories,
        popularity,
        visible,
    } = location;
    let new_location = models::NewLocationEntity {
        lat: pos.lat,
        lng: pos.lng,
        title: &title,
        description: &description,
        size: &size,
        badges: models::store_string_list(&badges),
        categories: models::store_string_list(&categories),
        popularity: popularity.to_string(),
        clicks: 0,
        visible,
        created_at: Timestamp::now().into_seconds(),
    };
    diesel::insert_into(schema::locations::table)
        .values(&new_location)
        .execute(conn)
        .map_err(from_diesel_err)?;
    let id = diesel::select(last_insert_rowid())
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)?;
    get_location(conn, id)
}

fn get_location(conn: &mut SqliteConnection, id: i64) -> Result<Location> {
    use schema::locations::dsl;
    Ok(dsl::locations
        .filter(dsl::id.eq(id))
        .first::<models::LocationEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn all_locations(conn: &mut SqliteConnection) -> Result<Vec<Location>> {
    use schema::locations::dsl;
    Ok(dsl::locations
        .order(dsl::id.asc())
        .load::<models::LocationEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn visible_locations(conn: &mut SqliteConnection) -> Result<Vec<Location>> {
    use schema::locations::dsl;
    Ok(dsl::locations
        .filter(dsl::visible.eq(true))
        .order(dsl::id.asc())
        .load::<models::LocationEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn count_locations(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::locations::dsl;
    Ok(dsl::locations
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

fn set_location_visibility(conn: &mut SqliteConnection, id: i64, visible: bool) -> Result<Location> {
    use schema::locations::dsl;
    let updated = diesel::update(dsl::locations.filter(dsl::id.eq(id)))
        .set(dsl::visible.eq(visible))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if updated == 0 {
        return Err(repo::Error::NotFound);
    }
    get_location(conn, id)
}

fn delete_location(conn: &mut SqliteConnection, id: i64) -> Result<()> {
    use schema::locations::dsl;
    let deleted = diesel::delete(dsl::locations.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if deleted == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn increment_location_clicks(conn: &mut SqliteConnection, id: i64) -> Result<u64> {
    use schema::locations::dsl;
    let updated = diesel::update(dsl::locations.filter(dsl::id.eq(id)))
        .set(dsl::clicks.eq(dsl::clicks + 1))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if updated == 0 {
        return Err(repo::Error::NotFound);
    }
    let clicks = dsl::locations
        .select(dsl::clicks)
        .filter(dsl::id.eq(id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)?;
    Ok(clicks.max(0) as u64)
}
