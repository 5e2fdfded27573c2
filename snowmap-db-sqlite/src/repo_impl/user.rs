use super::*;

impl<'a> UserRepo for DbReadOnly<'a> {
    fn create_user(&self, _username: &str, _password: &Password) -> Result<()> {
        unreachable!();
    }

    fn get_user_by_username(&self, username: &str) -> Result<User> {
        get_user_by_username(&mut self.conn.borrow_mut(), username)
    }
    fn try_get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        try_get_user_by_username(&mut self.conn.borrow_mut(), username)
    }
    fn count_users(&self) -> Result<usize> {
        count_users(&mut self.conn.borrow_mut())
    }
}

impl<'a> UserRepo for DbReadWrite<'a> {
    fn create_user(&self, username: &str, password: &Password) -> Result<()> {
        create_user(&mut self.conn.borrow_mut(), username, password)
    }

    fn get_user_by_username(&self, username: &str) -> Result<User> {
        get_user_by_username(&mut self.conn.borrow_mut(), username)
    }
    fn try_get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        try_get_user_by_username(&mut self.conn.borrow_mut(), username)
    }
    fn count_users(&self) -> Result<usize> {
        count_users(&mut self.conn.borrow_mut())
    }
}

impl<'a> UserRepo for DbConnection<'a> {
    fn create_user(&self, username: &str, password: &Password) -> Result<()> {
        create_user(&mut self.conn.borrow_mut(), username, password)
    }

    fn get_user_by_username(&self, username: &str) -> Result<User> {
        get_user_by_username(&mut self.conn.borrow_mut(), username)
    }
    fn try_get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        try_get_user_by_username(&mut self.conn.borrow_mut(), username)
    }
    fn count_users(&self) -> Result<usize> {
        count_users(&mut self.conn.borrow_mut())
    }
}

fn create_user(conn: &mut SqliteConnection, username: &str, password: &Password) -> Result<()> {
    let new_user = models::NewUserEntity {
        username,
        password: password.as_ref().to_owned(),
        created_at: Timestamp::now().into_seconds(),
    };
    diesel::insert_into(schema::users::table)
        .values(&new_user)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_user_by_username(conn: &mut SqliteConnection, username: &str) -> Result<User> {
    use schema::users::dsl;
    Ok(dsl::users
        .filter(dsl::username.eq(username))
        .first::<models::UserEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn try_get_user_by_username(conn: &mut SqliteConnection, username: &str) -> Result<Option<User>> {
    use schema::users::dsl;
    Ok(dsl::users
        .filter(dsl::username.eq(username))
        .first::<models::UserEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(Into::into))
}

fn count_users(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::users::dsl;
    Ok(dsl::users
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
