use super::prelude::*;

#[derive(Debug)]
pub struct Credentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Verify admin credentials.
///
/// An unknown username and a wrong password are indistinguishable to
/// the caller.
pub fn login_with_username<R>(repo: &R, credentials: &Credentials) -> Result<User>
where
    R: UserRepo,
{
    repo.try_get_user_by_username(credentials.username)
        .map_err(Error::Repo)
        .and_then(|user| match user {
            Some(user) if user.password.verify(credentials.password) => Ok(user),
            _ => Err(Error::Credentials),
        })
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    #[test]
    fn login_with_valid_credentials() {
        let db = MockDb::default();
        db.add_user("admin", "secret");
        let user = login_with_username(
            &db,
            &Credentials {
                username: "admin",
                password: "secret",
            },
        )
        .unwrap();
        assert_eq!(user.username, "admin");
    }

    #[test]
    fn wrong_password_and_unknown_user_are_indistinguishable() {
        let db = MockDb::default();
        db.add_user("admin", "secret");
        let wrong_password = login_with_username(
            &db,
            &Credentials {
                username: "admin",
                password: "nope",
            },
        );
        let unknown_user = login_with_username(
            &db,
            &Credentials {
                username: "nobody",
                password: "secret",
            },
        );
        assert!(matches!(wrong_password, Err(Error::Credentials)));
        assert!(matches!(unknown_user, Err(Error::Credentials)));
    }
}
