use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

pub fn create_admin_user<R: UserRepo>(repo: &R, u: NewUser) -> Result<()> {
    let username = u.username.trim().to_owned();
    if username.is_empty() {
        return Err(Error::Credentials);
    }
    let password = u.password.parse::<Password>()?;
    if repo.try_get_user_by_username(&username)?.is_some() {
        return Err(Error::UserExists);
    }
    log::debug!("Creating new admin user: username = {username}");
    repo.create_user(&username, &password)?;
    Ok(())
}
