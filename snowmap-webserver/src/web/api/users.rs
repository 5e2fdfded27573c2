use super::*;

#[post("/login", format = "application/json", data = "<login>")]
pub fn post_login(
    db: sqlite::Connections,
    cookies: &CookieJar<'_>,
    login: JsonResult<json::Credentials>,
    jwt_state: &State<jwt::JwtState>,
) -> Result<json::JwtToken> {
    let login = login?.into_inner();
    {
        let credentials = usecases::Credentials {
            username: &login.username,
            password: &login.password,
        };
        usecases::login_with_username(&db.shared()?, &credentials).map_err(|err| {
            debug!("Login of '{}' failed: {}", login.username, err);
            err
        })?;
    }

    let token = jwt_state.generate_token(&login.username)?;
    cookies.add_private(
        Cookie::build((COOKIE_USERNAME_KEY, login.username))
            .same_site(rocket::http::SameSite::Lax),
    );
    Ok(Json(json::JwtToken { token }))
}

#[post("/logout", format = "application/json")]
pub fn post_logout(
    auth: Auth,
    cookies: &CookieJar<'_>,
    jwt_state: &State<jwt::JwtState>,
) -> Json<()> {
    cookies.remove_private(Cookie::from(COOKIE_USERNAME_KEY));
    for bearer in auth.bearer_tokens() {
        jwt_state.invalidate_token(bearer.to_owned());
    }
    Json(())
}
