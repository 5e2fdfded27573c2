use std::{fmt::Display, result};

use rocket::{
    self, delete, get,
    http::{Cookie, CookieJar, Status},
    post, put,
    response::{self, status, Responder},
    routes,
    serde::json::{Error as JsonError, Json},
    Route, State,
};

use super::guards::*;
use crate::web::{jwt, sqlite};
use snowmap_application::prelude as flows;
use snowmap_boundary as json;
use snowmap_core::usecases;

mod admin;
mod error;
mod locations;
mod maplink;
mod users;
mod util;

pub use self::error::Error as ApiError;

#[cfg(test)]
pub mod tests;

type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   locations   --- //
        locations::get_locations,
        locations::post_location,
        locations::put_location_clicks,
        // ---   map links   --- //
        maplink::post_parse_map_link,
        // ---   admin   --- //
        admin::get_admin_locations,
        admin::put_admin_location_visibility,
        admin::delete_admin_location,
        // ---   users   --- //
        users::post_login,
        users::post_logout,
        util::get_version,
    ]
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = json::Error {
        http_status: status.code,
        message,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
