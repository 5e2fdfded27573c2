mod create_admin_user;
mod delete_location;
mod error;
mod load_locations;
mod login;
mod resolve_map_link;
mod review_location;
mod submit_location;
mod track_click;

#[cfg(test)]
pub mod tests;

pub use self::{
    create_admin_user::*, delete_location::*, error::Error, load_locations::*, login::*,
    resolve_map_link::*, review_location::*, submit_location::*, track_click::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
}
