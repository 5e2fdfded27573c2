pub mod entities {
    pub use snowmap_entities::{geo::*, location::*, password::*, time::*, user::*};
}

pub mod gateways;
pub mod maplink;
pub mod repositories;
pub mod usecases;
pub mod util;
