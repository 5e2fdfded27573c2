use std::cell::{Cell, RefCell};

use crate::{
    entities::*,
    gateways::link_resolver::LinkResolverGateway,
    repositories::{Error as RepoError, *},
};
use snowmap_entities::url::Url;

type RepoResult<T> = std::result::Result<T, RepoError>;

#[derive(Debug, Default)]
pub struct MockDb {
    pub locations: RefCell<Vec<Location>>,
    pub users: RefCell<Vec<User>>,
}

impl MockDb {
    fn next_location_id(&self) -> i64 {
        self.locations
            .borrow()
            .iter()
            .map(|l| l.id)
            .max()
            .unwrap_or(0)
            + 1
    }

    pub fn add_location(&self, title: &str, pos: Coordinate, visible: bool) -> i64 {
        self.create_location(NewLocation {
            pos,
            title: title.to_string(),
            description: String::new(),
            size: "small".to_string(),
            badges: vec![],
            categories: vec![],
            popularity: Popularity::default(),
            visible,
        })
        .unwrap()
        .id
    }

    pub fn add_user(&self, username: &str, password: &str) {
        self.create_user(username, &password.parse::<Password>().unwrap())
            .unwrap()
    }
}

impl LocationRepo for MockDb {
    fn create_location(&self, location: NewLocation) -> RepoResult<Location> {
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
        let location = Location {
            id: self.next_location_id(),
            pos,
            title,
            description,
            size,
            badges,
            categories,
            popularity,
            clicks: 0,
            visible,
            created_at: Timestamp::now(),
        };
        self.locations.borrow_mut().push(location.clone());
        Ok(location)
    }

    fn get_location(&self, id: i64) -> RepoResult<Location> {
        self.locations
            .borrow()
            .iter()
            .find(|l| l.id == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn all_locations(&self) -> RepoResult<Vec<Location>> {
        Ok(self.locations.borrow().clone())
    }

    fn visible_locations(&self) -> RepoResult<Vec<Location>> {
        Ok(self
            .locations
            .borrow()
            .iter()
            .filter(|l| l.visible)
            .cloned()
            .collect())
    }

    fn count_locations(&self) -> RepoResult<usize> {
        Ok(self.locations.borrow().len())
    }

    fn set_location_visibility(&self, id: i64, visible: bool) -> RepoResult<Location> {
        let mut locations = self.locations.borrow_mut();
        let location = locations
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or(RepoError::NotFound)?;
        location.visible = visible;
        Ok(location.clone())
    }

    fn delete_location(&self, id: i64) -> RepoResult<()> {
        let mut locations = self.locations.borrow_mut();
        let len_before = locations.len();
        locations.retain(|l| l.id != id);
        if locations.len() == len_before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    fn increment_location_clicks(&self, id: i64) -> RepoResult<u64> {
        let mut locations = self.locations.borrow_mut();
        let location = locations
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or(RepoError::NotFound)?;
        location.clicks += 1;
        Ok(location.clicks)
    }
}

impl UserRepo for MockDb {
    fn create_user(&self, username: &str, password: &Password) -> RepoResult<()> {
        if self.try_get_user_by_username(username)?.is_some() {
            return Err(RepoError::AlreadyExists);
        }
        let mut users = self.users.borrow_mut();
        let user = User {
            id: users.len() as i64 + 1,
            username: username.to_string(),
            password: password.clone(),
            created_at: Timestamp::now(),
        };
        users.push(user);
        Ok(())
    }

    fn get_user_by_username(&self, username: &str) -> RepoResult<User> {
        self.try_get_user_by_username(username)?
            .ok_or(RepoError::NotFound)
    }

    fn try_get_user_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    fn count_users(&self) -> RepoResult<usize> {
        Ok(self.users.borrow().len())
    }
}

/// A spy resolver that records how often it was consulted.
#[derive(Debug, Default)]
pub struct MockResolver {
    pub target: Option<Url>,
    pub calls: Cell<usize>,
}

impl MockResolver {
    /// A resolver whose redirect chain ends at `target`.
    pub fn redirects_to(target: &str) -> Self {
        Self {
            target: Some(target.parse().unwrap()),
            calls: Cell::new(0),
        }
    }
}

impl LinkResolverGateway for MockResolver {
    fn resolve_target_url(&self, _url: &Url) -> Option<Url> {
        self.calls.set(self.calls.get() + 1);
        self.target.clone()
    }
}
