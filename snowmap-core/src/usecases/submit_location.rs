use super::prelude::*;
use crate::{
    gateways::link_resolver::LinkResolverGateway, usecases::resolve_map_link, util::validate,
};

pub const MAX_TITLE_LEN: usize = 255;
pub const MAX_SIZE_LEN: usize = 20;

const DEFAULT_DESCRIPTION: &str = "Описание скоро появится";

/// Raw form fields of a new location submission.
#[derive(Debug, Clone)]
pub struct NewLocationSubmission {
    pub title: String,
    pub map_link: String,
    pub description: Option<String>,
    pub size: String,
}

/// Validate a submission and resolve its map link into a draft
/// that is ready to be persisted.
///
/// Kept separate from [`store_location`] so that the slow part
/// (a possible network round trip) can run outside of any database
/// transaction.
pub fn prepare_location_submission(
    resolver: &dyn LinkResolverGateway,
    submission: NewLocationSubmission,
) -> Result<NewLocation> {
    let NewLocationSubmission {
        title,
        map_link,
        description,
        size,
    } = submission;

    let title = title.trim().to_owned();
    if title.is_empty() || title.chars().count() > MAX_TITLE_LEN {
        return Err(Error::Title);
    }
    let size = size.trim().to_owned();
    if size.is_empty() || size.chars().count() > MAX_SIZE_LEN {
        return Err(Error::Size);
    }

    let pos = resolve_map_link(resolver, map_link.trim())?;
    if !validate::is_valid_position(&pos) {
        return Err(Error::InvalidPosition);
    }

    let description = description
        .map(|d| d.trim().to_owned())
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());

    Ok(NewLocation {
        pos,
        title,
        description,
        size,
        badges: vec![],
        categories: vec![],
        popularity: Popularity::default(),
        // Hidden until cleared by moderation.
        visible: false,
    })
}

pub fn store_location<R: LocationRepo>(repo: &R, location: NewLocation) -> Result<Location> {
    let location = repo.create_location(location)?;
    log::debug!("Stored new location {} awaiting moderation", location.id);
    Ok(location)
}

/// The complete submission workflow: validate, resolve, persist.
pub fn submit_location<R: LocationRepo>(
    repo: &R,
    resolver: &dyn LinkResolverGateway,
    submission: NewLocationSubmission,
) -> Result<Location> {
    let draft = prepare_location_submission(resolver, submission)?;
    store_location(repo, draft)
}
