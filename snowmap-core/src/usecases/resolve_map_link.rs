use super::prelude::*;
use crate::{gateways::link_resolver::LinkResolverGateway, maplink};
use snowmap_entities::url::Url;

/// Resolve a user-supplied map link to a coordinate pair.
///
/// Local rule matching runs first; the network-backed resolver is only
/// consulted when no local rule matches, so the common case never
/// leaves the process.
pub fn resolve_map_link(resolver: &dyn LinkResolverGateway, link: &str) -> Result<Coordinate> {
    let url = link.parse::<Url>().map_err(|_| Error::Url)?;
    if let Some(pos) = maplink::extract_coordinates(&url) {
        return Ok(pos);
    }
    log::debug!("No extraction rule matched {url}, following redirects");
    resolver
        .resolve_target_url(&url)
        .and_then(|target| maplink::extract_coordinates(&target))
        .ok_or(Error::MapLink)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockResolver, *};

    #[test]
    fn invalid_url_fails_fast() {
        let resolver = MockResolver::default();
        assert!(matches!(
            resolve_map_link(&resolver, "not a url"),
            Err(Error::Url)
        ));
        // Rule evaluation and fallback were never attempted.
        assert_eq!(resolver.calls.get(), 0);
    }

    #[test]
    fn local_extraction_skips_the_resolver() {
        let resolver = MockResolver::default();
        let pos =
            resolve_map_link(&resolver, "https://yandex.by/maps/?ll=27.5615%2C53.9045&z=15")
                .unwrap();
        assert_eq!(pos, Coordinate::new(53.9045, 27.5615));
        assert_eq!(resolver.calls.get(), 0);
    }

    #[test]
    fn short_link_is_resolved_and_re_extracted() {
        let resolver =
            MockResolver::redirects_to("https://yandex.by/maps/?ll=27.5615%2C53.9045&z=15");
        let pos = resolve_map_link(&resolver, "https://short.link/abc123").unwrap();
        assert_eq!(pos, Coordinate::new(53.9045, 27.5615));
        assert_eq!(resolver.calls.get(), 1);
    }

    #[test]
    fn unreachable_network_collapses_to_a_single_failure() {
        let resolver = MockResolver::default();
        assert!(matches!(
            resolve_map_link(&resolver, "https://example.com/?foo=bar"),
            Err(Error::MapLink)
        ));
        assert_eq!(resolver.calls.get(), 1);
    }

    #[test]
    fn resolved_url_without_coordinates_is_a_failure() {
        let resolver = MockResolver::redirects_to("https://example.com/landing");
        assert!(matches!(
            resolve_map_link(&resolver, "https://short.link/abc123"),
            Err(Error::MapLink)
        ));
    }
}
