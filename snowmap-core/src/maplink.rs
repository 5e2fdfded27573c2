//! Extraction of coordinates from map-sharing URLs.
//!
//! Several mapping providers embed a coordinate pair somewhere in their
//! share links, each with its own structure and its own component order:
//! Yandex-style `ll=` query parameters and 2GIS `/geo/` path segments
//! carry `lng,lat`, while Google-style `@` path segments carry `lat,lng`.
//!
//! The rules below are evaluated in a fixed priority order,
//! most-specific-first. The first rule whose pattern matches and whose
//! captured fragments parse as finite numbers wins. Extraction is pure:
//! no network access, no state. Shortened links that carry no embedded
//! coordinates are handled elsewhere by following their redirects and
//! re-running these rules on the resolved URL.

use lazy_static::lazy_static;
use regex::Regex;
use snowmap_entities::{geo::Coordinate, url::Url};

/// Decode order of the two captured numeric components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordOrder {
    LatLng,
    LngLat,
}

/// A single provider-specific structural pattern.
#[derive(Debug)]
pub struct ExtractionRule {
    provider: &'static str,
    pattern: Regex,
    order: CoordOrder,
}

impl ExtractionRule {
    fn new(provider: &'static str, pattern: &str, order: CoordOrder) -> Self {
        let pattern = Regex::new(pattern).expect("valid extraction rule pattern");
        Self {
            provider,
            pattern,
            order,
        }
    }

    pub fn provider(&self) -> &'static str {
        self.provider
    }

    /// Both fragments must parse as finite decimals, otherwise the
    /// rule does not match and the next one is tried.
    fn try_match(&self, url: &str) -> Option<Coordinate> {
        let caps = self.pattern.captures(url)?;
        let first = parse_finite(caps.get(1)?.as_str())?;
        let second = parse_finite(caps.get(2)?.as_str())?;
        Some(match self.order {
            CoordOrder::LatLng => Coordinate::new(first, second),
            CoordOrder::LngLat => Coordinate::new(second, first),
        })
    }
}

fn parse_finite(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

lazy_static! {
    /// All known link formats, in priority order.
    ///
    /// The place-anchored Google pattern precedes the broader `@lat,lng`
    /// pattern so that a place link is attributed to the more specific
    /// rule; both decode in the same order, but the provider tag of the
    /// winning rule is what audits rely on.
    static ref RULES: Vec<ExtractionRule> = vec![
        // Yandex Maps: https://yandex.by/maps/?ll=27.561500%2C53.904500&z=15
        ExtractionRule::new("yandex-ll-encoded", r"ll=([\d.]+)%2C([\d.]+)", CoordOrder::LngLat),
        // Yandex Maps with a literal comma: ?ll=27.561500,53.904500
        ExtractionRule::new("yandex-ll", r"ll=([\d.]+),([\d.]+)", CoordOrder::LngLat),
        // Google Maps place: /maps/place/<name>/@53.904500,27.561500,15z
        ExtractionRule::new(
            "google-place",
            r"/maps/place/[^/]+/@([\d.]+),([\d.]+)",
            CoordOrder::LatLng,
        ),
        // Google Maps pin: https://www.google.com/maps/@53.904500,27.561500,15z
        ExtractionRule::new("google-pin", r"@([\d.]+),([\d.]+)", CoordOrder::LatLng),
        // Plain query parameters, in either order:
        // ?lat=53.904500&lng=27.561500
        ExtractionRule::new(
            "query-lat-lng",
            r"[?&]lat=([\d.]+).*[?&]lng=([\d.]+)",
            CoordOrder::LatLng,
        ),
        ExtractionRule::new(
            "query-lat-lng",
            r"[?&]lng=([\d.]+).*[?&]lat=([\d.]+)",
            CoordOrder::LngLat,
        ),
        // ?latitude=53.904500&longitude=27.561500
        ExtractionRule::new(
            "query-latitude-longitude",
            r"[?&]latitude=([\d.]+).*[?&]longitude=([\d.]+)",
            CoordOrder::LatLng,
        ),
        // Yandex Maps "what's here": ?whatshere[point]=27.561500,53.904500
        ExtractionRule::new(
            "yandex-whatshere",
            r"whatshere\[point\]=([\d.]+),([\d.]+)",
            CoordOrder::LngLat,
        ),
        // 2GIS: https://2gis.by/minsk/geo/27.561500%2C53.904500
        ExtractionRule::new("2gis-geo-encoded", r"/geo/([\d.]+)%2C([\d.]+)", CoordOrder::LngLat),
        // 2GIS with a literal comma
        ExtractionRule::new("2gis-geo", r"/geo/([\d.]+),([\d.]+)", CoordOrder::LngLat),
    ];
}

/// Extract a coordinate pair from a map-sharing URL.
///
/// Deterministic and side-effect free. Returns `None` if no rule
/// matches; out-of-range values are returned as-is, range validation
/// is a caller concern.
pub fn extract_coordinates(url: &Url) -> Option<Coordinate> {
    match_rule(url.as_str()).map(|(_, pos)| pos)
}

/// Like [`extract_coordinates`], but also reports which provider rule
/// won, so conflicting orderings can be audited.
pub fn match_rule(url: &str) -> Option<(&'static str, Coordinate)> {
    RULES
        .iter()
        .find_map(|rule| rule.try_match(url).map(|pos| (rule.provider, pos)))
}
