use snowmap_entities::geo::Coordinate;

/// Range validation of structurally extracted coordinates.
///
/// The extractor itself never enforces ranges; submissions are
/// validated here before anything is persisted.
pub fn is_valid_position(pos: &Coordinate) -> bool {
    pos.is_valid()
}
