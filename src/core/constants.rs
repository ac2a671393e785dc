/// Mean Earth radius in kilometres used by the spherical distance model.
///
/// Deliberately the simplified mean-sphere value rather than a WGS84
/// semi-axis; distances computed with it match the classic amateur-radio
/// locator tools.
pub const EARTH_RADIUS_KM: f64 = 6367.0;

/// Scale factor to preserve six decimal places when rounding coordinates
pub(crate) const COORD_SCALE: f64 = 1_000_000.0;

/// Latitude span in degrees of one grid cell for each precision level
/// (4, 6, 8, 10 characters).
///
/// Ten-character locators decode at eight-character resolution, so the
/// last two entries are equal.
pub const CELL_HEIGHTS: [f64; 4] = [1.0, 1.0 / 24.0, 1.0 / 240.0, 1.0 / 240.0];

/// Longitude span in degrees of one grid cell for each precision level
/// (4, 6, 8, 10 characters).
pub const CELL_WIDTHS: [f64; 4] = [2.0, 1.0 / 12.0, 1.0 / 120.0, 1.0 / 120.0];
