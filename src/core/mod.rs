pub mod codec;
pub mod constants;
pub mod geodesy;

pub use codec::{Precision, lat_lon_to_locator, locator_to_lat_lon, validate_locator};
pub use constants::{CELL_HEIGHTS, CELL_WIDTHS, EARTH_RADIUS_KM};
pub use geodesy::{bearing, distance, locator_bearing, locator_distance};
