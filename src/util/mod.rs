pub mod coord;
pub mod error;
pub mod round;

pub use coord::LatLon;
pub use error::MaidenheadError;
pub use round::round_coordinate;
