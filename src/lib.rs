//! # maidenhead-rs
//!
//! Conversion between geographic coordinates and Maidenhead grid locator
//! strings, plus great-circle distance and bearing between points or
//! locators. There are currently three main entry points.
//!
//! ### 1. `Locator` - Single Cell Operations
//!
//! ```
//! use maidenhead_rs::Locator;
//!
//! # fn main() -> Result<(), maidenhead_rs::MaidenheadError> {
//! let locator = Locator::parse("IO91lk")?;
//! assert_eq!(locator.centre(), (51.4375, -1.041667));
//!
//! let square = Locator::from_lat_lon(&(51.5, -1.0), 0)?;
//! assert_eq!(square.as_str(), "IO91");
//! println!("{:?}", square.bounding_box());
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. Distance and bearing
//!
//! ```
//! use maidenhead_rs::{locator_bearing, locator_distance, distance};
//!
//! # fn main() -> Result<(), maidenhead_rs::MaidenheadError> {
//! let km = locator_distance("IO91lk", "JN58td")?;
//! let deg = locator_bearing("IO91lk", "JN58td")?;
//! assert!(km > 0.0 && deg < 360.0);
//!
//! // The same functions work on raw (lat, lon) pairs.
//! let km = distance(&(51.5074, -0.1278), &(48.8566, 2.3522));
//! assert!(km > 330.0 && km < 350.0);
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `LocatorGrid` and CSV annotation
//!
//! ```
//! use maidenhead_rs::LocatorGrid;
//!
//! let grid = LocatorGrid::builder()
//!     .precision(0)
//!     .extent(50.0, -6.0, 54.0, 2.0)
//!     .build();
//!
//! if let Some(cell) = grid.locator_at(&(51.5, -1.0)) {
//!     println!("{}", cell);
//! }
//! ```
//!
//! Convert CSV files with coordinate (or locator) columns to
//! locator-annotated CSVs:
//!
//! ```no_run
//! use maidenhead_rs::{CsvLocatorConfig, CsvToLocator, GeometryFormat};
//!
//! let config = CsvLocatorConfig::from_coords("Latitude", "Longitude", 1)
//!     .exclude(vec!["Notes".into()])
//!     .with_geometry(GeometryFormat::Wkt);
//!
//! // Using trait method
//! "stations.csv".to_locator_csv("output.csv", &config).unwrap();
//! ```

pub mod api;
pub mod core;
pub mod util;

pub use api::{
    BoundingBox, CoordinateSource, CsvLocatorConfig, CsvToLocator, GeometryFormat, Locator,
    LocatorGrid, LocatorGridBuilder, csv_to_locator_csv,
};
pub use self::core::{
    CELL_HEIGHTS, CELL_WIDTHS, EARTH_RADIUS_KM, Precision, bearing, distance, lat_lon_to_locator,
    locator_bearing, locator_distance, locator_to_lat_lon, validate_locator,
};
pub use util::{LatLon, MaidenheadError, round_coordinate};

pub use geo_types;
