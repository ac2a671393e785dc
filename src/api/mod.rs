pub mod locator;
pub mod locator_csv;
pub mod locator_grid;

pub use locator::{BoundingBox, Locator};
pub use locator_csv::{
    CoordinateSource, CsvLocatorConfig, CsvToLocator, GeometryFormat, csv_to_locator_csv,
};
pub use locator_grid::{LocatorGrid, LocatorGridBuilder};
