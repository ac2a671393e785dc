use crate::api::locator::Locator;
use crate::core::codec::lat_lon_to_locator;
use crate::core::constants::{CELL_HEIGHTS, CELL_WIDTHS};
use crate::util::coord::LatLon;
use geo_types::{Polygon, Rect};

/// A collection of locator cells covering a latitude/longitude extent.
///
/// # Example
///
/// ```
/// use maidenhead_rs::LocatorGrid;
///
/// let grid = LocatorGrid::builder()
///     .precision(0)
///     .extent(50.0, -6.0, 54.0, 2.0)
///     .build();
///
/// if let Some(cell) = grid.locator_at(&(51.5, -1.0)) {
///     assert_eq!(cell.as_str(), "IO91");
/// }
/// ```
#[derive(Debug, Clone)]
pub struct LocatorGrid {
    cells: Vec<Locator>,
    precision: u8,
}

impl LocatorGrid {
    pub fn builder() -> LocatorGridBuilder {
        LocatorGridBuilder::new()
    }

    /// All cells at the given precision (0, 1 or 2) whose rectangles
    /// intersect the extent. Cells falling outside the valid lat/lon
    /// domain are skipped.
    ///
    /// At precision 1 the centre subsquare of each square encodes to its
    /// collapsed 4-character form, so the grid carries one coarser cell
    /// (with the square's full bounding box) per covered square.
    /// [`locator_at`](Self::locator_at) resolves points in that
    /// subsquare to the same collapsed cell.
    pub fn from_extent(
        min_lat: f64,
        min_lon: f64,
        max_lat: f64,
        max_lon: f64,
        precision: u8,
    ) -> Self {
        let cells = generate_cells_for_extent(min_lat, min_lon, max_lat, max_lon, precision);
        Self { cells, precision }
    }

    /// Grid from a `geo_types::Rect` (x is longitude, y is latitude).
    pub fn from_rect(rect: &Rect<f64>, precision: u8) -> Self {
        Self::from_extent(
            rect.min().y,
            rect.min().x,
            rect.max().y,
            rect.max().x,
            precision,
        )
    }

    pub fn precision(&self) -> u8 {
        self.precision
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Locator] {
        &self.cells
    }

    pub fn iter(&self) -> impl Iterator<Item = &Locator> {
        self.cells.iter()
    }

    /// The grid cell containing the given point, if covered.
    pub fn locator_at<C: LatLon + ?Sized>(&self, point: &C) -> Option<&Locator> {
        let target = lat_lon_to_locator(point.lat(), point.lon(), self.precision);
        self.cells.iter().find(|cell| cell.as_str() == target)
    }

    pub fn to_polygons(&self) -> Vec<Polygon<f64>> {
        self.cells.iter().map(|cell| cell.to_polygon()).collect()
    }

    pub fn filter<F>(&self, predicate: F) -> Vec<&Locator>
    where
        F: Fn(&Locator) -> bool,
    {
        self.cells.iter().filter(|cell| predicate(cell)).collect()
    }
}

#[derive(Debug, Default)]
pub struct LocatorGridBuilder {
    precision: Option<u8>,
    min_lat: Option<f64>,
    min_lon: Option<f64>,
    max_lat: Option<f64>,
    max_lon: Option<f64>,
}

impl LocatorGridBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn precision(mut self, precision: u8) -> Self {
        self.precision = Some(precision);
        self
    }

    pub fn extent(mut self, min_lat: f64, min_lon: f64, max_lat: f64, max_lon: f64) -> Self {
        self.min_lat = Some(min_lat);
        self.min_lon = Some(min_lon);
        self.max_lat = Some(max_lat);
        self.max_lon = Some(max_lon);
        self
    }

    pub fn rect(mut self, rect: &Rect<f64>) -> Self {
        self.min_lat = Some(rect.min().y);
        self.min_lon = Some(rect.min().x);
        self.max_lat = Some(rect.max().y);
        self.max_lon = Some(rect.max().x);
        self
    }

    pub fn build(self) -> LocatorGrid {
        let precision = self.precision.expect("precision must be set");
        let min_lat = self.min_lat.expect("extent must be set");
        let min_lon = self.min_lon.expect("extent must be set");
        let max_lat = self.max_lat.expect("extent must be set");
        let max_lon = self.max_lon.expect("extent must be set");

        LocatorGrid::from_extent(min_lat, min_lon, max_lat, max_lon, precision)
    }
}

fn generate_cells_for_extent(
    min_lat: f64,
    min_lon: f64,
    max_lat: f64,
    max_lon: f64,
    precision: u8,
) -> Vec<Locator> {
    let idx = precision.min(2) as usize;
    let height = CELL_HEIGHTS[idx];
    let width = CELL_WIDTHS[idx];

    // Snap the origin onto the cell lattice, then walk cell centres.
    let lat0 = ((min_lat + 90.0) / height).floor() * height - 90.0;
    let lon0 = ((min_lon + 180.0) / width).floor() * width - 180.0;
    let rows = (((max_lat - lat0) / height).ceil() as i64).max(1);
    let cols = (((max_lon - lon0) / width).ceil() as i64).max(1);

    let mut cells = Vec::with_capacity((rows * cols) as usize);
    for row in 0..rows {
        for col in 0..cols {
            let centre = (
                lat0 + (row as f64 + 0.5) * height,
                lon0 + (col as f64 + 0.5) * width,
            );
            if let Ok(locator) = Locator::from_lat_lon(&centre, precision) {
                cells.push(locator);
            }
        }
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::{coord, point};

    #[test]
    fn test_grid_covers_extent() {
        let grid = LocatorGrid::from_extent(50.0, -6.0, 54.0, 2.0, 0);
        assert_eq!(grid.len(), 16); // 4 rows x 4 columns of squares
        assert_eq!(grid.precision(), 0);
        assert!(grid.iter().any(|cell| cell.as_str() == "IO91"));
    }

    #[test]
    fn test_locator_at() {
        let grid = LocatorGrid::from_extent(50.0, -6.0, 54.0, 2.0, 0);

        let cell = grid.locator_at(&(51.5, -1.0));
        assert_eq!(cell.map(|c| c.as_str()), Some("IO91"));

        let pt = point! { x: -1.0, y: 51.5 };
        assert_eq!(grid.locator_at(&pt).map(|c| c.as_str()), Some("IO91"));

        assert!(grid.locator_at(&(10.0, 10.0)).is_none());
    }

    #[test]
    fn test_grid_iteration_matches_len() {
        let grid = LocatorGrid::from_extent(51.0, -2.0, 52.0, 0.0, 1);
        let mut count = 0;
        for cell in grid.iter() {
            assert_eq!(cell.as_str().len() % 2, 0);
            count += 1;
        }
        assert_eq!(count, grid.len());
        assert!(!grid.is_empty());
    }

    #[test]
    fn test_grid_filtering() {
        let grid = LocatorGrid::from_extent(50.0, -6.0, 54.0, 2.0, 0);
        let northern = grid.filter(|cell| cell.centre().0 > 52.0);
        assert!(!northern.is_empty());
        assert!(northern.len() < grid.len());
    }

    #[test]
    fn test_builder() {
        let grid = LocatorGrid::builder()
            .precision(0)
            .extent(50.0, -6.0, 54.0, 2.0)
            .build();
        assert_eq!(grid.len(), 16);
    }

    #[test]
    fn test_from_rect() {
        let rect = Rect::new(coord! { x: -6.0, y: 50.0 }, coord! { x: 2.0, y: 54.0 });
        let from_rect = LocatorGrid::from_rect(&rect, 0);
        let from_extent = LocatorGrid::from_extent(50.0, -6.0, 54.0, 2.0, 0);
        assert_eq!(from_rect.len(), from_extent.len());
    }

    #[test]
    fn test_grid_carries_collapsed_centre_subsquare() {
        // One square, subsquare precision: the centre subsquare encodes
        // to the collapsed 4-character form.
        let grid = LocatorGrid::from_extent(51.0, -2.0, 52.0, 0.0, 1);
        assert_eq!(grid.len(), 576);

        let coarse = grid.filter(|cell| cell.as_str().len() == 4);
        assert_eq!(coarse.len(), 1);
        assert_eq!(coarse[0].as_str(), "IO91");
        assert_eq!(coarse[0].bounding_box().width(), 2.0);

        // A point inside that subsquare resolves to the collapsed cell.
        let cell = grid.locator_at(&(51.520833, -0.958333));
        assert_eq!(cell.map(|c| c.as_str()), Some("IO91"));
    }

    #[test]
    fn test_grid_skips_out_of_range_cells() {
        // Extent poking past the pole: only the in-range rows survive.
        let grid = LocatorGrid::from_extent(89.0, 0.0, 93.0, 2.0, 0);
        assert_eq!(grid.len(), 1);
        assert_eq!(grid.cells()[0].as_str(), "JR09");
    }

    #[test]
    fn test_to_polygons() {
        let grid = LocatorGrid::from_extent(51.0, -2.0, 52.0, 0.0, 0);
        let polygons = grid.to_polygons();
        assert_eq!(polygons.len(), grid.len());
        assert!(polygons.iter().all(|p| p.exterior().coords().count() == 5));
    }
}
