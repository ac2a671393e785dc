use geo_types::Point;

/// Anything that exposes a latitude/longitude pair in degrees.
///
/// Implemented for `(lat, lon)` tuples, `geo_types::Point` (x is
/// longitude, y is latitude) and `Locator`, so the distance and bearing
/// functions accept any mix of them.
pub trait LatLon {
    fn lat(&self) -> f64;
    fn lon(&self) -> f64;
}

impl LatLon for (f64, f64) {
    fn lat(&self) -> f64 {
        self.0
    }
    fn lon(&self) -> f64 {
        self.1
    }
}

impl LatLon for Point<f64> {
    fn lat(&self) -> f64 {
        self.y()
    }
    fn lon(&self) -> f64 {
        self.x()
    }
}
