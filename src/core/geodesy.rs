use crate::core::codec::locator_to_lat_lon;
use crate::core::constants::EARTH_RADIUS_KM;
use crate::util::coord::LatLon;
use crate::util::error::MaidenheadError;
use std::f64::consts::PI;

/// Great-circle distance between two points in kilometres.
///
/// Spherical model with a fixed mean Earth radius. Exactly-identical
/// inputs short-circuit to 0 before any trigonometry; decoded cell
/// centres are rounded upstream, so two points in the same cell compare
/// equal here.
pub fn distance<A, B>(a: &A, b: &B) -> f64
where
    A: LatLon + ?Sized,
    B: LatLon + ?Sized,
{
    if a.lat() == b.lat() && a.lon() == b.lon() {
        return 0.0;
    }

    let ca = central_angle(
        a.lat().to_radians(),
        a.lon().to_radians(),
        b.lat().to_radians(),
        b.lon().to_radians(),
    );
    EARTH_RADIUS_KM * ca
}

/// Initial great-circle bearing from `a` toward `b`, in degrees [0, 360).
///
/// Returns 0 for identical points, where the bearing is undefined.
pub fn bearing<A, B>(a: &A, b: &B) -> f64
where
    A: LatLon + ?Sized,
    B: LatLon + ?Sized,
{
    if a.lat() == b.lat() && a.lon() == b.lon() {
        return 0.0;
    }

    let hn = a.lat().to_radians();
    let he = a.lon().to_radians();
    let n = b.lat().to_radians();
    let e = b.lon().to_radians();

    let ca = central_angle(hn, he, n, e);

    let si = (e - he).sin() * n.cos() * hn.cos();
    let co = n.sin() - hn.sin() * ca.cos();
    let mut az = (si / co).abs().atan();
    // atan only covers (-pi/2, pi/2); fold back into the full circle.
    if co < 0.0 {
        az = PI - az;
    }
    if si < 0.0 {
        az = -az;
    }
    if az < 0.0 {
        az += 2.0 * PI;
    }
    az.to_degrees()
}

/// Central angle between two points given in radians.
fn central_angle(hn: f64, he: f64, n: f64, e: f64) -> f64 {
    let co = (he - e).cos() * hn.cos() * n.cos() + hn.sin() * n.sin();
    let mut ca = ((1.0 - co * co).sqrt() / co).abs().atan();
    // Obtuse separation: atan landed in the wrong half.
    if co < 0.0 {
        ca = PI - ca;
    }
    ca
}

/// Great-circle distance in kilometres between two locator cell centres.
pub fn locator_distance(a: &str, b: &str) -> Result<f64, MaidenheadError> {
    Ok(distance(&locator_to_lat_lon(a)?, &locator_to_lat_lon(b)?))
}

/// Initial bearing in degrees between two locator cell centres.
pub fn locator_bearing(a: &str, b: &str) -> Result<f64, MaidenheadError> {
    Ok(bearing(&locator_to_lat_lon(a)?, &locator_to_lat_lon(b)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::point;

    #[test]
    fn test_distance_identical_points_is_zero() {
        assert_eq!(distance(&(51.5, -1.0), &(51.5, -1.0)), 0.0);
    }

    #[test]
    fn test_bearing_identical_points_is_zero() {
        assert_eq!(bearing(&(51.5, -1.0), &(51.5, -1.0)), 0.0);
    }

    #[test]
    fn test_distance_one_degree_of_latitude() {
        // One degree of arc on a 6367 km sphere.
        let expected = EARTH_RADIUS_KM * PI / 180.0;
        let d = distance(&(51.5, -1.0), &(52.5, -1.0));
        assert!((d - expected).abs() < 0.01);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = (51.5, -1.0);
        let b = (48.8566, 2.3522);
        assert!((distance(&a, &b) - distance(&b, &a)).abs() < 1e-9);
    }

    #[test]
    fn test_distance_london_to_paris() {
        let d = distance(&(51.5074, -0.1278), &(48.8566, 2.3522));
        assert!(d > 330.0 && d < 350.0, "unexpected distance {}", d);
    }

    #[test]
    fn test_bearing_due_north_and_south() {
        assert!(bearing(&(51.5, -1.0), &(52.5, -1.0)).abs() < 1e-9);
        assert!((bearing(&(52.5, -1.0), &(51.5, -1.0)) - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_bearing_eastward_and_westward() {
        let east = bearing(&(51.5, -1.0), &(51.5, 1.0));
        assert!(east > 88.0 && east < 90.0, "unexpected bearing {}", east);

        let west = bearing(&(51.5, 1.0), &(51.5, -1.0));
        assert!(west > 270.0 && west < 272.0, "unexpected bearing {}", west);
    }

    #[test]
    fn test_bearing_stays_in_range() {
        let points = [
            (51.5, -1.0),
            (-33.8688, 151.2093),
            (35.6762, 139.6503),
            (-22.9068, -43.1729),
            (64.1466, -21.9426),
            (0.0, 0.0),
        ];
        for a in &points {
            for b in &points {
                let az = bearing(a, b);
                assert!((0.0..360.0).contains(&az), "bearing {} out of range", az);
            }
        }
    }

    #[test]
    fn test_accepts_points_and_tuples() {
        let from_tuple = distance(&(51.5, -1.0), &(48.8566, 2.3522));
        let from_point = distance(
            &point! { x: -1.0, y: 51.5 },
            &point! { x: 2.3522, y: 48.8566 },
        );
        assert_eq!(from_tuple, from_point);
    }

    #[test]
    fn test_locator_distance() -> Result<(), MaidenheadError> {
        assert_eq!(locator_distance("IO91", "IO91")?, 0.0);
        // IO91 -> IO92 is one degree due north of the cell centre.
        let expected = EARTH_RADIUS_KM * PI / 180.0;
        assert!((locator_distance("IO91", "IO92")? - expected).abs() < 0.01);
        Ok(())
    }

    #[test]
    fn test_locator_bearing() -> Result<(), MaidenheadError> {
        assert_eq!(locator_bearing("IO91", "IO91")?, 0.0);
        assert!(locator_bearing("IO91", "IO92")?.abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_locator_functions_reject_invalid_input() {
        assert!(matches!(
            locator_distance("IO91", "ZZ99"),
            Err(MaidenheadError::InvalidFormat(_))
        ));
        assert!(matches!(
            locator_bearing("1234", "IO91"),
            Err(MaidenheadError::InvalidFormat(_))
        ));
    }
}
