use crate::core::constants::COORD_SCALE;

/// Rounds a coordinate to six decimal places, ties away from zero.
///
/// Decimal scaling with `f64::round` (which rounds half away from zero)
/// rather than any round-half-to-even default. The six-place policy is a
/// compatibility requirement: decoded centres and bounding-box edges are
/// compared for exact equality downstream.
pub fn round_coordinate(value: f64) -> f64 {
    (value * COORD_SCALE).round() / COORD_SCALE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_to_six_places() {
        assert_eq!(round_coordinate(-1.0416666666666667), -1.041667);
        assert_eq!(round_coordinate(51.52083333333333), 51.520833);
        assert_eq!(round_coordinate(51.4375), 51.4375);
    }

    #[test]
    fn test_rounds_away_from_zero_on_both_sides() {
        assert_eq!(round_coordinate(0.0000004), 0.0);
        assert_eq!(round_coordinate(-0.0000004), 0.0);
        assert_eq!(round_coordinate(1.0000006), 1.000001);
        assert_eq!(round_coordinate(-1.0000006), -1.000001);
    }
}
