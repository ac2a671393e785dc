use crate::core::codec::{Precision, lat_lon_to_locator, locator_to_lat_lon, validate_locator};
use crate::core::geodesy::{bearing, distance};
use crate::util::coord::LatLon;
use crate::util::error::MaidenheadError;
use crate::util::round::round_coordinate;
use geo_types::{LineString, Polygon, Rect, coord};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Axis-aligned bounding box of a grid cell, in degrees.
///
/// Corners are `(lat, lon)` pairs rounded to six decimal places with the
/// same half-away-from-zero rule the decoder uses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub bottom_left: (f64, f64),
    pub top_right: (f64, f64),
}

impl BoundingBox {
    pub(crate) fn around(centre: (f64, f64), precision: Precision) -> Self {
        let half_lat = precision.cell_height() / 2.0;
        let half_lon = precision.cell_width() / 2.0;
        Self {
            bottom_left: (
                round_coordinate(centre.0 - half_lat),
                round_coordinate(centre.1 - half_lon),
            ),
            top_right: (
                round_coordinate(centre.0 + half_lat),
                round_coordinate(centre.1 + half_lon),
            ),
        }
    }

    /// Longitude span in degrees.
    pub fn width(&self) -> f64 {
        self.top_right.1 - self.bottom_left.1
    }

    /// Latitude span in degrees.
    pub fn height(&self) -> f64 {
        self.top_right.0 - self.bottom_left.0
    }

    /// Whether the point lies within the box, edges included.
    pub fn contains<C: LatLon + ?Sized>(&self, point: &C) -> bool {
        point.lat() >= self.bottom_left.0
            && point.lat() <= self.top_right.0
            && point.lon() >= self.bottom_left.1
            && point.lon() <= self.top_right.1
    }

    /// The box as a `geo_types::Rect` (x is longitude, y is latitude).
    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            coord! { x: self.bottom_left.1, y: self.bottom_left.0 },
            coord! { x: self.top_right.1, y: self.top_right.0 },
        )
    }
}

/// A validated Maidenhead locator with its derived cell geometry.
///
/// Construction goes through [`Locator::parse`] (or `FromStr`), which
/// validates the string and precomputes the cell centre and bounding box.
/// The stored string is canonically cased: uppercase field 1, lowercase
/// fields 3 and 5.
///
/// # Example
///
/// ```
/// use maidenhead_rs::Locator;
///
/// # fn main() -> Result<(), maidenhead_rs::MaidenheadError> {
/// let locator = Locator::parse("IO91")?;
/// assert_eq!(locator.centre(), (51.5, -1.0));
/// assert_eq!(locator.bounding_box().bottom_left, (51.0, -2.0));
/// assert_eq!(locator.bounding_box().top_right, (52.0, 0.0));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Locator {
    value: String,
    centre: (f64, f64),
    precision: Precision,
    bounding_box: BoundingBox,
}

impl Locator {
    /// Parse and validate a locator string.
    ///
    /// Leading/trailing whitespace is ignored and casing is normalized.
    /// Fails with [`MaidenheadError::InvalidFormat`] when the string
    /// matches none of the 4/6/8/10-character patterns.
    pub fn parse(value: &str) -> Result<Self, MaidenheadError> {
        let trimmed = value.trim();
        let precision = validate_locator(trimmed)?;
        let centre = locator_to_lat_lon(trimmed)?;
        Ok(Self {
            value: canonicalize(trimmed),
            centre,
            precision,
            bounding_box: BoundingBox::around(centre, precision),
        })
    }

    /// Locator for the cell containing a coordinate.
    ///
    /// `precision` 0, 1 or 2 selects a 4, 6 or 8 character locator.
    /// Coordinates outside the valid lat/lon domain encode to symbols
    /// outside the locator alphabets and surface here as
    /// `InvalidFormat`.
    ///
    /// # Example
    ///
    /// ```
    /// use maidenhead_rs::Locator;
    ///
    /// # fn main() -> Result<(), maidenhead_rs::MaidenheadError> {
    /// let locator = Locator::from_lat_lon(&(51.4375, -1.0417), 1)?;
    /// assert_eq!(locator.as_str(), "IO91lk");
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_lat_lon<C: LatLon + ?Sized>(
        coord: &C,
        precision: u8,
    ) -> Result<Self, MaidenheadError> {
        Self::parse(&lat_lon_to_locator(coord.lat(), coord.lon(), precision))
    }

    /// The canonical locator string.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Centre of the grid cell as `(lat, lon)` degrees.
    pub fn centre(&self) -> (f64, f64) {
        self.centre
    }

    /// Precision level derived from the locator length.
    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// Bounding box of the grid cell.
    pub fn bounding_box(&self) -> BoundingBox {
        self.bounding_box
    }

    /// Great-circle distance in kilometres from this cell centre.
    pub fn distance_to<C: LatLon + ?Sized>(&self, other: &C) -> f64 {
        distance(self, other)
    }

    /// Initial bearing in degrees [0, 360) from this cell centre.
    pub fn bearing_to<C: LatLon + ?Sized>(&self, other: &C) -> f64 {
        bearing(self, other)
    }

    /// The cell rectangle as a closed polygon (x is longitude, y is
    /// latitude), for GIS interchange.
    pub fn to_polygon(&self) -> Polygon<f64> {
        let (min_lat, min_lon) = self.bounding_box.bottom_left;
        let (max_lat, max_lon) = self.bounding_box.top_right;
        Polygon::new(
            LineString::from(vec![
                (min_lon, min_lat),
                (max_lon, min_lat),
                (max_lon, max_lat),
                (min_lon, max_lat),
                (min_lon, min_lat),
            ]),
            vec![],
        )
    }
}

fn canonicalize(value: &str) -> String {
    value
        .bytes()
        .enumerate()
        .map(|(i, b)| match i {
            0 | 1 => b.to_ascii_uppercase() as char,
            4 | 5 | 8 | 9 => b.to_ascii_lowercase() as char,
            _ => b as char,
        })
        .collect()
}

impl LatLon for Locator {
    fn lat(&self) -> f64 {
        self.centre.0
    }
    fn lon(&self) -> f64 {
        self.centre.1
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl FromStr for Locator {
    type Err = MaidenheadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locator::parse(s)
    }
}

impl AsRef<str> for Locator {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl Serialize for Locator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

impl<'de> Deserialize<'de> for Locator {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Locator::parse(&value).map_err(D::Error::custom)
    }
}
