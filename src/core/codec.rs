use crate::core::constants::{CELL_HEIGHTS, CELL_WIDTHS};
use crate::util::error::MaidenheadError;
use crate::util::round::round_coordinate;

/// Precision level of a locator, derived from its length.
///
/// Cells at each level nest inside the cell one level up that shares the
/// same leading characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Precision {
    /// 4-character grid square (2 deg lon x 1 deg lat)
    Square,
    /// 6-character subsquare (1/12 deg lon x 1/24 deg lat)
    Subsquare,
    /// 8-character extended square (1/120 deg lon x 1/240 deg lat)
    Extended,
    /// 10-character form; decodes at extended-square resolution
    SuperExtended,
}

impl Precision {
    /// Derive the precision level from a locator length.
    pub fn from_len(len: usize) -> Option<Self> {
        match len {
            4 => Some(Precision::Square),
            6 => Some(Precision::Subsquare),
            8 => Some(Precision::Extended),
            10 => Some(Precision::SuperExtended),
            _ => None,
        }
    }

    /// Locator length in characters for this precision level.
    pub fn len(&self) -> usize {
        match self {
            Precision::Square => 4,
            Precision::Subsquare => 6,
            Precision::Extended => 8,
            Precision::SuperExtended => 10,
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Precision::Square => 0,
            Precision::Subsquare => 1,
            Precision::Extended => 2,
            Precision::SuperExtended => 3,
        }
    }

    /// Latitude span of one cell at this precision, in degrees.
    pub fn cell_height(&self) -> f64 {
        CELL_HEIGHTS[self.index()]
    }

    /// Longitude span of one cell at this precision, in degrees.
    pub fn cell_width(&self) -> f64 {
        CELL_WIDTHS[self.index()]
    }
}

/// Checks a locator string against the supported length/alphabet patterns.
///
/// Explicit per-field range checks: length in {4, 6, 8, 10}, field 1
/// letters A-R, fields 2 and 4 decimal digits, fields 3 and 5 letters A-X.
/// Case-insensitive. Returns the precision level on success.
pub fn validate_locator(locator: &str) -> Result<Precision, MaidenheadError> {
    let precision = Precision::from_len(locator.len())
        .ok_or_else(|| MaidenheadError::InvalidFormat(locator.to_string()))?;

    for (i, &b) in locator.as_bytes().iter().enumerate() {
        let ok = match i {
            0 | 1 => b.to_ascii_uppercase().is_ascii_uppercase() && b.to_ascii_uppercase() <= b'R',
            2 | 3 | 6 | 7 => b.is_ascii_digit(),
            _ => b.to_ascii_uppercase().is_ascii_uppercase() && b.to_ascii_uppercase() <= b'X',
        };
        if !ok {
            return Err(MaidenheadError::InvalidFormat(locator.to_string()));
        }
    }
    Ok(precision)
}

/// Converts a locator string to the centre of its grid cell.
///
/// Returns `(lat, lon)` in degrees, each rounded to six decimal places
/// with ties away from zero. The rounding is part of the contract:
/// bounding boxes and cell-equality checks downstream depend on it.
///
/// Ten-character locators are accepted but decode at eight-character
/// resolution; the fifth field carries no centring.
pub fn locator_to_lat_lon(locator: &str) -> Result<(f64, f64), MaidenheadError> {
    let trimmed = locator.trim();
    let precision = validate_locator(trimmed)?;
    let b = trimmed.to_ascii_uppercase().into_bytes();

    let letter = |i: usize| (b[i] - b'A') as f64;
    let digit = |i: usize| (b[i] - b'0') as f64;

    // Mixed-radix positional decode; the half-step centre offset lands on
    // the terminal field of each form.
    let (lat, lon) = match precision {
        Precision::Square => (
            letter(1) * 10.0 + digit(3) + 0.5 - 90.0,
            letter(0) * 20.0 + (digit(2) + 0.5) * 2.0 - 180.0,
        ),
        Precision::Subsquare => (
            letter(1) * 10.0 + digit(3) + (letter(5) + 0.5) / 24.0 - 90.0,
            letter(0) * 20.0 + digit(2) * 2.0 + (letter(4) + 0.5) / 12.0 - 180.0,
        ),
        Precision::Extended | Precision::SuperExtended => (
            letter(1) * 10.0 + digit(3) + letter(5) / 24.0 + (digit(7) + 0.5) / 240.0 - 90.0,
            letter(0) * 20.0 + digit(2) * 2.0 + letter(4) / 12.0 + (digit(6) + 0.5) / 120.0 - 180.0,
        ),
    };

    Ok((round_coordinate(lat), round_coordinate(lon)))
}

/// Converts latitude and longitude in degrees to a locator string.
///
/// `precision` 0, 1 or 2 selects a 4, 6 or 8 character locator; values
/// above 2 behave as 2. Never fails: coordinates outside [-90, 90] /
/// [-180, 180] wrap through the modular arithmetic into symbols outside
/// the locator alphabets, with no defined geographic meaning.
///
/// A 6-character result whose subsquare field is exactly "mm" (the cell
/// dead-centre) is truncated to its 4-character form. This normalization
/// is intentional and preserved for compatibility with existing tools.
pub fn lat_lon_to_locator(lat: f64, lon: f64, precision: u8) -> String {
    let mut lat = lat + 90.0;
    let mut lon = lon + 180.0;
    let mut locator = String::with_capacity(8);

    locator.push(symbol(b'A', lon / 20.0));
    locator.push(symbol(b'A', lat / 10.0));
    lon = wrap(lon, 20.0);
    lat = wrap(lat, 10.0);

    locator.push(symbol(b'0', lon / 2.0));
    locator.push(symbol(b'0', lat));

    if precision >= 1 {
        lon = wrap(lon, 2.0);
        lat = wrap(lat, 1.0);
        locator.push(symbol(b'a', lon * 12.0));
        locator.push(symbol(b'a', lat * 24.0));
    }

    if precision >= 2 {
        lon = wrap(lon, 1.0 / 12.0);
        lat = wrap(lat, 1.0 / 24.0);
        locator.push(symbol(b'0', lon * 120.0));
        locator.push(symbol(b'0', lat * 240.0));
    }

    if locator.len() == 6 && locator.ends_with("mm") {
        locator.truncate(4);
    }
    locator
}

/// Maps a floored symbol index onto the alphabet starting at `base`.
/// Saturating/wrapping casts keep this total for out-of-range input.
fn symbol(base: u8, scaled: f64) -> char {
    (base as i64 + scaled.floor() as i64) as u8 as char
}

/// Symmetric remainder (nearest zero) renormalized into `[0, width)`.
fn wrap(value: f64, width: f64) -> f64 {
    let rem = value - width * (value / width).round_ties_even();
    if rem < 0.0 { rem + width } else { rem }
}
