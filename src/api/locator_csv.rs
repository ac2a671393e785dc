use crate::api::locator::Locator;
use crate::util::error::MaidenheadError;
use std::collections::HashSet;
use std::fs::File;
use std::path::Path;
use wkt::ToWkt;

/// Column indices resolved from the input header.
enum SourceIndices {
    Coordinates { lat_idx: usize, lon_idx: usize },
    Locator(usize),
}

/// Output format for grid-square polygon geometries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryFormat {
    /// Well-Known Text format (e.g., "POLYGON((...))")
    Wkt,
    /// GeoJSON format
    GeoJson,
}

/// Specifies how to extract location data from CSV rows.
#[derive(Debug, Clone)]
pub enum CoordinateSource {
    /// Separate latitude and longitude columns in degrees
    CoordinateColumns {
        lat_column: String,
        lon_column: String,
    },
    /// A single column already containing a locator string
    LocatorColumn(String),
}

/// Configuration for CSV locator annotation.
#[derive(Debug, Clone)]
pub struct CsvLocatorConfig {
    pub source: CoordinateSource,
    pub exclude_columns: Vec<String>,
    pub precision: u8,
    pub include_geometry: Option<GeometryFormat>,
}

impl CsvLocatorConfig {
    /// Create config for a CSV with latitude/longitude columns.
    ///
    /// # Example
    /// ```
    /// use maidenhead_rs::CsvLocatorConfig;
    ///
    /// let config = CsvLocatorConfig::from_coords("Latitude", "Longitude", 1);
    /// ```
    pub fn from_coords(
        lat_column: impl Into<String>,
        lon_column: impl Into<String>,
        precision: u8,
    ) -> Self {
        Self {
            source: CoordinateSource::CoordinateColumns {
                lat_column: lat_column.into(),
                lon_column: lon_column.into(),
            },
            exclude_columns: Vec::new(),
            precision,
            include_geometry: None,
        }
    }

    /// Create config for a CSV that already carries a locator column;
    /// rows are re-validated and annotated with the cell centre.
    ///
    /// # Example
    /// ```
    /// use maidenhead_rs::CsvLocatorConfig;
    ///
    /// let config = CsvLocatorConfig::from_locator("grid");
    /// ```
    pub fn from_locator(locator_column: impl Into<String>) -> Self {
        Self {
            source: CoordinateSource::LocatorColumn(locator_column.into()),
            exclude_columns: Vec::new(),
            precision: 0,
            include_geometry: None,
        }
    }

    pub fn exclude(mut self, columns: Vec<String>) -> Self {
        self.exclude_columns = columns;
        self
    }

    /// Include the grid-square polygon in the output.
    pub fn with_geometry(mut self, format: GeometryFormat) -> Self {
        self.include_geometry = Some(format);
        self
    }
}

pub trait CsvToLocator {
    fn to_locator_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvLocatorConfig,
    ) -> Result<(), MaidenheadError>;
}

impl<P: AsRef<Path>> CsvToLocator for P {
    fn to_locator_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvLocatorConfig,
    ) -> Result<(), MaidenheadError> {
        csv_to_locator_csv(self, output_path, config)
    }
}

fn polygon_to_wkt(polygon: &geo_types::Polygon<f64>) -> String {
    polygon.wkt_string()
}

fn polygon_to_geojson(polygon: &geo_types::Polygon<f64>) -> String {
    let geom = geojson::Geometry::from(polygon);
    geom.to_string()
}

/// Converts a CSV file with coordinate or locator columns to a CSV file
/// annotated with the locator, cell centre, and optional cell polygon.
///
/// Streams row by row to keep memory flat for large files.
///
/// # Example
///
/// ```no_run
/// use maidenhead_rs::{CsvLocatorConfig, GeometryFormat, csv_to_locator_csv};
///
/// let config = CsvLocatorConfig::from_coords("Latitude", "Longitude", 1)
///     .with_geometry(GeometryFormat::Wkt);
///
/// csv_to_locator_csv("stations.csv", "output.csv", &config).unwrap();
/// ```
pub fn csv_to_locator_csv(
    csv_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &CsvLocatorConfig,
) -> Result<(), MaidenheadError> {
    let file = File::open(csv_path).map_err(|e| MaidenheadError::IoError(e.to_string()))?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| MaidenheadError::CsvError(e.to_string()))?
        .clone();

    let (source_indices, mut exclude_indices) = match &config.source {
        CoordinateSource::CoordinateColumns {
            lat_column,
            lon_column,
        } => {
            let lat_idx = headers.iter().position(|h| h == lat_column).ok_or_else(|| {
                MaidenheadError::CsvError(format!("Latitude column '{}' not found", lat_column))
            })?;
            let lon_idx = headers.iter().position(|h| h == lon_column).ok_or_else(|| {
                MaidenheadError::CsvError(format!("Longitude column '{}' not found", lon_column))
            })?;
            let mut exclude = HashSet::new();
            exclude.insert(lat_idx);
            exclude.insert(lon_idx);
            (SourceIndices::Coordinates { lat_idx, lon_idx }, exclude)
        }
        CoordinateSource::LocatorColumn(column) => {
            let idx = headers.iter().position(|h| h == column).ok_or_else(|| {
                MaidenheadError::CsvError(format!("Locator column '{}' not found", column))
            })?;
            let mut exclude = HashSet::new();
            exclude.insert(idx);
            (SourceIndices::Locator(idx), exclude)
        }
    };

    for column in &config.exclude_columns {
        if let Some(idx) = headers.iter().position(|h| h == column) {
            exclude_indices.insert(idx);
        }
    }

    let out_file =
        File::create(output_path).map_err(|e| MaidenheadError::IoError(e.to_string()))?;
    let mut writer = csv::Writer::from_writer(out_file);

    let mut header_row: Vec<&str> = vec!["locator", "centre_lat", "centre_lon"];
    if config.include_geometry.is_some() {
        header_row.push("locator_geometry");
    }
    for (i, header) in headers.iter().enumerate() {
        if !exclude_indices.contains(&i) {
            header_row.push(header);
        }
    }
    writer
        .write_record(&header_row)
        .map_err(|e| MaidenheadError::CsvError(e.to_string()))?;

    for result in reader.records() {
        let record = result.map_err(|e| MaidenheadError::CsvError(e.to_string()))?;

        let locator = match &source_indices {
            SourceIndices::Coordinates { lat_idx, lon_idx } => {
                let lat_str = record
                    .get(*lat_idx)
                    .ok_or_else(|| {
                        MaidenheadError::CsvError(format!(
                            "Missing latitude column at index {}",
                            lat_idx
                        ))
                    })?
                    .trim();
                let lon_str = record
                    .get(*lon_idx)
                    .ok_or_else(|| {
                        MaidenheadError::CsvError(format!(
                            "Missing longitude column at index {}",
                            lon_idx
                        ))
                    })?
                    .trim();

                let lat: f64 = lat_str.parse().map_err(|_| {
                    MaidenheadError::CsvError(format!("Invalid latitude: '{}'", lat_str))
                })?;
                let lon: f64 = lon_str.parse().map_err(|_| {
                    MaidenheadError::CsvError(format!("Invalid longitude: '{}'", lon_str))
                })?;

                Locator::from_lat_lon(&(lat, lon), config.precision)?
            }
            SourceIndices::Locator(idx) => {
                let value = record.get(*idx).ok_or_else(|| {
                    MaidenheadError::CsvError(format!("Missing locator column at index {}", idx))
                })?;
                Locator::parse(value)?
            }
        };

        let centre = locator.centre();
        let mut row: Vec<String> = vec![
            locator.as_str().to_string(),
            centre.0.to_string(),
            centre.1.to_string(),
        ];

        if let Some(format) = config.include_geometry {
            let polygon = locator.to_polygon();
            let geom_str = match format {
                GeometryFormat::Wkt => polygon_to_wkt(&polygon),
                GeometryFormat::GeoJson => polygon_to_geojson(&polygon),
            };
            row.push(geom_str);
        }

        for (i, field) in record.iter().enumerate() {
            if !exclude_indices.contains(&i) {
                row.push(field.to_string());
            }
        }
        writer
            .write_record(&row)
            .map_err(|e| MaidenheadError::CsvError(e.to_string()))?;
    }

    writer
        .flush()
        .map_err(|e| MaidenheadError::CsvError(e.to_string()))?;

    Ok(())
}
