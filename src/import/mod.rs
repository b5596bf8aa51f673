//! Import functionality
//!
//! Builds polygon geometry from boundary sources:
//! - CSV point listings (one file per polygon)
//! - KMZ archives and KML documents

pub mod csv;
pub mod kml;

use crate::geometry::GeometryError;

/// Error during import
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    /// CSV row with too few columns for a coordinate pair
    #[error("csv row {row} has {columns} columns, at least 3 are required")]
    ShortCsvRow { row: usize, columns: usize },
    /// CSV cell that should be a coordinate but is not numeric
    #[error("csv row {row} holds non-numeric coordinate '{value}'")]
    InvalidCoordinate { row: usize, value: String },
    /// CSV reader error
    #[error("csv parse error: {0}")]
    Csv(#[from] ::csv::Error),
    /// KMZ archive without the mandatory `doc.kml` entry
    #[error("KMZ archive does not contain doc.kml")]
    MissingKmlEntry,
    /// KML document without polygon coordinates
    #[error("KML document contains no polygon coordinates")]
    NoCoordinates,
    /// Malformed KML coordinate tuple
    #[error("malformed KML coordinate tuple '{tuple}'")]
    InvalidKmlTuple { tuple: String },
    /// XML reader error
    #[error("KML parse error: {0}")]
    Xml(#[from] quick_xml::Error),
    /// ZIP archive error
    #[error("archive error: {0}")]
    Zip(#[from] zip::result::ZipError),
    /// I/O error while reading archive entries
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Imported points did not form a valid ring
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

// Re-export for convenience
pub use csv::{merge_polygons, polygon_from_csv};
pub use kml::{kml_from_kmz, polygons_from_kml};
