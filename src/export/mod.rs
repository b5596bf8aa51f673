//! Export functionality
//!
//! Provides writers for:
//! - ESRI Shapefile polygon geometry (`.shp` + `.shx`)
//! - Complete shapefile ZIP bundles (`.shp`/`.shx`/`.dbf`/`.prj`/`.cpg`)

pub mod bundle;
pub mod shapefile;

use crate::dbf::DbfError;
use crate::geometry::GeometryError;

/// Error during export
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Shapefile geometry must contain at least one ring
    #[error("cannot export an empty multipolygon")]
    EmptyGeometry,
    /// Geometry re-validation failed during export
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    /// Attribute table encoding failed
    #[error(transparent)]
    Dbf(#[from] DbfError),
    /// ZIP archive error
    #[error("archive error: {0}")]
    Zip(#[from] zip::result::ZipError),
    /// I/O error while writing archive entries
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

// Re-export for convenience
pub use bundle::ShapefileBundle;
pub use shapefile::{Shapefile, ShapefileExporter};
