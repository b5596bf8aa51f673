//! Coordinate reference system helpers
//!
//! Spherical Mercator transforms for web-map work and the ESRI well-known
//! text used in Shapefile `.prj` siblings, including the CGCS2000 3-degree
//! Gauss-Krüger zones common in Chinese land-survey deliverables.

pub mod projection;
pub mod wkt;

/// Error in CRS parameters
#[derive(Debug, thiserror::Error)]
pub enum CrsError {
    /// Requested Gauss-Krüger zone outside the defined 25-45 range
    #[error("CGCS2000 3-degree zone {zone} is out of range (25-45)")]
    ZoneOutOfRange { zone: u8 },
}

// Re-export for convenience
pub use projection::{
    degree_to_radian, mercator_to_wgs84, radian_to_degree, wgs84_to_mercator, EARTH_RADIUS,
};
pub use wkt::{cgcs2000_gauss_kruger_wkt, WGS84_WKT};
