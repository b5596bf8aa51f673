//! Web-map tiling utilities
//!
//! Slippy-map tile addressing, quadkey encodings for Bing and Google Earth
//! tile services, configuration-driven WMTS tile matrix generation, and
//! WMTS 1.0.0 capabilities documents.

pub mod matrix;
pub mod quadkey;
pub mod wmts;
pub mod xyz;

/// Highest supported zoom level.
///
/// Tile coordinates are `u32`, which addresses grids up to 2^31 columns.
pub const MAX_ZOOM: u8 = 31;

/// Error in tile addressing or matrix generation
#[derive(Debug, thiserror::Error)]
pub enum TileError {
    /// Minimum zoom above maximum zoom
    #[error("invalid zoom range: {min} > {max}")]
    InvalidZoomRange { min: u8, max: u8 },
    /// Google Earth quadkeys only align with WorldCRS84Quad from zoom 2 up
    #[error("zoom {zoom} is below the supported minimum of {min}")]
    ZoomTooLow { zoom: u8, min: u8 },
    /// Zoom beyond the u32 tile coordinate range
    #[error("zoom {zoom} is above the supported maximum of {max}")]
    ZoomTooHigh { zoom: u8, max: u8 },
    /// Quadkey is empty, has a bad prefix, or contains non-quadrant digits
    #[error("invalid quadkey '{quadkey}': {reason}")]
    InvalidQuadkey { quadkey: String, reason: String },
}

// Re-export for convenience
pub use matrix::{
    generate_tile_matrices, MatrixConfig, MatrixCrs, TileMatrix, TileMatrixSet, DEFAULT_BASE_SCALE,
};
pub use quadkey::{bing_quadkey, google_earth_quadkey, google_earth_quadkey_to_xyz};
pub use wmts::{BoundingBox, Capabilities, MapLayer, Service};
pub use xyz::Xyz;
