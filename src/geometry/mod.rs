//! Polygon geometry model
//!
//! Rings are always stored closed (first point equals last point) and expose
//! their winding order through the signed shoelace area. Polygons own their
//! rings by value; ring 0 is the exterior boundary and any further rings are
//! holes. Two winding conventions are supported:
//!
//! - **GeoJSON**: exterior counter-clockwise, holes clockwise
//! - **ESRI**: exterior clockwise, holes counter-clockwise
//!
//! Conversion between the two is a per-ring reversal that never reorders
//! points beyond flipping their direction.

pub mod polygon;
pub mod ring;

/// A 2D coordinate as `[x, y]` - either `[longitude, latitude]` or a
/// projected `[easting, northing]` pair.
pub type Point = [f64; 2];

/// Error during geometry construction
#[derive(Debug, thiserror::Error)]
pub enum GeometryError {
    /// A ring was built from fewer than 3 distinct points
    #[error("a ring needs at least 3 distinct points, got {count}")]
    TooFewPoints { count: usize },
    /// A polygon was built without an exterior ring
    #[error("a polygon needs at least one ring")]
    EmptyPolygon,
}

// Re-export for convenience
pub use polygon::{MultiPolygon, Polygon};
pub use ring::Ring;
