//! Slippy-map tile addressing.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::crs::{degree_to_radian, radian_to_degree};
use crate::geometry::Point;

/// A slippy-map tile address: column, row and zoom level.
///
/// Conversion formulas follow the OpenStreetMap slippy-map tilename
/// convention.
///
/// # Example
///
/// ```rust
/// use geo_export_sdk::tiles::Xyz;
///
/// let tile = Xyz::from_lonlat(116.4074, 39.9042, 10);
/// assert_eq!((tile.x, tile.y), (843, 388));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Xyz {
    /// Tile column index
    pub x: u32,
    /// Tile row index
    pub y: u32,
    /// Zoom level
    pub z: u8,
}

impl Xyz {
    /// Create a tile address.
    pub fn new(x: u32, y: u32, z: u8) -> Self {
        Self { x, y, z }
    }

    /// The `[longitude, latitude]` of this tile's north-west corner.
    pub fn to_lonlat(self) -> Point {
        let n = 2f64.powi(i32::from(self.z));
        let lon = f64::from(self.x) / n * 360.0 - 180.0;
        let lat = radian_to_degree((PI - f64::from(self.y) / n * 2.0 * PI).sinh().atan());
        [lon, lat]
    }

    /// The tile containing the given coordinate at zoom `z`.
    ///
    /// Column and row indices are `u32`, so zooms above [`super::MAX_ZOOM`]
    /// saturate at the edge of the addressable grid.
    pub fn from_lonlat(lon: f64, lat: f64, z: u8) -> Self {
        let n = 2f64.powi(i32::from(z));
        let x = ((lon + 180.0) / 360.0 * n).floor();
        let lat_rad = degree_to_radian(lat);
        let y = ((1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / PI) / 2.0 * n).floor();
        Self {
            x: x as u32,
            y: y as u32,
            z,
        }
    }
}
