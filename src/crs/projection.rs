//! Spherical Mercator projection math.

use std::f64::consts::PI;

use crate::geometry::Point;

/// WGS84 / web Mercator sphere radius in meters.
pub const EARTH_RADIUS: f64 = 6_378_137.0;

/// Convert degrees to radians.
pub fn degree_to_radian(degree: f64) -> f64 {
    degree * PI / 180.0
}

/// Convert radians to degrees.
pub fn radian_to_degree(radian: f64) -> f64 {
    radian * 180.0 / PI
}

/// Project a WGS84 `[longitude, latitude]` pair to spherical Mercator
/// `[x, y]` meters.
pub fn wgs84_to_mercator(coordinate: Point) -> Point {
    let [longitude, latitude] = coordinate;
    let x = EARTH_RADIUS * degree_to_radian(longitude);
    let y = EARTH_RADIUS * (PI / 4.0 + degree_to_radian(latitude) / 2.0).tan().ln();
    [x, y]
}

/// Unproject spherical Mercator `[x, y]` meters to a WGS84
/// `[longitude, latitude]` pair.
pub fn mercator_to_wgs84(coordinate: Point) -> Point {
    let [x, y] = coordinate;
    let longitude = radian_to_degree(x / EARTH_RADIUS);
    let latitude = radian_to_degree(2.0 * (y / EARTH_RADIUS).exp().atan() - PI / 2.0);
    [longitude, latitude]
}
