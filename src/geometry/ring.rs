//! Closed point rings with signed-area and winding-order operations.

use serde::{Deserialize, Serialize};

use super::{GeometryError, Point, Polygon};

/// A closed sequence of points.
///
/// The constructor clones its input, appends the first point if the sequence
/// is not already closed, and rejects anything with fewer than 3 distinct
/// points. After construction the first and last points are always equal by
/// value.
///
/// # Example
///
/// ```rust
/// use geo_export_sdk::geometry::Ring;
///
/// let ring = Ring::new(vec![[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0]]).unwrap();
/// assert_eq!(ring.points().len(), 5); // closing point appended
/// assert_eq!(ring.signed_area(), 16.0);
/// assert!(ring.is_outer());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ring {
    points: Vec<Point>,
}

impl Ring {
    /// Create a ring from a point sequence, closing it if necessary.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::TooFewPoints`] when fewer than 4 points
    /// remain after closing (i.e. fewer than 3 distinct input points).
    pub fn new(points: Vec<Point>) -> Result<Self, GeometryError> {
        let mut points = points;
        if let (Some(&first), Some(&last)) = (points.first(), points.last())
            && (first[0] != last[0] || first[1] != last[1])
        {
            points.push(first);
        }
        if points.len() < 4 {
            return Err(GeometryError::TooFewPoints {
                count: points.len(),
            });
        }
        Ok(Self { points })
    }

    /// The closed point sequence, first point equal to the last.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Signed area via the shoelace formula.
    ///
    /// Positive means the points run counter-clockwise, negative clockwise.
    pub fn signed_area(&self) -> f64 {
        let sum: f64 = self
            .points
            .windows(2)
            .map(|pair| pair[0][0] * pair[1][1] - pair[1][0] * pair[0][1])
            .sum();
        sum / 2.0
    }

    /// Whether this ring is an exterior ring by the GeoJSON convention
    /// (counter-clockwise, positive area).
    ///
    /// A degenerate zero-area ring is neither outer nor clockwise.
    pub fn is_outer(&self) -> bool {
        self.signed_area() > 0.0
    }

    /// Whether the points run clockwise (negative area).
    ///
    /// A degenerate zero-area ring is neither outer nor clockwise.
    pub fn is_clockwise(&self) -> bool {
        self.signed_area() < 0.0
    }

    /// A new ring with the point order reversed.
    ///
    /// Reversal preserves closure since the endpoints are equal.
    pub fn to_reversed(&self) -> Self {
        let mut points = self.points.clone();
        points.reverse();
        Self { points }
    }

    /// This ring, reversed if needed so it is counter-clockwise
    /// (a GeoJSON exterior ring).
    pub fn ensure_outer(&self) -> Self {
        if self.is_clockwise() {
            self.to_reversed()
        } else {
            self.clone()
        }
    }

    /// This ring, reversed if needed so it is clockwise
    /// (a GeoJSON hole ring).
    pub fn ensure_inner(&self) -> Self {
        if self.is_outer() {
            self.to_reversed()
        } else {
            self.clone()
        }
    }

    /// This ring, reversed if needed so it is clockwise
    /// (an ESRI exterior ring).
    pub fn ensure_esri_outer(&self) -> Self {
        if self.is_outer() {
            self.to_reversed()
        } else {
            self.clone()
        }
    }

    /// This ring, reversed if needed so it is counter-clockwise
    /// (an ESRI hole ring).
    pub fn ensure_esri_inner(&self) -> Self {
        if self.is_clockwise() {
            self.to_reversed()
        } else {
            self.clone()
        }
    }

    /// Apply a coordinate mapping to every point, returning a new ring.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::TooFewPoints`] if the mapping collapses the
    /// ring below 3 distinct points (e.g. by projecting onto equal values).
    pub fn transform<F>(&self, f: F) -> Result<Self, GeometryError>
    where
        F: Fn(Point) -> Point,
    {
        Ring::new(self.points.iter().map(|&p| f(p)).collect())
    }

    /// Wrap this ring as a single-ring polygon.
    pub fn to_polygon(&self) -> Polygon {
        Polygon::from_exterior(self.clone())
    }
}
