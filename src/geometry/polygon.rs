//! Polygon and MultiPolygon aggregates.

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{GeometryError, Point, Ring};

/// A polygon as an ordered ring sequence.
///
/// Ring 0 is the exterior boundary; any further rings are holes. The polygon
/// exclusively owns copies of its rings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    rings: Vec<Ring>,
}

impl Polygon {
    /// Create a polygon from its rings.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::EmptyPolygon`] when `rings` is empty.
    pub fn new(rings: Vec<Ring>) -> Result<Self, GeometryError> {
        if rings.is_empty() {
            return Err(GeometryError::EmptyPolygon);
        }
        Ok(Self { rings })
    }

    /// Create a polygon with only an exterior ring.
    pub fn from_exterior(exterior: Ring) -> Self {
        Self {
            rings: vec![exterior],
        }
    }

    /// All rings, exterior first.
    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    /// The exterior boundary ring.
    pub fn exterior(&self) -> &Ring {
        &self.rings[0]
    }

    /// Hole rings, if any.
    pub fn holes(&self) -> &[Ring] {
        &self.rings[1..]
    }

    /// Arithmetic sum of the ring signed areas.
    ///
    /// This equals exterior area minus hole areas only when the rings follow
    /// one winding convention; callers wanting a true area should normalize
    /// with [`Polygon::ensure_geojson_standard`] first.
    pub fn signed_area(&self) -> f64 {
        self.rings.iter().map(Ring::signed_area).sum()
    }

    /// This polygon with ring 0 counter-clockwise and holes clockwise.
    pub fn ensure_geojson_standard(&self) -> Self {
        Self {
            rings: self.convention_rings(Ring::ensure_outer, Ring::ensure_inner),
        }
    }

    /// This polygon with ring 0 clockwise and holes counter-clockwise.
    pub fn ensure_esri_standard(&self) -> Self {
        Self {
            rings: self.convention_rings(Ring::ensure_esri_outer, Ring::ensure_esri_inner),
        }
    }

    fn convention_rings(
        &self,
        outer: impl Fn(&Ring) -> Ring,
        inner: impl Fn(&Ring) -> Ring,
    ) -> Vec<Ring> {
        self.rings
            .iter()
            .enumerate()
            .map(|(i, ring)| if i == 0 { outer(ring) } else { inner(ring) })
            .collect()
    }

    /// Apply a coordinate mapping to every ring, returning a new polygon.
    ///
    /// # Errors
    ///
    /// Propagates [`GeometryError`] from ring re-validation.
    pub fn transform<F>(&self, f: F) -> Result<Self, GeometryError>
    where
        F: Fn(Point) -> Point,
    {
        let rings = self
            .rings
            .iter()
            .map(|ring| ring.transform(&f))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rings })
    }

    /// Nested point arrays, one per ring.
    pub fn coordinates(&self) -> Vec<Vec<Point>> {
        self.rings.iter().map(|r| r.points().to_vec()).collect()
    }

    /// Wrap this polygon as a single-member multipolygon.
    pub fn to_multipolygon(&self) -> MultiPolygon {
        MultiPolygon::new(vec![self.clone()])
    }
}

/// An ordered sequence of geometrically independent polygons.
///
/// Members may be adjacent but must not overlap; overlap is not enforced and
/// is the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiPolygon {
    polygons: Vec<Polygon>,
}

impl MultiPolygon {
    /// Create a multipolygon from its member polygons.
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }

    /// The member polygons.
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Sum of the member polygon signed areas.
    ///
    /// See [`Polygon::signed_area`] for the winding caveat.
    pub fn signed_area(&self) -> f64 {
        self.polygons.iter().map(Polygon::signed_area).sum()
    }

    /// All members normalized to the GeoJSON winding convention.
    pub fn ensure_geojson_standard(&self) -> Self {
        Self {
            polygons: self
                .polygons
                .iter()
                .map(Polygon::ensure_geojson_standard)
                .collect(),
        }
    }

    /// All members normalized to the ESRI winding convention.
    pub fn ensure_esri_standard(&self) -> Self {
        Self {
            polygons: self
                .polygons
                .iter()
                .map(Polygon::ensure_esri_standard)
                .collect(),
        }
    }

    /// Apply a coordinate mapping to every member, returning a new
    /// multipolygon.
    ///
    /// # Errors
    ///
    /// Propagates [`GeometryError`] from ring re-validation.
    pub fn transform<F>(&self, f: F) -> Result<Self, GeometryError>
    where
        F: Fn(Point) -> Point,
    {
        let polygons = self
            .polygons
            .iter()
            .map(|polygon| polygon.transform(&f))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { polygons })
    }

    /// Nested point arrays: polygons, then rings, then points.
    pub fn coordinates(&self) -> Vec<Vec<Vec<Point>>> {
        self.polygons.iter().map(Polygon::coordinates).collect()
    }

    /// This multipolygon as a GeoJSON geometry object.
    pub fn to_geojson(&self) -> serde_json::Value {
        json!({
            "type": "MultiPolygon",
            "coordinates": self.coordinates(),
        })
    }
}
