//! ESRI Shapefile polygon writer.
//!
//! Writes the `.shp`/`.shx` pair for one polygon feature whose parts are all
//! rings of a multipolygon, rewound to the ESRI convention (exterior
//! clockwise, holes counter-clockwise) before serialization. File and record
//! headers are big-endian, geometry is little-endian, and all lengths are
//! counted in 16-bit words, per the ESRI shapefile whitepaper.

use tracing::debug;

use super::ExportError;
use crate::geometry::{MultiPolygon, Point};

const FILE_CODE: i32 = 9994;
const VERSION: i32 = 1000;
const SHAPE_TYPE_POLYGON: i32 = 5;
const FILE_HEADER_LEN: usize = 100;
const RECORD_HEADER_LEN: usize = 8;

/// The `.shp`/`.shx` byte pair of one written shapefile.
#[derive(Debug, Clone)]
pub struct Shapefile {
    /// Main geometry file
    pub shp: Vec<u8>,
    /// Record index file
    pub shx: Vec<u8>,
}

/// Writer for polygon shapefiles.
pub struct ShapefileExporter;

impl ShapefileExporter {
    /// Write a multipolygon as a single polygon record.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::EmptyGeometry`] when the multipolygon holds no
    /// rings.
    pub fn export(multi_polygon: &MultiPolygon) -> Result<Shapefile, ExportError> {
        let esri = multi_polygon.ensure_esri_standard();
        let rings: Vec<&[Point]> = esri
            .polygons()
            .iter()
            .flat_map(|polygon| polygon.rings().iter().map(|ring| ring.points()))
            .collect();
        if rings.is_empty() {
            return Err(ExportError::EmptyGeometry);
        }

        let bbox = bounding_box(&rings);
        let content = record_content(&rings, bbox);
        let content_words = (content.len() / 2) as i32;

        let mut shp = Vec::with_capacity(FILE_HEADER_LEN + RECORD_HEADER_LEN + content.len());
        let shp_words = ((FILE_HEADER_LEN + RECORD_HEADER_LEN + content.len()) / 2) as i32;
        push_file_header(&mut shp, shp_words, bbox);
        shp.extend_from_slice(&1i32.to_be_bytes()); // record number
        shp.extend_from_slice(&content_words.to_be_bytes());
        shp.extend_from_slice(&content);

        let mut shx = Vec::with_capacity(FILE_HEADER_LEN + 8);
        let shx_words = ((FILE_HEADER_LEN + 8) / 2) as i32;
        push_file_header(&mut shx, shx_words, bbox);
        shx.extend_from_slice(&((FILE_HEADER_LEN / 2) as i32).to_be_bytes()); // record offset
        shx.extend_from_slice(&content_words.to_be_bytes());

        debug!(
            rings = rings.len(),
            shp_bytes = shp.len(),
            "wrote polygon shapefile"
        );
        Ok(Shapefile { shp, shx })
    }
}

/// `[xmin, ymin, xmax, ymax]` over all ring points.
fn bounding_box(rings: &[&[Point]]) -> [f64; 4] {
    let mut bbox = [f64::MAX, f64::MAX, f64::MIN, f64::MIN];
    for point in rings.iter().flat_map(|ring| ring.iter()) {
        bbox[0] = bbox[0].min(point[0]);
        bbox[1] = bbox[1].min(point[1]);
        bbox[2] = bbox[2].max(point[0]);
        bbox[3] = bbox[3].max(point[1]);
    }
    bbox
}

/// The little-endian polygon record body: shape type, bbox, part offsets,
/// then all points.
fn record_content(rings: &[&[Point]], bbox: [f64; 4]) -> Vec<u8> {
    let num_points: usize = rings.iter().map(|ring| ring.len()).sum();
    let mut content = Vec::with_capacity(44 + 4 * rings.len() + 16 * num_points);
    content.extend_from_slice(&SHAPE_TYPE_POLYGON.to_le_bytes());
    for value in bbox {
        content.extend_from_slice(&value.to_le_bytes());
    }
    content.extend_from_slice(&(rings.len() as i32).to_le_bytes());
    content.extend_from_slice(&(num_points as i32).to_le_bytes());
    let mut offset = 0i32;
    for ring in rings {
        content.extend_from_slice(&offset.to_le_bytes());
        offset += ring.len() as i32;
    }
    for point in rings.iter().flat_map(|ring| ring.iter()) {
        content.extend_from_slice(&point[0].to_le_bytes());
        content.extend_from_slice(&point[1].to_le_bytes());
    }
    content
}

/// The 100-byte file header shared by `.shp` and `.shx`.
fn push_file_header(data: &mut Vec<u8>, file_words: i32, bbox: [f64; 4]) {
    data.extend_from_slice(&FILE_CODE.to_be_bytes());
    data.extend_from_slice(&[0u8; 20]); // unused
    data.extend_from_slice(&file_words.to_be_bytes());
    data.extend_from_slice(&VERSION.to_le_bytes());
    data.extend_from_slice(&SHAPE_TYPE_POLYGON.to_le_bytes());
    for value in bbox {
        data.extend_from_slice(&value.to_le_bytes());
    }
    data.extend_from_slice(&[0u8; 32]); // z and m ranges, unused for 2D polygons
}
