//! CSV boundary-point import.
//!
//! Boundary CSV files carry one labeled point per row: the first column is a
//! point label, the next two are the coordinates. Geographic files hold
//! `[longitude, latitude]`; projected files hold Gauss-Krüger coordinates
//! whose axis order surveyors frequently swap, so projected pairs go through
//! an axis-order correction before ring construction.

use csv::ReaderBuilder;

use super::ImportError;
use crate::geometry::{MultiPolygon, Point, Polygon, Ring};

/// Coordinate magnitude above which a value cannot be a longitude/latitude
/// and must be projected.
const PROJECTED_THRESHOLD: f64 = 200.0;

/// Parse one boundary CSV (with a header row) into a polygon.
///
/// # Errors
///
/// - [`ImportError::ShortCsvRow`] for rows with fewer than 3 columns
/// - [`ImportError::InvalidCoordinate`] for non-numeric coordinate cells
/// - [`ImportError::Geometry`] when fewer than 3 distinct points remain
pub fn polygon_from_csv(text: &str) -> Result<Polygon, ImportError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut points = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        let row = index + 2; // 1-based, after the header row
        if record.len() < 3 {
            return Err(ImportError::ShortCsvRow {
                row,
                columns: record.len(),
            });
        }
        let x = parse_coordinate(&record[1], row)?;
        let y = parse_coordinate(&record[2], row)?;
        if x > PROJECTED_THRESHOLD {
            points.push(correct_axis_order([x, y]));
        } else {
            points.push([x, y]);
        }
    }
    Ok(Ring::new(points)?.to_polygon())
}

/// Combine per-file polygons into one multipolygon.
pub fn merge_polygons(polygons: Vec<Polygon>) -> MultiPolygon {
    MultiPolygon::new(polygons)
}

fn parse_coordinate(cell: &str, row: usize) -> Result<f64, ImportError> {
    cell.parse().map_err(|_| ImportError::InvalidCoordinate {
        row,
        value: cell.to_string(),
    })
}

/// Restore `[easting, northing]` order for projected pairs.
///
/// Gauss-Krüger eastings carry the zone number and have 8 integer digits;
/// northings in the covered latitudes have 7. A 7-digit first value means
/// the pair arrived as `[northing, easting]` and is swapped.
fn correct_axis_order(point: Point) -> Point {
    if integer_digits(point[0]) == 7 {
        [point[1], point[0]]
    } else {
        point
    }
}

/// Digit count of the integer part.
fn integer_digits(value: f64) -> usize {
    format!("{}", value.abs().floor()).len()
}
