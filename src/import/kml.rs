//! KML/KMZ boundary import.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::result::ZipError;
use zip::ZipArchive;

use super::ImportError;
use crate::geometry::{MultiPolygon, Point, Polygon, Ring};

/// Extract the `doc.kml` document from a KMZ archive.
///
/// # Errors
///
/// Returns [`ImportError::MissingKmlEntry`] when the archive has no
/// `doc.kml`, and archive/read errors otherwise.
pub fn kml_from_kmz(bytes: &[u8]) -> Result<String, ImportError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    let mut entry = match archive.by_name("doc.kml") {
        Ok(entry) => entry,
        Err(ZipError::FileNotFound) => return Err(ImportError::MissingKmlEntry),
        Err(err) => return Err(err.into()),
    };
    let mut kml = String::new();
    entry.read_to_string(&mut kml)?;
    Ok(kml)
}

/// Collect the polygons of a KML document.
///
/// Every `<coordinates>` run inside a `<Polygon>` element becomes one ring
/// of that polygon (outer boundary first, per the KML element order).
/// Altitude components are ignored.
///
/// # Errors
///
/// Returns [`ImportError::NoCoordinates`] when the document holds no polygon
/// coordinates, and tuple/ring errors for malformed content.
pub fn polygons_from_kml(kml: &str) -> Result<MultiPolygon, ImportError> {
    let mut reader = Reader::from_str(kml);
    let mut polygons = Vec::new();
    let mut current_rings: Vec<Ring> = Vec::new();
    let mut polygon_depth = 0u32;
    let mut in_coordinates = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"Polygon" => polygon_depth += 1,
                b"coordinates" if polygon_depth > 0 => in_coordinates = true,
                _ => {}
            },
            Event::Text(t) if in_coordinates => {
                let text = t.unescape()?;
                let points = parse_coordinates(&text)?;
                if !points.is_empty() {
                    current_rings.push(Ring::new(points)?);
                }
            }
            Event::End(e) => match e.local_name().as_ref() {
                b"coordinates" => in_coordinates = false,
                b"Polygon" => {
                    polygon_depth = polygon_depth.saturating_sub(1);
                    if !current_rings.is_empty() {
                        polygons.push(Polygon::new(std::mem::take(&mut current_rings))?);
                    }
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    if polygons.is_empty() {
        return Err(ImportError::NoCoordinates);
    }
    Ok(MultiPolygon::new(polygons))
}

/// Parse a whitespace-separated `lon,lat[,alt]` coordinate run.
fn parse_coordinates(text: &str) -> Result<Vec<Point>, ImportError> {
    text.split_whitespace()
        .map(|tuple| {
            let mut parts = tuple.split(',');
            let lon = parts.next().and_then(|p| p.parse().ok());
            let lat = parts.next().and_then(|p| p.parse().ok());
            match (lon, lat) {
                (Some(lon), Some(lat)) => Ok([lon, lat]),
                _ => Err(ImportError::InvalidKmlTuple {
                    tuple: tuple.to_string(),
                }),
            }
        })
        .collect()
}
