//! Shapefile ZIP bundle packaging.

use std::io::{Cursor, Write};

use tracing::debug;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::shapefile::{Shapefile, ShapefileExporter};
use super::ExportError;
use crate::dbf::Dbf;
use crate::geometry::MultiPolygon;

/// A complete shapefile delivery: geometry, index, attribute table,
/// projection and codepage siblings under one folder inside a ZIP archive.
///
/// # Example
///
/// ```rust,no_run
/// use geo_export_sdk::dbf::{Dbf, Field, FieldValue};
/// use geo_export_sdk::export::ShapefileBundle;
/// use geo_export_sdk::geometry::{MultiPolygon, Ring};
/// use geo_export_sdk::crs::WGS84_WKT;
///
/// let ring = Ring::new(vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]).unwrap();
/// let geometry = ring.to_polygon().to_multipolygon();
/// let dbf = Dbf::with_records(
///     vec![Field::character("NAME", 10).unwrap()],
///     vec![vec![FieldValue::from("parcel-1")]],
/// );
/// let bundle = ShapefileBundle::new("parcel-1", &geometry, &dbf, WGS84_WKT).unwrap();
/// std::fs::write("parcel-1.zip", bundle.to_zip().unwrap()).unwrap();
/// ```
pub struct ShapefileBundle {
    name: String,
    shapefile: Shapefile,
    dbf: Vec<u8>,
    prj: String,
}

impl ShapefileBundle {
    /// Build the bundle contents from geometry, attributes and projection.
    ///
    /// # Errors
    ///
    /// Propagates shapefile export and DBF encoding errors.
    pub fn new(
        name: impl Into<String>,
        multi_polygon: &MultiPolygon,
        dbf: &Dbf,
        prj: impl Into<String>,
    ) -> Result<Self, ExportError> {
        Ok(Self {
            name: name.into(),
            shapefile: ShapefileExporter::export(multi_polygon)?,
            dbf: dbf.data()?,
            prj: prj.into(),
        })
    }

    /// The bundle folder and file stem.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Write the deflate-compressed ZIP archive.
    ///
    /// Entries are `<name>/<name>.{shp,shx,dbf,cpg,prj}`; the `.cpg` sibling
    /// pins the attribute encoding to UTF-8.
    pub fn to_zip(&self) -> Result<Vec<u8>, ExportError> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

        let entries: [(&str, &[u8]); 5] = [
            ("shp", &self.shapefile.shp),
            ("shx", &self.shapefile.shx),
            ("dbf", &self.dbf),
            ("cpg", b"UTF-8"),
            ("prj", self.prj.as_bytes()),
        ];
        for (extension, content) in entries {
            writer.start_file(format!("{0}/{0}.{extension}", self.name), options)?;
            writer.write_all(content)?;
        }

        let archive = writer.finish()?.into_inner();
        debug!(
            name = %self.name,
            bytes = archive.len(),
            "packaged shapefile bundle"
        );
        Ok(archive)
    }
}
