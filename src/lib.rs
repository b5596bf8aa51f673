//! GIS Export SDK - library for producing GIS vector exports from in-memory geometry
//!
//! Provides unified building blocks for:
//! - Polygon geometry with winding-order control (GeoJSON / ESRI conventions)
//! - Byte-exact DBF (dBASE III) attribute table encoding
//! - ESRI Shapefile writing and ZIP bundle packaging
//! - Coordinate reference system transforms and PRJ well-known text
//! - Web-map tile addressing (XYZ, quadkeys) and WMTS tile matrix sets
//! - Boundary geometry import from CSV and KML/KMZ sources

pub mod crs;
pub mod dbf;
pub mod export;
pub mod geometry;
pub mod import;
pub mod tiles;

// Re-export commonly used types
pub use crs::CrsError;
pub use dbf::{Dbf, DbfError, Field, FieldType, FieldValue};
pub use export::{ExportError, Shapefile, ShapefileBundle, ShapefileExporter};
pub use geometry::{GeometryError, MultiPolygon, Point, Polygon, Ring};
pub use import::ImportError;
pub use tiles::{MatrixConfig, MatrixCrs, TileError, TileMatrix, TileMatrixSet, Xyz};
