//! Configuration-driven WMTS tile matrix generation.
//!
//! One generator function parameterized by CRS kind, tile size and base
//! scale covers the standard, HD and CRS84 matrix variants.

use serde::{Deserialize, Serialize};

use super::{TileError, MAX_ZOOM};

/// Scale denominator of zoom 0 for 256px web Mercator tiles
/// (the GoogleMapsCompatible well-known scale set).
pub const DEFAULT_BASE_SCALE: f64 = 559_082_264.028_717_8;

/// One zoom level of a tile matrix set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileMatrix {
    /// Matrix identifier, the zoom level as a string
    pub identifier: String,
    /// Scale denominator at this zoom
    pub scale_denominator: f64,
    /// Top-left corner in CRS axis order
    pub top_left_corner: [f64; 2],
    /// Tile width in pixels
    pub tile_width: u32,
    /// Tile height in pixels
    pub tile_height: u32,
    /// Number of tile columns
    pub matrix_width: u64,
    /// Number of tile rows
    pub matrix_height: u64,
}

/// CRS kind of a tile matrix set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatrixCrs {
    /// EPSG:3857 - square matrices, projected top-left corner
    WebMercator,
    /// OGC CRS84 (geographic) - matrices twice as wide as tall
    Crs84,
}

impl MatrixCrs {
    /// The OGC URN written to capabilities documents.
    pub fn urn(self) -> &'static str {
        match self {
            Self::WebMercator => "urn:ogc:def:crs:EPSG::3857",
            Self::Crs84 => "urn:ogc:def:crs:OGC:1.3:CRS84",
        }
    }

    fn top_left_corner(self) -> [f64; 2] {
        match self {
            Self::WebMercator => [-20037508.3427892, 20037508.3427892],
            Self::Crs84 => [90.0, -180.0],
        }
    }
}

/// Generator parameters for a tile matrix range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixConfig {
    /// CRS kind
    pub crs: MatrixCrs,
    /// Tile edge in pixels
    pub tile_size: u32,
    /// Zoom-0 scale denominator override
    pub base_scale: Option<f64>,
    /// HD mode halves the base scale unless one is given explicitly
    pub hd: bool,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            crs: MatrixCrs::WebMercator,
            tile_size: 256,
            base_scale: None,
            hd: false,
        }
    }
}

impl MatrixConfig {
    fn effective_base_scale(&self) -> f64 {
        match self.base_scale {
            Some(scale) => scale,
            None if self.hd => DEFAULT_BASE_SCALE / 2.0,
            None => DEFAULT_BASE_SCALE,
        }
    }
}

/// Generate the tile matrices for an inclusive zoom range.
///
/// # Errors
///
/// Returns [`TileError::InvalidZoomRange`] when `min_zoom > max_zoom` and
/// [`TileError::ZoomTooHigh`] when `max_zoom` exceeds [`MAX_ZOOM`].
///
/// # Example
///
/// ```rust
/// use geo_export_sdk::tiles::{generate_tile_matrices, MatrixConfig};
///
/// let matrices = generate_tile_matrices(0, 2, &MatrixConfig::default()).unwrap();
/// assert_eq!(matrices.len(), 3);
/// assert_eq!(matrices[2].matrix_width, 4);
/// ```
pub fn generate_tile_matrices(
    min_zoom: u8,
    max_zoom: u8,
    config: &MatrixConfig,
) -> Result<Vec<TileMatrix>, TileError> {
    if min_zoom > max_zoom {
        return Err(TileError::InvalidZoomRange {
            min: min_zoom,
            max: max_zoom,
        });
    }
    if max_zoom > MAX_ZOOM {
        return Err(TileError::ZoomTooHigh {
            zoom: max_zoom,
            max: MAX_ZOOM,
        });
    }
    let base_scale = config.effective_base_scale();
    Ok((min_zoom..=max_zoom)
        .map(|zoom| {
            let matrix_width = 1u64 << zoom;
            let matrix_height = match config.crs {
                MatrixCrs::Crs84 => matrix_width / 2,
                MatrixCrs::WebMercator => matrix_width,
            };
            TileMatrix {
                identifier: zoom.to_string(),
                scale_denominator: base_scale / 2f64.powi(i32::from(zoom)),
                top_left_corner: config.crs.top_left_corner(),
                tile_width: config.tile_size,
                tile_height: config.tile_size,
                matrix_width,
                matrix_height,
            }
        })
        .collect())
}

/// A named tile matrix set as advertised in WMTS capabilities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileMatrixSet {
    /// Human-readable title
    pub title: String,
    /// Unique identifier
    pub id: String,
    /// Well-known scale set URN
    pub well_known_scale_set: String,
    /// Minimum zoom level (inclusive)
    pub min_zoom: u8,
    /// Maximum zoom level (inclusive)
    pub max_zoom: u8,
    /// Generator parameters
    pub config: MatrixConfig,
    /// Generated matrices, one per zoom level
    pub tile_matrices: Vec<TileMatrix>,
}

impl TileMatrixSet {
    /// Create a matrix set, generating its matrices from `config`.
    ///
    /// # Errors
    ///
    /// Propagates [`generate_tile_matrices`] zoom range errors.
    pub fn new(
        title: impl Into<String>,
        id: impl Into<String>,
        well_known_scale_set: impl Into<String>,
        min_zoom: u8,
        max_zoom: u8,
        config: MatrixConfig,
    ) -> Result<Self, TileError> {
        let tile_matrices = generate_tile_matrices(min_zoom, max_zoom, &config)?;
        Ok(Self {
            title: title.into(),
            id: id.into(),
            well_known_scale_set: well_known_scale_set.into(),
            min_zoom,
            max_zoom,
            config,
            tile_matrices,
        })
    }

    /// The OGC CRS URN of this set.
    pub fn supported_crs(&self) -> &'static str {
        self.config.crs.urn()
    }

    /// This set restricted to another zoom range.
    ///
    /// Non-default ranges get a `F{min}T{max}` id suffix so restricted sets
    /// stay distinguishable in capabilities documents.
    ///
    /// # Errors
    ///
    /// Propagates [`generate_tile_matrices`] zoom range errors.
    pub fn with_zoom_range(&self, min_zoom: u8, max_zoom: u8) -> Result<Self, TileError> {
        let mut set = Self::new(
            self.title.clone(),
            self.id.clone(),
            self.well_known_scale_set.clone(),
            min_zoom,
            max_zoom,
            self.config.clone(),
        )?;
        if (min_zoom, max_zoom) != (0, 18) {
            set.id = format!("{}F{min_zoom}T{max_zoom}", self.id);
        }
        Ok(set)
    }
}
