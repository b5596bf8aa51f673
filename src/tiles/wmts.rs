//! WMTS 1.0.0 capabilities documents.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::matrix::TileMatrixSet;

/// Service identification block of a capabilities document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    /// Service title
    pub title: String,
    /// Service abstract
    pub abstract_text: String,
    /// Service keywords
    pub keywords: Vec<String>,
}

impl Default for Service {
    fn default() -> Self {
        Self {
            title: "Simple WMTS".to_string(),
            abstract_text: "Simple WMTS".to_string(),
            keywords: vec!["WMTS".to_string()],
        }
    }
}

/// Geographic bounding box as lower/upper `[longitude, latitude]` corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// South-west corner
    pub lower: [f64; 2],
    /// North-east corner
    pub upper: [f64; 2],
}

impl BoundingBox {
    /// Web Mercator extent clipped at the standard 85.051129° latitude.
    pub const MERCATOR: Self = Self {
        lower: [-180.0, -85.051129],
        upper: [180.0, 85.051129],
    };

    /// The slightly taller extent some world imagery services advertise.
    pub const WORLD_MERCATOR: Self = Self {
        lower: [-180.0, -85.08405903],
        upper: [180.0, 85.08405903],
    };
}

/// One layer of a capabilities document.
///
/// The tile URL is stored both as given and converted into a WMTS resource
/// template: `{z}/{x}/{y}` placeholders become
/// `{TileMatrix}/{TileCol}/{TileRow}` and query ampersands are XML-escaped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapLayer {
    /// Layer title
    pub title: String,
    /// Layer abstract
    pub abstract_text: String,
    /// Unique layer identifier
    pub id: String,
    /// Geographic extent
    pub bbox: BoundingBox,
    /// Tile matrix set this layer is served in
    pub matrix_set: TileMatrixSet,
    /// Tile image MIME type
    pub format: String,
    url: String,
    wmts_url: String,
}

impl MapLayer {
    /// Create a layer over a `{z}/{x}/{y}` tile URL.
    pub fn new(
        title: impl Into<String>,
        abstract_text: impl Into<String>,
        id: impl Into<String>,
        bbox: BoundingBox,
        matrix_set: TileMatrixSet,
        url: impl Into<String>,
        format: Option<String>,
    ) -> Self {
        let url = url.into();
        let wmts_url = Self::resource_template(&url);
        Self {
            title: title.into(),
            abstract_text: abstract_text.into(),
            id: id.into(),
            bbox,
            matrix_set,
            format: format.unwrap_or_else(|| "image/png".to_string()),
            url,
            wmts_url,
        }
    }

    /// The WMTS resource template derived from the tile URL.
    pub fn resource_url(&self) -> &str {
        &self.wmts_url
    }

    /// Replace the tile URL, rebuilding the resource template.
    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
        self.wmts_url = Self::resource_template(&self.url);
    }

    /// Append a token query parameter to the tile URL.
    pub fn set_token(&mut self, name: &str, token: &str) {
        self.wmts_url = Self::resource_template(&format!("{}&{name}={token}", self.url));
    }

    fn resource_template(url: &str) -> String {
        url.replace("{z}", "{TileMatrix}")
            .replace("{x}", "{TileCol}")
            .replace("{y}", "{TileRow}")
            .replace('&', "&amp;")
            .replace('|', "%7C")
    }
}

/// A WMTS GetCapabilities document.
pub struct Capabilities {
    /// Service identification
    pub service: Service,
    /// Advertised layers
    pub layers: Vec<MapLayer>,
}

impl Capabilities {
    /// Create a capabilities document over the given layers.
    pub fn new(service: Service, layers: Vec<MapLayer>) -> Self {
        Self { service, layers }
    }

    /// Render the capabilities XML.
    ///
    /// Matrix sets shared by several layers are emitted once, keyed by id.
    pub fn to_xml(&self) -> String {
        let mut xml = String::new();
        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str(concat!(
            "<Capabilities xmlns=\"http://www.opengis.net/wmts/1.0\" ",
            "xmlns:ows=\"http://www.opengis.net/ows/1.1\" ",
            "xmlns:xlink=\"http://www.w3.org/1999/xlink\" ",
            "version=\"1.0.0\">\n"
        ));

        xml.push_str("  <ows:ServiceIdentification>\n");
        xml.push_str(&format!(
            "    <ows:Title>{}</ows:Title>\n",
            escape_xml(&self.service.title)
        ));
        xml.push_str(&format!(
            "    <ows:Abstract>{}</ows:Abstract>\n",
            escape_xml(&self.service.abstract_text)
        ));
        xml.push_str("    <ows:Keywords>\n");
        for keyword in &self.service.keywords {
            xml.push_str(&format!(
                "      <ows:Keyword>{}</ows:Keyword>\n",
                escape_xml(keyword)
            ));
        }
        xml.push_str("    </ows:Keywords>\n");
        xml.push_str("    <ows:ServiceType>OGC WMTS</ows:ServiceType>\n");
        xml.push_str("    <ows:ServiceTypeVersion>1.0.0</ows:ServiceTypeVersion>\n");
        xml.push_str("  </ows:ServiceIdentification>\n");

        xml.push_str("  <Contents>\n");
        for layer in &self.layers {
            Self::push_layer(&mut xml, layer);
        }
        for matrix_set in self.unique_matrix_sets() {
            Self::push_matrix_set(&mut xml, matrix_set);
        }
        xml.push_str("  </Contents>\n");
        xml.push_str("</Capabilities>\n");
        xml
    }

    /// Matrix sets used by the layers, de-duplicated by id in id order.
    fn unique_matrix_sets(&self) -> impl Iterator<Item = &TileMatrixSet> {
        let mut by_id = BTreeMap::new();
        for layer in &self.layers {
            by_id.insert(layer.matrix_set.id.clone(), &layer.matrix_set);
        }
        by_id.into_values()
    }

    fn push_layer(xml: &mut String, layer: &MapLayer) {
        xml.push_str("    <Layer>\n");
        xml.push_str(&format!(
            "      <ows:Title>{}</ows:Title>\n",
            escape_xml(&layer.title)
        ));
        xml.push_str(&format!(
            "      <ows:Abstract>{}</ows:Abstract>\n",
            escape_xml(&layer.abstract_text)
        ));
        xml.push_str("      <ows:WGS84BoundingBox>\n");
        xml.push_str(&format!(
            "        <ows:LowerCorner>{} {}</ows:LowerCorner>\n",
            layer.bbox.lower[0], layer.bbox.lower[1]
        ));
        xml.push_str(&format!(
            "        <ows:UpperCorner>{} {}</ows:UpperCorner>\n",
            layer.bbox.upper[0], layer.bbox.upper[1]
        ));
        xml.push_str("      </ows:WGS84BoundingBox>\n");
        xml.push_str(&format!(
            "      <ows:Identifier>{}</ows:Identifier>\n",
            escape_xml(&layer.id)
        ));
        xml.push_str("      <Style isDefault=\"true\">\n");
        xml.push_str("        <ows:Identifier>default</ows:Identifier>\n");
        xml.push_str("      </Style>\n");
        xml.push_str(&format!("      <Format>{}</Format>\n", layer.format));
        xml.push_str("      <TileMatrixSetLink>\n");
        xml.push_str(&format!(
            "        <TileMatrixSet>{}</TileMatrixSet>\n",
            escape_xml(&layer.matrix_set.id)
        ));
        xml.push_str("      </TileMatrixSetLink>\n");
        xml.push_str(&format!(
            "      <ResourceURL format=\"{}\" resourceType=\"tile\" template=\"{}\"/>\n",
            layer.format,
            layer.resource_url()
        ));
        xml.push_str("    </Layer>\n");
    }

    fn push_matrix_set(xml: &mut String, set: &TileMatrixSet) {
        xml.push_str("    <TileMatrixSet>\n");
        xml.push_str(&format!(
            "      <ows:Title>{}</ows:Title>\n",
            escape_xml(&set.title)
        ));
        xml.push_str(&format!(
            "      <ows:Identifier>{}</ows:Identifier>\n",
            escape_xml(&set.id)
        ));
        xml.push_str(&format!(
            "      <ows:SupportedCRS>{}</ows:SupportedCRS>\n",
            set.supported_crs()
        ));
        xml.push_str(&format!(
            "      <WellKnownScaleSet>{}</WellKnownScaleSet>\n",
            escape_xml(&set.well_known_scale_set)
        ));
        for matrix in &set.tile_matrices {
            xml.push_str("      <TileMatrix>\n");
            xml.push_str(&format!(
                "        <ows:Identifier>{}</ows:Identifier>\n",
                matrix.identifier
            ));
            xml.push_str(&format!(
                "        <ScaleDenominator>{}</ScaleDenominator>\n",
                matrix.scale_denominator
            ));
            xml.push_str(&format!(
                "        <TopLeftCorner>{} {}</TopLeftCorner>\n",
                matrix.top_left_corner[0], matrix.top_left_corner[1]
            ));
            xml.push_str(&format!(
                "        <TileWidth>{}</TileWidth>\n",
                matrix.tile_width
            ));
            xml.push_str(&format!(
                "        <TileHeight>{}</TileHeight>\n",
                matrix.tile_height
            ));
            xml.push_str(&format!(
                "        <MatrixWidth>{}</MatrixWidth>\n",
                matrix.matrix_width
            ));
            xml.push_str(&format!(
                "        <MatrixHeight>{}</MatrixHeight>\n",
                matrix.matrix_height
            ));
            xml.push_str("      </TileMatrix>\n");
        }
        xml.push_str("    </TileMatrixSet>\n");
    }
}

/// Escape text content for XML.
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
