//! Installation of sources and layers into the rendering layer.

use serde_json::json;
use tracing::info;

use crate::map::{FeatureFilter, LayerKind, LayerSpec, MapControl, SourceKind, SourceSpec};
use crate::style::{mapbox, CompiledStyle};

use super::ids::*;

/// Tile source URLs and sub-layer names for the overlay.
#[derive(Debug, Clone)]
pub struct OverlayConfig {
    /// Admin boundary vector tileset URL.
    pub admin_url: String,
    /// Elevation band raster tileset URL.
    pub elevation_url: String,
    /// DEM tileset URL.
    pub dem_url: String,
    /// Country sub-layer name within the admin tileset.
    pub admin0_layer: String,
    /// State sub-layer name within the admin tileset.
    pub admin1_layer: String,
    /// District sub-layer name within the admin tileset.
    pub admin2_layer: String,
    /// Fill opacity for the choropleth layers.
    pub fill_opacity: f64,
    /// Terrain exaggeration applied when the terrain toggle is on.
    pub terrain_exaggeration: f64,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            admin_url: "mapbox://ksymes.2bolqz9e".to_string(),
            elevation_url: "mapbox://ksymes.elevation-bands".to_string(),
            dem_url: "mapbox://mapbox.mapbox-terrain-dem-v1".to_string(),
            admin0_layer: "ADM0".to_string(),
            admin1_layer: "ADM1".to_string(),
            admin2_layer: "ADM2".to_string(),
            fill_opacity: 0.6,
            terrain_exaggeration: 1.5,
        }
    }
}

/// Register all overlay sources and layers.
///
/// Initial visibility reflects the default Risk display mode: the risk
/// fills and elevation-mask aux are shown; the elevation overlay,
/// hillshade, and country mask start hidden. The country mask's filter
/// starts as match-all; the camera choreographer narrows it on country
/// selection.
pub fn install_overlay(map: &dyn MapControl, style: &CompiledStyle, config: &OverlayConfig) {
    map.add_source(SourceSpec {
        id: SOURCE_ADMIN.to_string(),
        kind: SourceKind::Vector {
            url: config.admin_url.clone(),
        },
    });
    map.add_source(SourceSpec {
        id: SOURCE_ELEVATION.to_string(),
        kind: SourceKind::Raster {
            url: config.elevation_url.clone(),
        },
    });
    map.add_source(SourceSpec {
        id: SOURCE_DEM.to_string(),
        kind: SourceKind::RasterDem {
            url: config.dem_url.clone(),
        },
    });

    // Choropleth fills, coarsest level first so finer levels paint on top.
    map.add_layer(LayerSpec {
        id: LAYER_COUNTRY_RISK.to_string(),
        source: SOURCE_ADMIN.to_string(),
        source_layer: Some(config.admin0_layer.clone()),
        kind: LayerKind::Fill {
            color: mapbox::to_expression(&style.country),
            opacity: config.fill_opacity,
        },
        visible: true,
        min_zoom: None,
        max_zoom: Some(3.0),
    });
    map.add_layer(LayerSpec {
        id: LAYER_STATE_RISK.to_string(),
        source: SOURCE_ADMIN.to_string(),
        source_layer: Some(config.admin1_layer.clone()),
        kind: LayerKind::Fill {
            color: mapbox::to_expression(&style.state),
            opacity: config.fill_opacity,
        },
        visible: true,
        min_zoom: Some(3.0),
        max_zoom: Some(6.0),
    });
    map.add_layer(LayerSpec {
        id: LAYER_DISTRICT_RISK.to_string(),
        source: SOURCE_ADMIN.to_string(),
        source_layer: Some(config.admin2_layer.clone()),
        kind: LayerKind::Fill {
            color: mapbox::to_expression(&style.district),
            opacity: config.fill_opacity,
        },
        visible: true,
        min_zoom: Some(6.0),
        max_zoom: None,
    });

    map.add_layer(LayerSpec {
        id: LAYER_ELEVATION_MASK.to_string(),
        source: SOURCE_ELEVATION.to_string(),
        source_layer: None,
        kind: LayerKind::Raster { opacity: 0.35 },
        visible: true,
        min_zoom: None,
        max_zoom: None,
    });
    map.add_layer(LayerSpec {
        id: LAYER_ELEVATION.to_string(),
        source: SOURCE_ELEVATION.to_string(),
        source_layer: None,
        kind: LayerKind::Raster { opacity: 0.8 },
        visible: false,
        min_zoom: None,
        max_zoom: None,
    });
    map.add_layer(LayerSpec {
        id: LAYER_HILLSHADE.to_string(),
        source: SOURCE_DEM.to_string(),
        source_layer: None,
        kind: LayerKind::Hillshade,
        visible: false,
        min_zoom: None,
        max_zoom: None,
    });

    map.add_layer(LayerSpec {
        id: LAYER_BOUNDARY_LINES.to_string(),
        source: SOURCE_ADMIN.to_string(),
        source_layer: Some(config.admin0_layer.clone()),
        kind: LayerKind::Line {
            color: json!("#666666"),
            width: 0.8,
        },
        visible: true,
        min_zoom: None,
        max_zoom: None,
    });
    map.add_layer(LayerSpec {
        id: LAYER_COUNTRY_MASK.to_string(),
        source: SOURCE_ADMIN.to_string(),
        source_layer: Some(config.admin0_layer.clone()),
        kind: LayerKind::Fill {
            color: json!("#1a1a2e"),
            opacity: 0.45,
        },
        visible: false,
        min_zoom: None,
        max_zoom: None,
    });
    map.set_filter(LAYER_COUNTRY_MASK, FeatureFilter::All);

    info!("Installed overlay sources and layers");
}
