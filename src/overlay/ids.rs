//! Source and layer id constants.
//!
//! One place for every id the coordinator, choreographer, and install
//! step refer to, so a rename cannot silently desynchronize them.

/// Admin boundary vector tile source.
pub const SOURCE_ADMIN: &str = "admin-boundaries";
/// Elevation band raster overlay source.
pub const SOURCE_ELEVATION: &str = "elevation-bands";
/// DEM source feeding hillshade and terrain exaggeration.
pub const SOURCE_DEM: &str = "dem";

/// Country-level choropleth fill (flat expression, low zooms).
pub const LAYER_COUNTRY_RISK: &str = "country-risk";
/// State-level choropleth fill.
pub const LAYER_STATE_RISK: &str = "state-risk";
/// District-level choropleth fill.
pub const LAYER_DISTRICT_RISK: &str = "district-risk";
/// Elevation-band fill used as an auxiliary cue in Risk mode.
pub const LAYER_ELEVATION_MASK: &str = "elevation-mask";
/// Elevation band overlay shown in Elevation mode.
pub const LAYER_ELEVATION: &str = "elevation";
/// Shaded relief derived from the DEM.
pub const LAYER_HILLSHADE: &str = "hillshade";
/// Admin boundary outlines, always visible.
pub const LAYER_BOUNDARY_LINES: &str = "admin-boundary-lines";
/// Dimming mask excluding the selected country, driven by the camera
/// choreographer.
pub const LAYER_COUNTRY_MASK: &str = "country-mask";
