//! Types crossing the rendering-layer boundary.

use std::time::Duration;

use serde_json::Value;

use crate::geo::{GeoBounds, LngLat};

/// A named data source to register with the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceSpec {
    /// Source id, unique within the style.
    pub id: String,
    pub kind: SourceKind,
}

/// The kind of data a source serves.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceKind {
    /// Vector tiles (admin boundary geometry with GID properties).
    Vector { url: String },
    /// Raster tiles (the elevation band overlay imagery).
    Raster { url: String },
    /// Raster DEM tiles (hillshade and terrain exaggeration input).
    RasterDem { url: String },
}

/// A named paint layer to register with the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerSpec {
    /// Layer id, unique within the style.
    pub id: String,
    /// Id of the source this layer draws from.
    pub source: String,
    /// Sub-layer selector within a vector source, if any.
    pub source_layer: Option<String>,
    pub kind: LayerKind,
    /// Initial visibility.
    pub visible: bool,
    /// Minimum zoom at which the layer renders.
    pub min_zoom: Option<f64>,
    /// Maximum zoom at which the layer renders.
    pub max_zoom: Option<f64>,
}

/// Paint parameters per layer kind.
///
/// Color expressions are in the renderer's JSON grammar, produced by
/// [`style::mapbox::to_expression`](crate::style::mapbox::to_expression).
#[derive(Debug, Clone, PartialEq)]
pub enum LayerKind {
    /// Polygon fill with a color expression.
    Fill { color: Value, opacity: f64 },
    /// Boundary line with a constant color.
    Line { color: Value, width: f64 },
    /// Raster imagery.
    Raster { opacity: f64 },
    /// Shaded relief derived from a DEM source.
    Hillshade,
}

/// A feature filter on a layer or query, matched against the country
/// GID property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeatureFilter {
    /// Match every feature.
    All,
    /// Match features whose country code equals the given ISO code.
    IsoIs(String),
    /// Match features whose country code differs from the given ISO
    /// code. Used by the country-highlight mask to dim everything but
    /// the selected country.
    IsoIsNot(String),
}

/// A boundary feature returned from a feature query.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryFeature {
    /// Country GID code of the feature.
    pub iso_code: String,
    /// Outer ring vertices of the feature geometry.
    pub ring: Vec<LngLat>,
}

impl BoundaryFeature {
    /// Bounding box of the feature geometry, `None` for an empty ring.
    pub fn bounds(&self) -> Option<GeoBounds> {
        GeoBounds::enclosing(&self.ring)
    }
}

/// An eased zoom animation at the current center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EaseTo {
    pub zoom: f64,
    pub duration: Duration,
}

/// A fly animation to a new center and zoom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlyTo {
    pub center: LngLat,
    pub zoom: f64,
    pub duration: Duration,
}

/// A fit-to-bounds animation with screen padding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitBounds {
    pub bounds: GeoBounds,
    /// Padding around the bounds in pixels.
    pub padding: f64,
    pub duration: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_feature_bounds() {
        let feature = BoundaryFeature {
            iso_code: "EG".to_string(),
            ring: vec![
                LngLat::new(25.0, 22.0),
                LngLat::new(36.9, 22.0),
                LngLat::new(36.9, 31.7),
                LngLat::new(25.0, 31.7),
            ],
        };
        let bounds = feature.bounds().unwrap();
        assert_eq!(bounds.min_lng, 25.0);
        assert_eq!(bounds.max_lng, 36.9);
        assert_eq!(bounds.min_lat, 22.0);
        assert_eq!(bounds.max_lat, 31.7);
    }

    #[test]
    fn test_empty_ring_has_no_bounds() {
        let feature = BoundaryFeature {
            iso_code: "EG".to_string(),
            ring: vec![],
        };
        assert!(feature.bounds().is_none());
    }
}
