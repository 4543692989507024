//! The `MapControl` trait.

use super::types::{
    BoundaryFeature, EaseTo, FeatureFilter, FitBounds, FlyTo, LayerSpec, SourceSpec,
};

/// Handle to the external rendering layer.
///
/// An owned capability passed into every component that touches the
/// renderer; there is no module-level global map instance. All mutation
/// calls are issued from the single control thread, so implementations
/// only need interior mutability, not queuing. Camera methods start an
/// animation and return immediately; phase timing is the caller's
/// concern (see [`camera`](crate::camera)).
pub trait MapControl: Send + Sync {
    /// Register a named data source.
    fn add_source(&self, source: SourceSpec);

    /// Register a named paint layer.
    fn add_layer(&self, layer: LayerSpec);

    /// Show or hide a layer.
    fn set_layer_visible(&self, layer_id: &str, visible: bool);

    /// Set a layer's feature filter.
    fn set_filter(&self, layer_id: &str, filter: FeatureFilter);

    /// Query already-loaded features of a source matching a filter.
    ///
    /// Only features in currently loaded tiles are returned; an empty
    /// result does not mean the region has no geometry.
    fn query_features(
        &self,
        source_id: &str,
        source_layer: Option<&str>,
        filter: &FeatureFilter,
    ) -> Vec<BoundaryFeature>;

    /// Start an eased zoom at the current center.
    fn ease_to(&self, motion: EaseTo);

    /// Start a fly animation to a new center and zoom.
    fn fly_to(&self, motion: FlyTo);

    /// Start a fit-to-bounds animation.
    fn fit_bounds(&self, fit: FitBounds);

    /// Enable or disable elevation-exaggerated terrain on the base
    /// surface.
    fn set_terrain_enabled(&self, enabled: bool, exaggeration: f64);
}
