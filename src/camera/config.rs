//! Camera choreography configuration.

use std::time::Duration;

use crate::geo::LngLat;

/// Tunable parameters for the selection sequence.
///
/// The durations are nominal animation lengths; phase transitions wait
/// them out rather than listening for renderer completion events.
#[derive(Debug, Clone)]
pub struct CameraConfig {
    /// Zoom level of the initial ease-out.
    pub zoom_out_level: f64,
    /// Nominal duration of the ease-out.
    pub zoom_out_duration: Duration,
    /// Target zoom of the fly phase.
    pub fly_zoom: f64,
    /// Nominal duration of the fly.
    pub fly_duration: Duration,
    /// Screen padding around the bounds fit, in pixels.
    pub fit_padding: f64,
    /// Nominal duration of the bounds fit.
    pub fit_duration: Duration,
    /// World overview center used by the reset sequence.
    pub world_center: LngLat,
    /// World overview zoom used by the reset sequence.
    pub world_zoom: f64,
    /// Nominal duration of the reset animation.
    pub reset_duration: Duration,
    /// Sub-layer of the admin source holding country boundaries.
    pub boundary_source_layer: String,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            zoom_out_level: 0.0,
            zoom_out_duration: Duration::from_millis(1000),
            fly_zoom: 4.5,
            fly_duration: Duration::from_millis(2000),
            fit_padding: 40.0,
            fit_duration: Duration::from_millis(1200),
            world_center: LngLat::new(0.0, 20.0),
            world_zoom: 2.0,
            reset_duration: Duration::from_millis(1500),
            boundary_source_layer: "ADM0".to_string(),
        }
    }
}
