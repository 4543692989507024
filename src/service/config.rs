//! Service configuration.

use crate::camera::CameraConfig;
use crate::color::ColorPolicy;
use crate::overlay::OverlayConfig;
use crate::style::CompileOptions;

/// Configuration for the overlay service.
///
/// Groups the per-component configs; the defaults reproduce the
/// production overlay (standard palette, nominal animation timings,
/// production tileset URLs).
#[derive(Debug, Clone, Default)]
pub struct ServiceConfig {
    /// Tile sources and layer parameters.
    pub overlay: OverlayConfig,
    /// Camera sequence timings and targets.
    pub camera: CameraConfig,
    /// Style compilation options.
    pub compile: CompileOptions,
    /// The level-to-color policy.
    pub colors: ColorPolicy,
}

impl ServiceConfig {
    /// Replace the color policy.
    pub fn with_colors(mut self, colors: ColorPolicy) -> Self {
        self.colors = colors;
        self
    }

    /// Replace the camera configuration.
    pub fn with_camera(mut self, camera: CameraConfig) -> Self {
        self.camera = camera;
        self
    }
}
