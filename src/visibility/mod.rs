//! The layer visibility coordinator.
//!
//! Maintains the mutually exclusive display mode (Risk vs. Elevation)
//! and the independent terrain flag, and applies each transition to the
//! rendering layer. Boundary lines and the country-highlight mask are
//! outside its remit; those belong to the camera choreographer.

use std::sync::Arc;

use tracing::debug;

use crate::map::MapControl;
use crate::overlay::{
    LAYER_DISTRICT_RISK, LAYER_ELEVATION, LAYER_ELEVATION_MASK, LAYER_HILLSHADE, LAYER_STATE_RISK,
};

/// The active overlay display mode. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Choropleth risk fills plus the elevation-mask aux layer.
    #[default]
    Risk,
    /// Elevation band overlay only.
    Elevation,
}

/// Coordinates layer visibility for the display mode and terrain flag.
pub struct VisibilityCoordinator {
    map: Arc<dyn MapControl>,
    mode: DisplayMode,
    terrain_enabled: bool,
    terrain_exaggeration: f64,
}

impl VisibilityCoordinator {
    /// Create a coordinator in the default state (Risk mode, terrain off).
    ///
    /// Does not touch the map; the install step already applied the
    /// matching initial visibility.
    pub fn new(map: Arc<dyn MapControl>, terrain_exaggeration: f64) -> Self {
        Self {
            map,
            mode: DisplayMode::default(),
            terrain_enabled: false,
            terrain_exaggeration,
        }
    }

    /// The current display mode.
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Whether terrain exaggeration is on.
    pub fn terrain_enabled(&self) -> bool {
        self.terrain_enabled
    }

    /// Switch the display mode, forcing the other mode off.
    ///
    /// Selecting the already-active mode reapplies its layer set, which
    /// is harmless.
    pub fn set_mode(&mut self, mode: DisplayMode) {
        debug!(?mode, "Display mode selected");
        self.mode = mode;
        match mode {
            DisplayMode::Risk => {
                self.map.set_layer_visible(LAYER_DISTRICT_RISK, true);
                self.map.set_layer_visible(LAYER_STATE_RISK, true);
                self.map.set_layer_visible(LAYER_ELEVATION_MASK, true);
                self.map.set_layer_visible(LAYER_ELEVATION, false);
            }
            DisplayMode::Elevation => {
                self.map.set_layer_visible(LAYER_ELEVATION, true);
                self.map.set_layer_visible(LAYER_DISTRICT_RISK, false);
                self.map.set_layer_visible(LAYER_STATE_RISK, false);
                self.map.set_layer_visible(LAYER_ELEVATION_MASK, false);
            }
        }
    }

    /// Toggle the terrain flag. Independent of the display mode.
    pub fn set_terrain(&mut self, enabled: bool) {
        debug!(enabled, "Terrain toggled");
        self.terrain_enabled = enabled;
        self.map.set_layer_visible(LAYER_HILLSHADE, enabled);
        let exaggeration = if enabled { self.terrain_exaggeration } else { 0.0 };
        self.map.set_terrain_enabled(enabled, exaggeration);
    }
}
