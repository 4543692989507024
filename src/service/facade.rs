//! The `OverlayService` facade.

use std::future::Future;
use std::sync::{Arc, Mutex};

use tokio::sync::oneshot;
use tracing::info;

use crate::camera::{CameraChoreographer, ConfigurationError};
use crate::color::{Color, LegendEntry};
use crate::loader::{load_overlay_data, LoadError, OverlayData};
use crate::map::MapControl;
use crate::overlay::install_overlay;
use crate::risk::IngestStats;
use crate::style::{compile, CompiledStyle};
use crate::visibility::{DisplayMode, VisibilityCoordinator};

use super::config::ServiceConfig;

/// The assembled overlay: data, compiled style, and the two
/// user-driven controllers.
///
/// Constructed by [`OverlayService::start`], which enforces the single
/// cross-component barrier: nothing is installed into the rendering
/// layer until both the data load and the renderer's style-ready
/// signal have completed, whichever finishes last.
pub struct OverlayService {
    map: Arc<dyn MapControl>,
    config: ServiceConfig,
    data: OverlayData,
    style: CompiledStyle,
    camera: CameraChoreographer,
    visibility: Mutex<VisibilityCoordinator>,
}

impl OverlayService {
    /// Load, compile, and install the overlay, then return the running
    /// service.
    ///
    /// `records` and `geocode` are the in-flight fetches of the two raw
    /// sources; they run concurrently with each other and with the
    /// renderer's `style_ready` signal. A failure of either fetch, or
    /// the renderer dropping the signal, is fatal for the overlay: the
    /// base cartography may still render but no risk or elevation
    /// layers are installed.
    pub async fn start<R, G>(
        map: Arc<dyn MapControl>,
        style_ready: oneshot::Receiver<()>,
        records: R,
        geocode: G,
        config: ServiceConfig,
    ) -> Result<Self, LoadError>
    where
        R: Future<Output = Result<String, LoadError>>,
        G: Future<Output = Result<String, LoadError>>,
    {
        let load = load_overlay_data(records, geocode);
        let ready = async { style_ready.await.map_err(|_| LoadError::StyleReadyClosed) };
        let (data, ()) = tokio::try_join!(load, ready)?;

        let style = compile(&data.index, &config.colors, &config.compile);
        install_overlay(map.as_ref(), &style, &config.overlay);

        let camera = CameraChoreographer::new(
            Arc::clone(&map),
            Arc::new(data.geocode.clone()),
            config.camera.clone(),
        );
        let visibility = Mutex::new(VisibilityCoordinator::new(
            Arc::clone(&map),
            config.overlay.terrain_exaggeration,
        ));

        info!(entries = data.index.len(), "Overlay service started");

        Ok(Self {
            map,
            config,
            data,
            style,
            camera,
            visibility,
        })
    }

    /// The camera choreographer, for country selection events.
    pub fn camera(&self) -> &CameraChoreographer {
        &self.camera
    }

    /// Handle a country selection event.
    pub fn select_country(&self, name: &str) -> Result<(), ConfigurationError> {
        self.camera.select_country(name)
    }

    /// Handle the "all regions" selection event.
    pub fn select_all_regions(&self) {
        self.camera.select_all_regions()
    }

    /// Handle a display-mode toggle event.
    pub fn set_mode(&self, mode: DisplayMode) {
        if let Ok(mut visibility) = self.visibility.lock() {
            visibility.set_mode(mode);
        }
    }

    /// The current display mode.
    pub fn mode(&self) -> DisplayMode {
        self.visibility
            .lock()
            .map(|v| v.mode())
            .unwrap_or_default()
    }

    /// Handle a terrain toggle event.
    pub fn set_terrain(&self, enabled: bool) {
        if let Ok(mut visibility) = self.visibility.lock() {
            visibility.set_terrain(enabled);
        }
    }

    /// Resolve the effective risk color for a region, with the same
    /// precedence the compiled layers use.
    pub fn resolve_color(
        &self,
        district: Option<&str>,
        state: Option<&str>,
        country: Option<&str>,
    ) -> Color {
        self.data
            .index
            .resolve_color(&self.config.colors, district, state, country)
    }

    /// The static legend for the UI layer.
    pub fn legend(&self) -> Vec<LegendEntry> {
        self.config.colors.legend()
    }

    /// Ingest diagnostics for the loaded record set.
    pub fn ingest_stats(&self) -> IngestStats {
        self.data.stats
    }

    /// The compiled style expressions, for diagnostics.
    pub fn compiled_style(&self) -> &CompiledStyle {
        &self.style
    }

    /// The rendering-layer handle this service drives.
    pub fn map(&self) -> &Arc<dyn MapControl> {
        &self.map
    }
}
