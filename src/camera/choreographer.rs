//! The camera choreographer.

use std::sync::{Arc, Mutex, RwLock};

use thiserror::Error;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::geocode::{CountryGeocodeEntry, GeocodeTable};
use crate::map::{BoundaryFeature, EaseTo, FeatureFilter, FitBounds, FlyTo, MapControl};
use crate::overlay::{LAYER_COUNTRY_MASK, SOURCE_ADMIN};

use super::config::CameraConfig;
use super::phase::CameraPhase;

/// A selection referencing configuration that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// The selected display name has no geocode entry. The sequence
    /// aborts before any camera motion.
    #[error("No geocode entry for country {0:?}")]
    UnknownCountry(String),
}

/// Per-sequence bookkeeping. At most one live sequence exists; a new
/// selection supersedes the old one wholesale.
struct SequenceState {
    token: CancellationToken,
    task: Option<JoinHandle<()>>,
    selected: Option<String>,
}

/// Drives the country-selection camera sequence.
///
/// Sequencing runs on spawned tokio tasks gated by nominal animation
/// durations. Every phase boundary checks the sequence's cancellation
/// token, so superseding selections never interleave camera motions.
pub struct CameraChoreographer {
    map: Arc<dyn MapControl>,
    geocode: Arc<GeocodeTable>,
    config: CameraConfig,
    state: Mutex<SequenceState>,
    phase: Arc<RwLock<CameraPhase>>,
    phase_tx: broadcast::Sender<CameraPhase>,
}

impl CameraChoreographer {
    /// Create a choreographer in the idle state.
    pub fn new(map: Arc<dyn MapControl>, geocode: Arc<GeocodeTable>, config: CameraConfig) -> Self {
        let (phase_tx, _) = broadcast::channel(32);
        Self {
            map,
            geocode,
            config,
            state: Mutex::new(SequenceState {
                token: CancellationToken::new(),
                task: None,
                selected: None,
            }),
            phase: Arc::new(RwLock::new(CameraPhase::Idle)),
            phase_tx,
        }
    }

    /// The current sequence phase.
    pub fn phase(&self) -> CameraPhase {
        self.phase.read().map(|p| *p).unwrap_or_default()
    }

    /// The display name of the currently selected country, if any.
    pub fn selected_country(&self) -> Option<String> {
        self.state.lock().ok().and_then(|s| s.selected.clone())
    }

    /// Subscribe to phase transitions.
    pub fn subscribe_phases(&self) -> broadcast::Receiver<CameraPhase> {
        self.phase_tx.subscribe()
    }

    /// Start the selection sequence for a country display name.
    ///
    /// Looks up the name in the geocode table; an unknown name fails
    /// with [`ConfigurationError::UnknownCountry`] before any camera
    /// motion or supersession happens. On success the previous sequence
    /// (if any) is cancelled, the country-highlight mask is armed so it
    /// is ready before the camera settles, and the zoom-out begins.
    pub fn select_country(&self, name: &str) -> Result<(), ConfigurationError> {
        let entry = self
            .geocode
            .lookup(name)
            .ok_or_else(|| ConfigurationError::UnknownCountry(name.to_string()))?
            .clone();

        info!(country = name, iso = %entry.iso_code, "Country selected");

        let token = self.supersede(Some(name.to_string()));

        self.map.set_filter(
            LAYER_COUNTRY_MASK,
            FeatureFilter::IsoIsNot(entry.iso_code.clone()),
        );
        self.map.set_layer_visible(LAYER_COUNTRY_MASK, true);

        self.publish_phase(&token, CameraPhase::ZoomingOut);
        self.map.ease_to(EaseTo {
            zoom: self.config.zoom_out_level,
            duration: self.config.zoom_out_duration,
        });

        let task = tokio::spawn(run_selection(
            Arc::clone(&self.map),
            self.config.clone(),
            token.clone(),
            Arc::clone(&self.phase),
            self.phase_tx.clone(),
            entry,
        ));
        if let Ok(mut state) = self.state.lock() {
            state.task = Some(task);
        }
        Ok(())
    }

    /// Reset to the fixed world overview ("all regions" selection).
    ///
    /// Cancels any in-flight sequence, hides the country mask, clears
    /// the selected country, and animates back to the world view.
    pub fn select_all_regions(&self) {
        info!("All regions selected, resetting camera");

        let token = self.supersede(None);

        self.map.set_layer_visible(LAYER_COUNTRY_MASK, false);
        self.publish_phase(&token, CameraPhase::Resetting);
        self.map.fly_to(FlyTo {
            center: self.config.world_center,
            zoom: self.config.world_zoom,
            duration: self.config.reset_duration,
        });

        let duration = self.config.reset_duration;
        let phase = Arc::clone(&self.phase);
        let phase_tx = self.phase_tx.clone();
        let task_token = token.clone();
        let task = tokio::spawn(async move {
            tokio::select! {
                _ = task_token.cancelled() => return,
                _ = sleep(duration) => {}
            }
            set_phase(&phase, &phase_tx, &task_token, CameraPhase::Idle);
        });
        if let Ok(mut state) = self.state.lock() {
            state.task = Some(task);
        }
    }

    /// Cancel the live sequence and install a fresh token.
    fn supersede(&self, selected: Option<String>) -> CancellationToken {
        let token = CancellationToken::new();
        if let Ok(mut state) = self.state.lock() {
            state.token.cancel();
            state.token = token.clone();
            state.task = None;
            state.selected = selected;
        }
        token
    }

    fn publish_phase(&self, token: &CancellationToken, next: CameraPhase) {
        set_phase(&self.phase, &self.phase_tx, token, next);
    }
}

/// Update the current phase and broadcast the transition, unless the
/// sequence has been superseded.
fn set_phase(
    phase: &RwLock<CameraPhase>,
    phase_tx: &broadcast::Sender<CameraPhase>,
    token: &CancellationToken,
    next: CameraPhase,
) {
    if token.is_cancelled() {
        return;
    }
    if let Ok(mut current) = phase.write() {
        *current = next;
    }
    // No subscribers is fine.
    let _ = phase_tx.send(next);
}

/// The timed tail of the selection sequence, after the zoom-out was
/// issued on the control thread.
async fn run_selection(
    map: Arc<dyn MapControl>,
    config: CameraConfig,
    token: CancellationToken,
    phase: Arc<RwLock<CameraPhase>>,
    phase_tx: broadcast::Sender<CameraPhase>,
    entry: CountryGeocodeEntry,
) {
    tokio::select! {
        _ = token.cancelled() => return,
        _ = sleep(config.zoom_out_duration) => {}
    }

    set_phase(&phase, &phase_tx, &token, CameraPhase::Flying);
    map.fly_to(FlyTo {
        center: entry.center(),
        zoom: config.fly_zoom,
        duration: config.fly_duration,
    });

    tokio::select! {
        _ = token.cancelled() => return,
        _ = sleep(config.fly_duration) => {}
    }

    set_phase(&phase, &phase_tx, &token, CameraPhase::AwaitingGeometry);
    let features = map.query_features(
        SOURCE_ADMIN,
        Some(&config.boundary_source_layer),
        &FeatureFilter::IsoIs(entry.iso_code.clone()),
    );
    if token.is_cancelled() {
        return;
    }

    match features.iter().find_map(BoundaryFeature::bounds) {
        Some(bounds) => {
            set_phase(&phase, &phase_tx, &token, CameraPhase::FittingBounds);
            map.fit_bounds(FitBounds {
                bounds,
                padding: config.fit_padding,
                duration: config.fit_duration,
            });
        }
        None => {
            // Tiles not loaded yet, or the country is absent from this
            // tile set. A normal outcome; the camera stays flown-to.
            debug!(iso = %entry.iso_code, "No boundary geometry loaded, skipping bounds fit");
        }
    }

    set_phase(&phase, &phase_tx, &token, CameraPhase::Idle);
}
