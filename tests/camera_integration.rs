//! Integration tests for camera choreography through the service
//! facade, including:
//! - The full selection phase sequence with a bounds fit
//! - Supersession of an in-flight sequence by a new selection
//! - The "all regions" reset, including mid-flight

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::{broadcast, oneshot};
use tokio::time::sleep;

use risklayer::camera::CameraPhase;
use risklayer::geo::LngLat;
use risklayer::map::{
    BoundaryFeature, EaseTo, FeatureFilter, FitBounds, FlyTo, LayerSpec, MapControl, SourceSpec,
};
use risklayer::overlay::LAYER_COUNTRY_MASK;
use risklayer::service::{OverlayService, ServiceConfig};

// =============================================================================
// Test Helpers
// =============================================================================

/// A mock rendering layer with preloaded boundary features.
#[derive(Default)]
struct MockMap {
    features: Vec<BoundaryFeature>,
    eases: Mutex<Vec<EaseTo>>,
    flies: Mutex<Vec<FlyTo>>,
    fits: Mutex<Vec<FitBounds>>,
    visibility: Mutex<Vec<(String, bool)>>,
    filters: Mutex<Vec<(String, FeatureFilter)>>,
}

impl MockMap {
    fn with_features(features: Vec<BoundaryFeature>) -> Self {
        Self {
            features,
            ..Default::default()
        }
    }
}

impl MapControl for MockMap {
    fn add_source(&self, _source: SourceSpec) {}
    fn add_layer(&self, _layer: LayerSpec) {}

    fn set_layer_visible(&self, layer_id: &str, visible: bool) {
        self.visibility
            .lock()
            .unwrap()
            .push((layer_id.to_string(), visible));
    }

    fn set_filter(&self, layer_id: &str, filter: FeatureFilter) {
        self.filters
            .lock()
            .unwrap()
            .push((layer_id.to_string(), filter));
    }

    fn query_features(
        &self,
        _source_id: &str,
        _source_layer: Option<&str>,
        filter: &FeatureFilter,
    ) -> Vec<BoundaryFeature> {
        self.features
            .iter()
            .filter(|f| match filter {
                FeatureFilter::All => true,
                FeatureFilter::IsoIs(iso) => f.iso_code == *iso,
                FeatureFilter::IsoIsNot(iso) => f.iso_code != *iso,
            })
            .cloned()
            .collect()
    }

    fn ease_to(&self, motion: EaseTo) {
        self.eases.lock().unwrap().push(motion);
    }

    fn fly_to(&self, motion: FlyTo) {
        self.flies.lock().unwrap().push(motion);
    }

    fn fit_bounds(&self, fit: FitBounds) {
        self.fits.lock().unwrap().push(fit);
    }

    fn set_terrain_enabled(&self, _enabled: bool, _exaggeration: f64) {}
}

const RECORDS: &str = r#"[{"gid0": "EGY", "risk_level": 2}]"#;

const GEOCODE: &str = r#"[
    {"name": "Egypt", "country": "EG", "latitude": 26.8, "longitude": 30.8},
    {"name": "Libya", "country": "LY", "latitude": 26.3, "longitude": 17.2}
]"#;

fn egypt_boundary() -> BoundaryFeature {
    BoundaryFeature {
        iso_code: "EG".to_string(),
        ring: vec![
            LngLat::new(25.0, 22.0),
            LngLat::new(36.9, 22.0),
            LngLat::new(36.9, 31.7),
            LngLat::new(25.0, 31.7),
        ],
    }
}

async fn started_service(map: Arc<MockMap>) -> OverlayService {
    let (ready_tx, ready_rx) = oneshot::channel();
    ready_tx.send(()).unwrap();
    OverlayService::start(
        map,
        ready_rx,
        async { Ok(RECORDS.to_string()) },
        async { Ok(GEOCODE.to_string()) },
        ServiceConfig::default(),
    )
    .await
    .expect("service should start")
}

fn drain(rx: &mut broadcast::Receiver<CameraPhase>) -> Vec<CameraPhase> {
    let mut phases = Vec::new();
    while let Ok(phase) = rx.try_recv() {
        phases.push(phase);
    }
    phases
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test(start_paused = true)]
async fn test_selection_sequence_with_bounds_fit() {
    let map = Arc::new(MockMap::with_features(vec![egypt_boundary()]));
    let service = started_service(map.clone()).await;
    let mut rx = service.camera().subscribe_phases();

    service.select_country("Egypt").unwrap();
    sleep(Duration::from_secs(10)).await;

    assert_eq!(
        drain(&mut rx),
        [
            CameraPhase::ZoomingOut,
            CameraPhase::Flying,
            CameraPhase::AwaitingGeometry,
            CameraPhase::FittingBounds,
            CameraPhase::Idle,
        ]
    );

    // The fly targets the geocoded center, the fit the feature bounds.
    let flies = map.flies.lock().unwrap();
    assert_eq!(flies.last().unwrap().center, LngLat::new(30.8, 26.8));
    let fits = map.fits.lock().unwrap();
    assert_eq!(fits.len(), 1);
    assert_eq!(fits[0].bounds.min_lng, 25.0);
    assert_eq!(fits[0].bounds.max_lng, 36.9);
}

#[tokio::test(start_paused = true)]
async fn test_reselection_cancels_pending_fit() {
    // Selecting Libya before Egypt's fly begins means no Egypt bounds
    // fit ever fires, even though Egypt's geometry is loaded.
    let map = Arc::new(MockMap::with_features(vec![egypt_boundary()]));
    let service = started_service(map.clone()).await;

    service.select_country("Egypt").unwrap();
    sleep(Duration::from_millis(300)).await;
    service.select_country("Libya").unwrap();
    sleep(Duration::from_secs(10)).await;

    assert!(map.fits.lock().unwrap().is_empty());
    let flies = map.flies.lock().unwrap();
    assert_eq!(flies.len(), 1);
    assert_eq!(flies[0].center, LngLat::new(17.2, 26.3));
    assert_eq!(
        service.camera().selected_country().as_deref(),
        Some("Libya")
    );
}

#[tokio::test(start_paused = true)]
async fn test_all_regions_resets_even_mid_flight() {
    let map = Arc::new(MockMap::with_features(vec![egypt_boundary()]));
    let service = started_service(map.clone()).await;

    service.select_country("Egypt").unwrap();
    sleep(Duration::from_millis(1500)).await; // in the fly phase
    service.select_all_regions();
    sleep(Duration::from_secs(10)).await;

    assert_eq!(service.camera().phase(), CameraPhase::Idle);
    assert!(service.camera().selected_country().is_none());
    assert!(map.fits.lock().unwrap().is_empty());

    let flies = map.flies.lock().unwrap();
    let reset = flies.last().unwrap();
    assert_eq!(reset.center, LngLat::new(0.0, 20.0));
    assert_eq!(reset.zoom, 2.0);

    let visibility = map.visibility.lock().unwrap();
    assert_eq!(
        visibility.last(),
        Some(&(LAYER_COUNTRY_MASK.to_string(), false))
    );
}

#[tokio::test(start_paused = true)]
async fn test_unknown_country_surfaces_error_without_motion() {
    let map = Arc::new(MockMap::default());
    let service = started_service(map.clone()).await;

    assert!(service.select_country("Atlantis").is_err());
    assert_eq!(service.camera().phase(), CameraPhase::Idle);
    assert!(map.eases.lock().unwrap().is_empty());
    assert!(map.flies.lock().unwrap().is_empty());
}
