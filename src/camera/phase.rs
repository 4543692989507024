//! Camera sequence phases.

use std::fmt;

/// The phase of the active camera sequence.
///
/// Country selection walks `Idle → ZoomingOut → Flying →
/// AwaitingGeometry → FittingBounds → Idle` (the fit is skipped when no
/// boundary geometry is loaded). Selecting "all regions" runs `Idle →
/// Resetting → Idle` and may preempt any phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraPhase {
    /// No sequence in flight.
    #[default]
    Idle,
    /// Easing out to the world zoom before the fly.
    ZoomingOut,
    /// Flying to the selected country's center.
    Flying,
    /// Looking up loaded boundary geometry for the target country.
    AwaitingGeometry,
    /// Fitting the camera to the boundary bounding box.
    FittingBounds,
    /// Returning to the fixed world overview.
    Resetting,
}

impl fmt::Display for CameraPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CameraPhase::Idle => "idle",
            CameraPhase::ZoomingOut => "zooming-out",
            CameraPhase::Flying => "flying",
            CameraPhase::AwaitingGeometry => "awaiting-geometry",
            CameraPhase::FittingBounds => "fitting-bounds",
            CameraPhase::Resetting => "resetting",
        };
        write!(f, "{name}")
    }
}
