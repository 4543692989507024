//! Camera choreography for country selection.
//!
//! Selecting a country drives a multi-phase sequence: zoom out to the
//! world view, fly to the country's geocoded center, query the loaded
//! boundary geometry, and fit the camera to its bounding box. Each
//! phase boundary waits out the animation's nominal duration and checks
//! a per-sequence [`CancellationToken`], so a new selection mid-flight
//! supersedes the old sequence instead of interleaving with it.
//!
//! [`CancellationToken`]: tokio_util::sync::CancellationToken

mod choreographer;
mod config;
mod phase;

pub use choreographer::{CameraChoreographer, ConfigurationError};
pub use config::CameraConfig;
pub use phase::CameraPhase;
