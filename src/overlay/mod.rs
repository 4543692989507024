//! Overlay sources and layers: ids, configuration, and installation.
//!
//! The install step feeds the compiled style expressions plus the fixed
//! layer inventory (risk fills per admin level, elevation overlay,
//! hillshade, boundary lines, and the country-highlight mask) into a
//! [`MapControl`]. Callers must not invoke it before the renderer's
//! style-ready signal has fired; the [`service`](crate::service) facade
//! handles that gating.

mod ids;
mod install;

pub use ids::*;
pub use install::{install_overlay, OverlayConfig};
