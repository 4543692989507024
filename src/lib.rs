//! RiskLayer - Choropleth disease-risk overlay core
//!
//! This library provides the data and control core for an interactive
//! disease-risk map: it classifies raw risk records into a three-level
//! administrative hierarchy, resolves region colors with a deterministic
//! fallback precedence, compiles that resolution into renderer-agnostic
//! style expressions, and choreographs the multi-phase camera sequence
//! used by the "jump to country" navigation feature.
//!
//! The tile renderer itself is an external collaborator reached through
//! the [`map::MapControl`] trait; this crate only produces the data it
//! must be fed and drives it through that contract.
//!
//! # High-Level API
//!
//! For most use cases, the [`service`] module provides a simplified facade:
//!
//! ```ignore
//! use risklayer::service::{OverlayService, ServiceConfig};
//!
//! let service = OverlayService::start(
//!     map_handle,
//!     style_ready,
//!     fetch_risk_records(),
//!     fetch_geocode_table(),
//!     ServiceConfig::default(),
//! )
//! .await?;
//!
//! service.camera().select_country("Egypt")?;
//! ```

pub mod camera;
pub mod color;
pub mod geo;
pub mod geocode;
pub mod loader;
pub mod logging;
pub mod map;
pub mod overlay;
pub mod risk;
pub mod service;
pub mod style;
pub mod visibility;

/// Version of the RiskLayer library.
///
/// Defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
