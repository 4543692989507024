//! The rendering-layer contract.
//!
//! The tile renderer (vector/raster decoding, GPU painting, pan/zoom
//! mechanics) lives outside this crate. Everything the overlay core
//! needs from it goes through the [`MapControl`] trait: registering
//! sources and paint layers, toggling visibility, setting feature
//! filters, querying already-loaded features, and issuing camera
//! animations. Tests substitute recording mocks.

mod control;
mod types;

pub use control::MapControl;
pub use types::{
    BoundaryFeature, EaseTo, FeatureFilter, FitBounds, FlyTo, LayerKind, LayerSpec, SourceKind,
    SourceSpec,
};
