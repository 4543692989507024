//! High-level overlay service facade.
//!
//! Wires the whole pipeline together: joins the data load with the
//! renderer's style-ready signal, classifies and compiles, installs the
//! overlay, and hands out the visibility coordinator and camera
//! choreographer for the UI layer to drive.

mod config;
mod facade;

pub use config::ServiceConfig;
pub use facade::OverlayService;
