//! Style expression compilation.
//!
//! Turns a [`RegionRiskIndex`](crate::risk::RegionRiskIndex) into
//! renderer-agnostic conditional expression trees that reproduce the
//! resolver's district > state > country precedence when evaluated by
//! the rendering layer against a feature's own GID properties. A
//! separate emission step ([`mapbox`]) translates the tree into the
//! concrete renderer's expression grammar.

mod compile;
mod expr;
pub mod mapbox;

pub use compile::{
    compile, CompileOptions, CompiledStyle, FIELD_COUNTRY, FIELD_DISTRICT, FIELD_STATE,
};
pub use expr::{Predicate, StyleExpr};
