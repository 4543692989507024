//! Risk record ingestion and hierarchical resolution.
//!
//! Raw records arrive as a flat list in which each entry targets exactly
//! one administrative level through its GID code (`gid0` country, `gid1`
//! state/province, `gid2` district). The [`ingest`] step classifies them
//! into the three per-level maps of a [`RegionRiskIndex`], which then
//! answers color queries with the district > state > country fallback
//! precedence.

mod index;
mod ingest;
mod record;

pub use index::RegionRiskIndex;
pub use ingest::{build_index, IngestStats};
pub use record::{parse_records, RawRiskRecord};
