//! Concurrent loading of the risk-record and geocode sources.
//!
//! The two fetches are independent and run concurrently, but the
//! ingest/compile pipeline must not start until both have completed; a
//! failure in either aborts the whole load with no partial mapping
//! state exposed. Fetch mechanics live with the caller; this module
//! takes the fetch futures and owns the join and parse steps.

use std::future::Future;

use thiserror::Error;
use tracing::info;

use crate::geocode::{GeocodeError, GeocodeTable};
use crate::risk::{build_index, parse_records, IngestStats, RegionRiskIndex};

/// A fatal failure of the compilation pipeline's data load.
///
/// The base cartography may still render after one of these; no risk or
/// elevation layers get installed (documented degraded mode).
#[derive(Debug, Error)]
pub enum LoadError {
    /// A source fetch failed.
    #[error("Failed to fetch {source_name}: {reason}")]
    Fetch {
        source_name: &'static str,
        reason: String,
    },

    /// The risk record source could not be parsed.
    #[error("Failed to parse risk records: {0}")]
    ParseRecords(#[from] serde_json::Error),

    /// The geocode source could not be parsed or validated.
    #[error(transparent)]
    Geocode(#[from] GeocodeError),

    /// The rendering layer went away before signaling style readiness.
    #[error("Rendering layer closed before signaling style readiness")]
    StyleReadyClosed,
}

impl LoadError {
    /// Convenience constructor for fetch failures.
    pub fn fetch(source: &'static str, reason: impl Into<String>) -> Self {
        Self::Fetch {
            source_name: source,
            reason: reason.into(),
        }
    }
}

/// Everything the compilation pipeline needs, loaded and classified.
#[derive(Debug, Clone)]
pub struct OverlayData {
    /// The classified per-level risk maps.
    pub index: RegionRiskIndex,
    /// Ingest diagnostics for the loaded record set.
    pub stats: IngestStats,
    /// The country geocode table.
    pub geocode: GeocodeTable,
}

/// Fetch both sources concurrently, then classify and validate.
///
/// `records` and `geocode` are the in-flight fetches of the raw JSON
/// bodies. Runs once per process; reloads supersede the returned data
/// wholesale.
pub async fn load_overlay_data<R, G>(records: R, geocode: G) -> Result<OverlayData, LoadError>
where
    R: Future<Output = Result<String, LoadError>>,
    G: Future<Output = Result<String, LoadError>>,
{
    let (records_json, geocode_json) = tokio::try_join!(records, geocode)?;

    let raw_records = parse_records(&records_json)?;
    let (index, stats) = build_index(&raw_records);
    let geocode = GeocodeTable::parse(&geocode_json)?;

    info!(
        records = stats.total,
        classified = stats.classified(),
        countries = geocode.len(),
        "Overlay data loaded"
    );

    Ok(OverlayData {
        index,
        stats,
        geocode,
    })
}
