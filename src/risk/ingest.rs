//! Classification of raw records into the per-level maps.

use std::collections::BTreeMap;

use tracing::debug;

use crate::color::RiskLevel;

use super::index::RegionRiskIndex;
use super::record::RawRiskRecord;

/// Diagnostic counters from one ingest pass.
///
/// Dropped records are expected outcomes, not errors; the counters exist
/// so callers and tests can observe them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    /// Total records examined.
    pub total: usize,
    /// Records with no GID code at any level.
    pub dropped_no_code: usize,
    /// Country-level records excluded for carrying an elevation band.
    pub dropped_elevated_country: usize,
}

impl IngestStats {
    /// Records that made it into the index.
    pub fn classified(&self) -> usize {
        self.total - self.dropped_no_code - self.dropped_elevated_country
    }
}

/// Classify raw records into a [`RegionRiskIndex`].
///
/// Each record lands in exactly one level map, chosen by precedence:
/// district (`gid2`), then state (`gid1`), then country (`gid0`). A
/// country-level record carrying an elevation band is an
/// elevation-qualified observation, not a country-wide assertion, and is
/// excluded from the country map. Records with no code are dropped.
///
/// Duplicate keys within one level are last-write-wins; the source data
/// is assumed unique per key, so a conflict silently keeps the later
/// record.
pub fn build_index(records: &[RawRiskRecord]) -> (RegionRiskIndex, IngestStats) {
    let mut country: BTreeMap<String, RiskLevel> = BTreeMap::new();
    let mut state: BTreeMap<String, RiskLevel> = BTreeMap::new();
    let mut district: BTreeMap<String, RiskLevel> = BTreeMap::new();
    let mut stats = IngestStats::default();

    for record in records {
        stats.total += 1;
        if let Some(code) = &record.gid2 {
            district.insert(code.clone(), record.risk_level);
        } else if let Some(code) = &record.gid1 {
            state.insert(code.clone(), record.risk_level);
        } else if let Some(code) = &record.gid0 {
            if record.is_elevated() {
                stats.dropped_elevated_country += 1;
            } else {
                country.insert(code.clone(), record.risk_level);
            }
        } else {
            stats.dropped_no_code += 1;
        }
    }

    debug!(
        total = stats.total,
        country = country.len(),
        state = state.len(),
        district = district.len(),
        dropped_no_code = stats.dropped_no_code,
        dropped_elevated_country = stats.dropped_elevated_country,
        "Classified risk records"
    );

    (RegionRiskIndex::new(country, state, district), stats)
}
