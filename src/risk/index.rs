//! The per-level risk lookup tables and the fallback resolver.

use std::collections::BTreeMap;

use crate::color::{Color, ColorPolicy, RiskLevel};

/// Classified risk levels keyed by GID code, one map per admin level.
///
/// Built once per data load by [`build_index`](super::build_index) and
/// immutable afterwards; a reload supersedes the whole index. Ordered
/// maps keep iteration deterministic, so style compilation over the
/// index is idempotent regardless of input record order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionRiskIndex {
    country: BTreeMap<String, RiskLevel>,
    state: BTreeMap<String, RiskLevel>,
    district: BTreeMap<String, RiskLevel>,
}

impl RegionRiskIndex {
    pub(super) fn new(
        country: BTreeMap<String, RiskLevel>,
        state: BTreeMap<String, RiskLevel>,
        district: BTreeMap<String, RiskLevel>,
    ) -> Self {
        Self {
            country,
            state,
            district,
        }
    }

    /// Country-level entries in key order.
    pub fn country_entries(&self) -> impl Iterator<Item = (&str, RiskLevel)> {
        self.country.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// State-level entries in key order.
    pub fn state_entries(&self) -> impl Iterator<Item = (&str, RiskLevel)> {
        self.state.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// District-level entries in key order.
    pub fn district_entries(&self) -> impl Iterator<Item = (&str, RiskLevel)> {
        self.district.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Number of entries across all three levels.
    pub fn len(&self) -> usize {
        self.country.len() + self.state.len() + self.district.len()
    }

    /// Whether no level has any entry.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolve the effective risk level for a region.
    ///
    /// Checks the district map first, then state, then country; the first
    /// level with a matching entry wins. Returns `None` when no level
    /// matches. Pure over the immutable maps: the same inputs always
    /// resolve the same way.
    pub fn resolve_level(
        &self,
        district: Option<&str>,
        state: Option<&str>,
        country: Option<&str>,
    ) -> Option<RiskLevel> {
        if let Some(level) = district.and_then(|code| self.district.get(code)) {
            return Some(*level);
        }
        if let Some(level) = state.and_then(|code| self.state.get(code)) {
            return Some(*level);
        }
        country.and_then(|code| self.country.get(code)).copied()
    }

    /// Resolve the effective color for a region.
    ///
    /// Same precedence as [`resolve_level`](Self::resolve_level); regions
    /// with no entry at any level get the policy's unresolved color.
    pub fn resolve_color(
        &self,
        policy: &ColorPolicy,
        district: Option<&str>,
        state: Option<&str>,
        country: Option<&str>,
    ) -> Color {
        match self.resolve_level(district, state, country) {
            Some(level) => policy.color_of(level),
            None => policy.unresolved(),
        }
    }
}
