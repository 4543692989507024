//! Raw risk record wire format.

use serde::Deserialize;

use crate::color::RiskLevel;

/// One record from the risk data source, as fetched.
///
/// Exactly one of `gid0`/`gid1`/`gid2` is expected to be set; a record
/// with none of them is invalid and gets dropped during ingest. The
/// optional elevation band marks the record as an elevation-qualified
/// observation rather than a region-wide assertion.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRiskRecord {
    /// Country-level GID code (admin0), e.g. `"KEN"`.
    #[serde(default)]
    pub gid0: Option<String>,
    /// State/province-level GID code (admin1).
    #[serde(default)]
    pub gid1: Option<String>,
    /// District-level GID code (admin2).
    #[serde(default)]
    pub gid2: Option<String>,
    /// Risk level, 1 (no known risk) through 4 (high).
    pub risk_level: RiskLevel,
    /// Lower bound of the elevation band in meters, if any.
    #[serde(default)]
    pub start_elevation_meters: Option<f64>,
    /// Upper bound of the elevation band in meters, if any.
    #[serde(default)]
    pub end_elevation_meters: Option<f64>,
}

impl RawRiskRecord {
    /// Whether this record carries an elevation qualification.
    pub fn is_elevated(&self) -> bool {
        self.start_elevation_meters.is_some() || self.end_elevation_meters.is_some()
    }
}

/// Parse a JSON array of raw records.
pub fn parse_records(json: &str) -> Result<Vec<RawRiskRecord>, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_record() {
        let records = parse_records(r#"[{"gid0": "EGY", "risk_level": 2}]"#).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].gid0.as_deref(), Some("EGY"));
        assert_eq!(records[0].risk_level, RiskLevel::Low);
        assert!(!records[0].is_elevated());
    }

    #[test]
    fn test_parse_elevated_record() {
        let records = parse_records(
            r#"[{"gid0": "KEN", "risk_level": 3, "start_elevation_meters": 500}]"#,
        )
        .unwrap();
        assert!(records[0].is_elevated());

        let records =
            parse_records(r#"[{"gid0": "KEN", "risk_level": 3, "end_elevation_meters": 2000}]"#)
                .unwrap();
        assert!(records[0].is_elevated());
    }

    #[test]
    fn test_parse_rejects_bad_risk_level() {
        assert!(parse_records(r#"[{"gid0": "EGY", "risk_level": 7}]"#).is_err());
    }

    #[test]
    fn test_parse_record_with_no_codes() {
        // Structurally valid; classification drops it later.
        let records = parse_records(r#"[{"risk_level": 1}]"#).unwrap();
        assert!(records[0].gid0.is_none());
        assert!(records[0].gid1.is_none());
        assert!(records[0].gid2.is_none());
    }
}
