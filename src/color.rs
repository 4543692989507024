//! Risk levels, colors, and the color policy.
//!
//! The [`ColorPolicy`] is the single authority for the level-to-color
//! mapping. It is total over the four risk levels and carries a distinct
//! "unresolved" color for regions with no matching record at any level,
//! so "no data" never renders as "no known risk".

use std::fmt;

use serde::{Deserialize, Serialize};

/// A disease-risk level attached to an administrative region.
///
/// Levels are ordered from no known risk (1) to high risk (4), matching
/// the `risk_level` field of the raw record source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum RiskLevel {
    /// Level 1 - no known risk.
    NoKnownRisk,
    /// Level 2 - low risk.
    Low,
    /// Level 3 - moderate risk.
    Moderate,
    /// Level 4 - high risk.
    High,
}

impl RiskLevel {
    /// All levels in ascending order.
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::NoKnownRisk,
        RiskLevel::Low,
        RiskLevel::Moderate,
        RiskLevel::High,
    ];

    /// Numeric value as used by the record source (1-4).
    pub fn as_u8(self) -> u8 {
        match self {
            RiskLevel::NoKnownRisk => 1,
            RiskLevel::Low => 2,
            RiskLevel::Moderate => 3,
            RiskLevel::High => 4,
        }
    }

    /// Human-readable label, as shown in the map legend.
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::NoKnownRisk => "No Known Risk",
            RiskLevel::Low => "Low Risk",
            RiskLevel::Moderate => "Moderate Risk",
            RiskLevel::High => "High Risk",
        }
    }
}

impl TryFrom<u8> for RiskLevel {
    type Error = InvalidRiskLevel;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(RiskLevel::NoKnownRisk),
            2 => Ok(RiskLevel::Low),
            3 => Ok(RiskLevel::Moderate),
            4 => Ok(RiskLevel::High),
            other => Err(InvalidRiskLevel(other)),
        }
    }
}

impl From<RiskLevel> for u8 {
    fn from(level: RiskLevel) -> u8 {
        level.as_u8()
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// Error for a `risk_level` value outside 1-4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("risk level must be 1-4, got {0}")]
pub struct InvalidRiskLevel(pub u8);

/// An opaque RGB paint color.
///
/// Stored as a packed `0xRRGGBB` value; displays as a `#rrggbb` hex
/// string, the form the renderer expression grammar expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(u32);

impl Color {
    /// Create a color from a packed `0xRRGGBB` value.
    pub const fn rgb(value: u32) -> Self {
        Self(value & 0x00ff_ffff)
    }

    /// The packed `0xRRGGBB` value.
    pub fn value(self) -> u32 {
        self.0
    }

    /// Hex string form, e.g. `#ffa500`.
    pub fn hex(self) -> String {
        format!("#{:06x}", self.0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

/// Total mapping from risk level to paint color, plus the unresolved color.
///
/// Static for the process lifetime; cloned freely into the compiler and
/// legend. The default palette is the production one: green, yellow,
/// orange, red, with gray for regions that match no record at any level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorPolicy {
    level_colors: [Color; 4],
    unresolved: Color,
}

impl Default for ColorPolicy {
    fn default() -> Self {
        Self {
            level_colors: [
                Color::rgb(0x00ff00), // 1 - no known risk
                Color::rgb(0xffff00), // 2 - low
                Color::rgb(0xffa500), // 3 - moderate
                Color::rgb(0xff0000), // 4 - high
            ],
            unresolved: Color::rgb(0xcccccc),
        }
    }
}

impl ColorPolicy {
    /// Create a policy with a custom palette.
    pub fn new(level_colors: [Color; 4], unresolved: Color) -> Self {
        Self {
            level_colors,
            unresolved,
        }
    }

    /// Color for a risk level. Total over all four levels.
    pub fn color_of(&self, level: RiskLevel) -> Color {
        self.level_colors[(level.as_u8() - 1) as usize]
    }

    /// Color for regions with no matching record at any level.
    pub fn unresolved(&self) -> Color {
        self.unresolved
    }

    /// Legend entries in display order: high risk down to no known risk,
    /// then the no-data entry.
    pub fn legend(&self) -> Vec<LegendEntry> {
        let mut entries: Vec<LegendEntry> = RiskLevel::ALL
            .iter()
            .rev()
            .map(|&level| LegendEntry {
                label: level.label().to_string(),
                color: self.color_of(level),
            })
            .collect();
        entries.push(LegendEntry {
            label: "No Data".to_string(),
            color: self.unresolved,
        });
        entries
    }
}

/// One row of the static map legend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendEntry {
    /// Display label, e.g. "Moderate Risk".
    pub label: String,
    /// Swatch color.
    pub color: Color,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_level_round_trip() {
        for value in 1..=4u8 {
            let level = RiskLevel::try_from(value).unwrap();
            assert_eq!(level.as_u8(), value);
        }
    }

    #[test]
    fn test_risk_level_rejects_out_of_range() {
        assert_eq!(RiskLevel::try_from(0), Err(InvalidRiskLevel(0)));
        assert_eq!(RiskLevel::try_from(5), Err(InvalidRiskLevel(5)));
    }

    #[test]
    fn test_color_hex_formatting() {
        assert_eq!(Color::rgb(0xffa500).hex(), "#ffa500");
        assert_eq!(Color::rgb(0x00ff00).to_string(), "#00ff00");
        assert_eq!(Color::rgb(0x000001).hex(), "#000001");
    }

    #[test]
    fn test_default_palette_order() {
        let policy = ColorPolicy::default();
        let hex: Vec<String> = RiskLevel::ALL
            .iter()
            .map(|&l| policy.color_of(l).hex())
            .collect();
        assert_eq!(hex, ["#00ff00", "#ffff00", "#ffa500", "#ff0000"]);
    }

    #[test]
    fn test_unresolved_distinct_from_level_one() {
        // "no data" must never render as "no known risk".
        let policy = ColorPolicy::default();
        assert_ne!(policy.unresolved(), policy.color_of(RiskLevel::NoKnownRisk));
    }

    #[test]
    fn test_legend_order_and_labels() {
        let policy = ColorPolicy::default();
        let legend = policy.legend();
        let labels: Vec<&str> = legend.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(
            labels,
            [
                "High Risk",
                "Moderate Risk",
                "Low Risk",
                "No Known Risk",
                "No Data"
            ]
        );
        assert_eq!(legend[0].color, Color::rgb(0xff0000));
        assert_eq!(legend[4].color, Color::rgb(0xcccccc));
    }
}
