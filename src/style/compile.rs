//! Compilation of a risk index into per-layer expression trees.

use tracing::debug;

use crate::color::{Color, ColorPolicy, RiskLevel};
use crate::risk::RegionRiskIndex;

use super::expr::{Predicate, StyleExpr};

/// Feature property carrying the country GID code (admin0).
pub const FIELD_COUNTRY: &str = "GID_0";
/// Feature property carrying the state/province GID code (admin1).
pub const FIELD_STATE: &str = "GID_1";
/// Feature property carrying the district GID code (admin2).
pub const FIELD_DISTRICT: &str = "GID_2";

/// Compilation options.
#[derive(Debug, Clone, Default)]
pub struct CompileOptions {
    /// Fallback color for countries with no entry on the flat country
    /// layer. Defaults to the policy's unresolved color; the historical
    /// behavior of using the level-1 color is available by setting this
    /// explicitly, but conflates "no data" with "no known risk".
    pub country_fallback: Option<Color>,
}

/// The compiled expression trees, one per rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledStyle {
    /// District-layer expression: district > state > country > unresolved.
    pub district: StyleExpr,
    /// State-layer expression: state > country > unresolved.
    pub state: StyleExpr,
    /// Flat country-layer expression with a configurable fallback.
    pub country: StyleExpr,
}

/// Compile the index into per-layer expression trees.
///
/// Each guarded level follows the pattern of the resolver: if the
/// feature's code at this level has an entry, match on it; otherwise
/// fall through to the next level down, terminating in the unresolved
/// color. The index's ordered maps make the output identical for any
/// input record order.
pub fn compile(index: &RegionRiskIndex, policy: &ColorPolicy, options: &CompileOptions) -> CompiledStyle {
    let unresolved = StyleExpr::Literal(policy.unresolved());

    let country_level: Vec<(String, Color)> = branches(index.country_entries(), policy);
    let state_level: Vec<(String, Color)> = branches(index.state_entries(), policy);
    let district_level: Vec<(String, Color)> = branches(index.district_entries(), policy);

    let state = guarded_level(
        FIELD_STATE,
        &state_level,
        guarded_level(FIELD_COUNTRY, &country_level, unresolved.clone()),
    );
    let district = guarded_level(FIELD_DISTRICT, &district_level, state.clone());

    let country_fallback = options.country_fallback.unwrap_or_else(|| policy.unresolved());
    let country = flat_level(
        FIELD_COUNTRY,
        &country_level,
        StyleExpr::Literal(country_fallback),
    );

    debug!(
        country_branches = country_level.len(),
        state_branches = state_level.len(),
        district_branches = district_level.len(),
        "Compiled style expressions"
    );

    CompiledStyle {
        district,
        state,
        country,
    }
}

fn branches<'a>(
    entries: impl Iterator<Item = (&'a str, RiskLevel)>,
    policy: &ColorPolicy,
) -> Vec<(String, Color)> {
    entries
        .map(|(code, level)| (code.to_string(), policy.color_of(level)))
        .collect()
}

/// One guarded level of the precedence chain.
///
/// A level with no entries contributes nothing and collapses to the
/// fallthrough expression.
fn guarded_level(field: &str, level: &[(String, Color)], fallthrough: StyleExpr) -> StyleExpr {
    if level.is_empty() {
        return fallthrough;
    }
    let values: Vec<String> = level.iter().map(|(code, _)| code.clone()).collect();
    StyleExpr::ConditionalMatch {
        predicate: Predicate::FieldIn {
            field: field.to_string(),
            values,
        },
        then_expr: Box::new(StyleExpr::FieldMatch {
            field: field.to_string(),
            branches: level.to_vec(),
            fallback: Box::new(fallthrough.clone()),
        }),
        else_expr: Box::new(fallthrough),
    }
}

fn flat_level(field: &str, level: &[(String, Color)], fallback: StyleExpr) -> StyleExpr {
    if level.is_empty() {
        return fallback;
    }
    StyleExpr::FieldMatch {
        field: field.to_string(),
        branches: level.to_vec(),
        fallback: Box::new(fallback),
    }
}
