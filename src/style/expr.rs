//! The renderer-agnostic style expression AST.

use crate::color::Color;

/// A predicate evaluated by the renderer against a feature's properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// True when the feature's `field` property is one of `values`.
    FieldIn {
        /// Feature property name, e.g. `GID_2`.
        field: String,
        /// Candidate values, in sorted order.
        values: Vec<String>,
    },
}

/// A declarative color expression tree.
///
/// Built once per risk index and frozen; the compiled-layer consumer
/// owns it exclusively. Evaluation semantics: a `FieldMatch` compares
/// the feature's `field` property against each branch value and falls
/// back to the nested expression on no match; a `ConditionalMatch`
/// selects one of two subtrees by its predicate; a `Literal` is a
/// constant paint color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleExpr {
    /// Branch on a feature property value.
    FieldMatch {
        /// Feature property name.
        field: String,
        /// `(value, color)` pairs in sorted value order.
        branches: Vec<(String, Color)>,
        /// Expression to evaluate when no branch matches.
        fallback: Box<StyleExpr>,
    },
    /// Branch on a predicate.
    ConditionalMatch {
        predicate: Predicate,
        then_expr: Box<StyleExpr>,
        else_expr: Box<StyleExpr>,
    },
    /// A constant color.
    Literal(Color),
}

impl StyleExpr {
    /// Reference evaluation against a feature's GID properties.
    ///
    /// The renderer performs the real evaluation; this exists so the
    /// compiler's output can be checked against the resolver directly.
    pub fn evaluate(&self, get: &impl Fn(&str) -> Option<String>) -> Color {
        match self {
            StyleExpr::Literal(color) => *color,
            StyleExpr::FieldMatch {
                field,
                branches,
                fallback,
            } => match get(field) {
                Some(value) => branches
                    .iter()
                    .find(|(v, _)| *v == value)
                    .map(|(_, color)| *color)
                    .unwrap_or_else(|| fallback.evaluate(get)),
                None => fallback.evaluate(get),
            },
            StyleExpr::ConditionalMatch {
                predicate,
                then_expr,
                else_expr,
            } => {
                let Predicate::FieldIn { field, values } = predicate;
                let holds = get(field).is_some_and(|v| values.contains(&v));
                if holds {
                    then_expr.evaluate(get)
                } else {
                    else_expr.evaluate(get)
                }
            }
        }
    }
}
