//! Emission of the expression AST into the renderer's grammar.
//!
//! The target grammar is the JSON-array expression language of the
//! rendering layer: `["match", ["get", field], v1, c1, ..., fallback]`,
//! `["case", cond, then, else]`, and `["in", value, ["literal", [...]]]`.
//! Keeping this translation separate from compilation means the
//! precedence semantics never depend on any one renderer's syntax.

use serde_json::{json, Value};

use crate::style::{Predicate, StyleExpr};

/// Translate an expression tree into the renderer's JSON grammar.
pub fn to_expression(expr: &StyleExpr) -> Value {
    match expr {
        StyleExpr::Literal(color) => Value::String(color.hex()),
        StyleExpr::FieldMatch {
            field,
            branches,
            fallback,
        } => {
            let mut parts = vec![json!("match"), json!(["get", field])];
            for (value, color) in branches {
                parts.push(json!(value));
                parts.push(json!(color.hex()));
            }
            parts.push(to_expression(fallback));
            Value::Array(parts)
        }
        StyleExpr::ConditionalMatch {
            predicate,
            then_expr,
            else_expr,
        } => {
            let Predicate::FieldIn { field, values } = predicate;
            json!([
                "case",
                ["in", ["get", field], ["literal", values]],
                to_expression(then_expr),
                to_expression(else_expr),
            ])
        }
    }
}
