//! Literal coercion of free-text search input.
//!
//! When the user types into an operand box, the raw string is offered back
//! as zero or more typed constant candidates, so free text can become a
//! typed literal. The attempt order is fixed: number, boolean, array, then
//! the string fallback, and every match is returned, not just the first
//! (input `42` is both a number and a string).

use super::labelled::LabelledAst;
use crate::ast::{AstNode, ConstantValue};

/// Tooltip names for the coerced types, shown so the UI can disambiguate
/// simultaneous matches.
const TOOLTIP_NUMBER: &str = "(number)";
const TOOLTIP_BOOLEAN: &str = "(boolean)";
const TOOLTIP_ARRAY: &str = "(array)";
const TOOLTIP_STRING: &str = "(string)";

/// Turns a raw search string into ranked typed constant candidates.
///
/// An input that is empty after trimming yields no candidates at all; any
/// other input yields at least the string fallback. Coercion never fails: a
/// JSON parse error just means no array candidate.
pub fn coerce_to_constants(input: &str) -> Vec<LabelledAst> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    let lowered = trimmed.to_lowercase();

    let mut candidates = Vec::new();

    if let Ok(number) = trimmed.parse::<f64>() {
        if number.is_finite() {
            let constant = ConstantValue::Number(number);
            candidates.push(LabelledAst::new(
                constant.to_string(),
                TOOLTIP_NUMBER,
                AstNode::constant(constant),
            ));
        }
    }

    if lowered == "true" || lowered == "false" {
        let value = lowered == "true";
        candidates.push(LabelledAst::new(
            value.to_string(),
            TOOLTIP_BOOLEAN,
            AstNode::constant(value),
        ));
    }

    // The raw input, not the lower-cased one: element casing matters.
    if let Ok(serde_json::Value::Array(items)) = serde_json::from_str::<serde_json::Value>(input) {
        let constant = ConstantValue::Array(items.into_iter().map(Into::into).collect());
        candidates.push(LabelledAst::new(
            constant.to_string(),
            TOOLTIP_ARRAY,
            AstNode::constant(constant),
        ));
    }

    candidates.push(LabelledAst::new(
        format!("\"{}\"", input),
        TOOLTIP_STRING,
        AstNode::constant(input),
    ));

    candidates
}
