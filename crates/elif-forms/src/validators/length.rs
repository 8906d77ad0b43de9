//! Length rules for string values
//!
//! Lengths count Unicode scalar values. Parameters are parsed as numbers; a
//! parameter that is missing or not a number makes the comparison fail.

use crate::registry::RuleContext;

/// Parse a numeric rule parameter, `NaN` when absent or malformed.
///
/// Only finite numbers count: `"inf"` and `"NaN"` are malformed.
pub(crate) fn parse_number(param: Option<&str>) -> f64 {
    param
        .and_then(|param| param.trim().parse::<f64>().ok())
        .filter(|number| number.is_finite())
        .unwrap_or(f64::NAN)
}

fn char_length(value: &str) -> f64 {
    value.chars().count() as f64
}

/// At least `n` characters
pub fn min_length(context: &RuleContext<'_>, param: Option<&str>) -> bool {
    char_length(context.value()) >= parse_number(param)
}

/// At most `n` characters
pub fn max_length(context: &RuleContext<'_>, param: Option<&str>) -> bool {
    char_length(context.value()) <= parse_number(param)
}

/// Exactly `n` characters
pub fn exact_length(context: &RuleContext<'_>, param: Option<&str>) -> bool {
    char_length(context.value()) == parse_number(param)
}

/// Length within `lo,hi`, both inclusive.
///
/// This compares the length of the value, never its magnitude: `"100"` is
/// between `3,5` while `"7"` is not.
pub fn between(context: &RuleContext<'_>, param: Option<&str>) -> bool {
    let mut bounds = param.unwrap_or_default().split(',');
    let low = parse_number(bounds.next());
    let high = parse_number(bounds.next());
    let length = char_length(context.value());

    length >= low && length <= high
}
