//! Numeric format and comparison rules

use crate::registry::RuleContext;
use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Ordering;

static DECIMAL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?[0-9]*\.?[0-9]+$").expect("valid decimal pattern"));
static INTEGER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?[0-9]+$").expect("valid integer pattern"));
static NATURAL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("valid natural pattern"));
static NATURAL_NO_ZERO_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[1-9][0-9]*$").expect("valid natural no zero pattern"));

/// Decimal number with optional leading minus and decimal point
pub fn numeric(context: &RuleContext<'_>, _param: Option<&str>) -> bool {
    DECIMAL_PATTERN.is_match(context.value())
}

/// Same pattern as `numeric`
pub fn decimal(context: &RuleContext<'_>, _param: Option<&str>) -> bool {
    DECIMAL_PATTERN.is_match(context.value())
}

/// Digits with an optional leading minus
pub fn integer(context: &RuleContext<'_>, _param: Option<&str>) -> bool {
    INTEGER_PATTERN.is_match(context.value())
}

/// Digits only, zero allowed
pub fn is_natural(context: &RuleContext<'_>, _param: Option<&str>) -> bool {
    NATURAL_PATTERN.is_match(context.value())
}

/// Digits without a leading zero, so at least 1
pub fn is_natural_no_zero(context: &RuleContext<'_>, _param: Option<&str>) -> bool {
    NATURAL_NO_ZERO_PATTERN.is_match(context.value())
}

/// Value compares greater than the parameter
pub fn greater_than(context: &RuleContext<'_>, param: Option<&str>) -> bool {
    compare(context.value(), param) == Some(Ordering::Greater)
}

/// Value compares less than the parameter
pub fn less_than(context: &RuleContext<'_>, param: Option<&str>) -> bool {
    compare(context.value(), param) == Some(Ordering::Less)
}

/// Loose comparison of a value against a rule parameter.
///
/// Both sides are compared as numbers when both parse as numbers, otherwise
/// as strings. `"9"` is less than `"10"` but `"abc"` is greater than `"10"`.
fn compare(value: &str, param: Option<&str>) -> Option<Ordering> {
    let param = param?;
    match (as_number(value), as_number(param)) {
        (Some(left), Some(right)) => left.partial_cmp(&right),
        _ => Some(value.cmp(param)),
    }
}

fn as_number(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    text.parse::<f64>().ok().filter(|number| number.is_finite())
}
