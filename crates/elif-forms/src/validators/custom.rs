//! Helpers for building custom rules to register alongside the built-ins

use crate::error::{FormsError, FormsResult};
use crate::registry::{RuleContext, RuleFn};
use regex::Regex;
use std::sync::Arc;

/// Build a rule from a closure over the raw value and parameter
pub fn value_rule<F>(check: F) -> RuleFn
where
    F: Fn(&str, Option<&str>) -> bool + Send + Sync + 'static,
{
    Arc::new(move |context: &RuleContext<'_>, param: Option<&str>| check(context.value(), param))
}

/// Build a rule that passes when the whole value matches `pattern`
pub fn pattern_rule(pattern: &str) -> FormsResult<RuleFn> {
    let anchored = format!("^(?:{})$", pattern);
    let regex = Regex::new(&anchored).map_err(|e| FormsError::invalid_pattern(pattern, e))?;
    Ok(Arc::new(move |context: &RuleContext<'_>, _param: Option<&str>| {
        regex.is_match(context.value())
    }))
}
