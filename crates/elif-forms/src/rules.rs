//! Rule specifiers attached to a field
//!
//! A specifier is either the name of a registered rule, optionally carrying a
//! bracketed parameter (`min_length[6]`, `between[3,5]`), or an inline predicate
//! evaluated directly against the control. String specifiers are parsed once
//! when the field is built.

use crate::element::Element;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::sync::Arc;

/// Inline predicate evaluated against the control itself
pub type PredicateFn = Arc<dyn Fn(&Element) -> bool + Send + Sync>;

static PARAMETERIZED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+)\[(.+)\]$").expect("valid parameterized rule pattern"));

/// One entry in a field's ordered rule list
#[derive(Clone)]
pub enum RuleSpec {
    /// Registered rule looked up by name
    Named { name: String, param: Option<String> },
    /// Inline predicate; takes no parameter
    Predicate(PredicateFn),
}

impl RuleSpec {
    /// Parse `name` or `name[param]`
    pub fn parse(spec: &str) -> Self {
        match PARAMETERIZED.captures(spec) {
            Some(parts) => RuleSpec::Named {
                name: parts[1].to_string(),
                param: Some(parts[2].to_string()),
            },
            None => RuleSpec::Named {
                name: spec.to_string(),
                param: None,
            },
        }
    }

    /// Create a named rule with an explicit parameter
    pub fn with_param(name: impl Into<String>, param: impl Into<String>) -> Self {
        RuleSpec::Named {
            name: name.into(),
            param: Some(param.into()),
        }
    }

    /// Wrap a closure as an inline predicate
    pub fn predicate<F>(predicate: F) -> Self
    where
        F: Fn(&Element) -> bool + Send + Sync + 'static,
    {
        RuleSpec::Predicate(Arc::new(predicate))
    }

    /// Rule name, `None` for inline predicates
    pub fn name(&self) -> Option<&str> {
        match self {
            RuleSpec::Named { name, .. } => Some(name),
            RuleSpec::Predicate(_) => None,
        }
    }

    /// Bracketed parameter, if any
    pub fn param(&self) -> Option<&str> {
        match self {
            RuleSpec::Named { param, .. } => param.as_deref(),
            RuleSpec::Predicate(_) => None,
        }
    }

    pub fn is_predicate(&self) -> bool {
        matches!(self, RuleSpec::Predicate(_))
    }

    /// Rules that still run when the value is blank
    pub(crate) fn runs_on_blank(&self) -> bool {
        matches!(self.name(), Some("required") | Some("matches"))
    }
}

impl fmt::Debug for RuleSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleSpec::Named { name, param } => f
                .debug_struct("Named")
                .field("name", name)
                .field("param", param)
                .finish(),
            RuleSpec::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

impl fmt::Display for RuleSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleSpec::Named { name, param: Some(param) } => write!(f, "{}[{}]", name, param),
            RuleSpec::Named { name, param: None } => write!(f, "{}", name),
            RuleSpec::Predicate(_) => write!(f, "<predicate>"),
        }
    }
}

impl From<&str> for RuleSpec {
    fn from(spec: &str) -> Self {
        RuleSpec::parse(spec)
    }
}

impl From<String> for RuleSpec {
    fn from(spec: String) -> Self {
        RuleSpec::parse(&spec)
    }
}

impl From<&String> for RuleSpec {
    fn from(spec: &String) -> Self {
        RuleSpec::parse(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_name() {
        let spec = RuleSpec::parse("required");
        assert_eq!(spec.name(), Some("required"));
        assert_eq!(spec.param(), None);
        assert!(!spec.is_predicate());
    }

    #[test]
    fn test_parse_parameterized_names() {
        let spec = RuleSpec::parse("min_length[6]");
        assert_eq!(spec.name(), Some("min_length"));
        assert_eq!(spec.param(), Some("6"));

        let spec = RuleSpec::parse("between[3,5]");
        assert_eq!(spec.name(), Some("between"));
        assert_eq!(spec.param(), Some("3,5"));

        let spec = RuleSpec::parse("matches[password_confirmation]");
        assert_eq!(spec.name(), Some("matches"));
        assert_eq!(spec.param(), Some("password_confirmation"));
    }

    #[test]
    fn test_parse_edge_cases() {
        // Empty brackets are not a parameter
        let spec = RuleSpec::parse("min_length[]");
        assert_eq!(spec.name(), Some("min_length[]"));
        assert_eq!(spec.param(), None);

        // Greedy name: only the final bracket group is the parameter
        let spec = RuleSpec::parse("a[b][c]");
        assert_eq!(spec.name(), Some("a[b]"));
        assert_eq!(spec.param(), Some("c"));
    }

    #[test]
    fn test_display_round_trips_specifier() {
        assert_eq!(RuleSpec::parse("exact_length[4]").to_string(), "exact_length[4]");
        assert_eq!(RuleSpec::from("email").to_string(), "email");
        assert_eq!(RuleSpec::predicate(|_| true).to_string(), "<predicate>");
    }

    #[test]
    fn test_blank_exempt_rules() {
        assert!(RuleSpec::parse("required").runs_on_blank());
        assert!(RuleSpec::parse("matches[other]").runs_on_blank());
        assert!(!RuleSpec::parse("email").runs_on_blank());
        assert!(!RuleSpec::predicate(|_| false).runs_on_blank());
    }
}
