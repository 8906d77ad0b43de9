//! Field validation state
//!
//! A field pairs one named control with its ordered rules and messages. Each
//! validation pass walks the rules in order and stops at the first failure, so a
//! field reports at most one error at a time.

use crate::element::Element;
use crate::registry::{RuleContext, RuleRegistry};
use crate::rules::RuleSpec;
use crate::traits::ValueSource;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Event gating options for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOptions {
    /// Re-validate on key presses once the field has been checked
    pub onkeyup: bool,
    /// Validate when the control loses focus
    pub onfocusout: bool,
}

impl Default for FieldOptions {
    fn default() -> Self {
        Self {
            onkeyup: true,
            onfocusout: true,
        }
    }
}

impl FieldOptions {
    /// Apply the options that are set in `overrides`
    pub fn merge(self, overrides: &FieldOptionsOverride) -> Self {
        Self {
            onkeyup: overrides.onkeyup.unwrap_or(self.onkeyup),
            onfocusout: overrides.onfocusout.unwrap_or(self.onfocusout),
        }
    }
}

/// Partial options as declared on a field spec
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOptionsOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub onkeyup: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub onfocusout: Option<bool>,
}

impl FieldOptionsOverride {
    pub fn onkeyup(mut self, enabled: bool) -> Self {
        self.onkeyup = Some(enabled);
        self
    }

    pub fn onfocusout(mut self, enabled: bool) -> Self {
        self.onfocusout = Some(enabled);
        self
    }
}

/// One validated control with its rules, messages and last outcome
#[derive(Clone)]
pub struct Field {
    name: String,
    elements: Arc<dyn ValueSource>,
    rules: Vec<RuleSpec>,
    messages: Vec<String>,
    options: FieldOptions,
    is_valid: bool,
    validated: bool,
    error_index: Option<usize>,
}

impl Field {
    /// Create a field that has not been validated yet
    pub fn new(
        name: impl Into<String>,
        elements: Arc<dyn ValueSource>,
        rules: Vec<RuleSpec>,
        messages: Vec<String>,
        options: FieldOptions,
    ) -> Self {
        Self {
            name: name.into(),
            elements,
            rules,
            messages,
            options,
            is_valid: true,
            validated: false,
            error_index: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rules(&self) -> &[RuleSpec] {
        &self.rules
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn options(&self) -> FieldOptions {
        self.options
    }

    /// Outcome of the last pass; `true` before the first one
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Whether the field has been validated at least once
    pub fn validated(&self) -> bool {
        self.validated
    }

    /// Position of the failing rule in the last pass
    pub fn error_index(&self) -> Option<usize> {
        self.error_index
    }

    /// Message for the failing rule, empty when valid or when no message was given
    pub fn message(&self) -> &str {
        self.error_index
            .and_then(|index| self.messages.get(index))
            .map_or("", String::as_str)
    }

    /// Current snapshot of the backing control
    pub fn element(&self) -> Option<Element> {
        self.elements.element(&self.name)
    }

    /// Controls of the owning form
    pub fn elements(&self) -> &Arc<dyn ValueSource> {
        &self.elements
    }

    /// Run the rules against the current value.
    ///
    /// Blank values skip every rule except `required` and `matches`. Rule names
    /// the registry does not know are skipped.
    pub fn validate(&mut self, registry: &RuleRegistry) -> bool {
        self.is_valid = true;
        self.error_index = None;

        let element = self
            .element()
            .unwrap_or_else(|| Element::text(self.name.clone(), ""));
        let blank = element.is_blank();

        for (index, rule) in self.rules.iter().enumerate() {
            let passed = match rule {
                RuleSpec::Predicate(predicate) => predicate(&element),
                RuleSpec::Named { name, param } => {
                    if blank && !rule.runs_on_blank() {
                        tracing::trace!("Field '{}': skipping '{}' on blank value", self.name, rule);
                        continue;
                    }

                    let Some(check) = registry.resolve(name) else {
                        tracing::trace!("Field '{}': unknown rule '{}' skipped", self.name, name);
                        continue;
                    };

                    let context = RuleContext::new(&self.name, &element, self.elements.as_ref());
                    check(&context, param.as_deref())
                }
            };

            tracing::trace!("Field '{}': rule '{}' passed={}", self.name, rule, passed);
            if !passed {
                self.is_valid = false;
                self.error_index = Some(index);
                break;
            }
        }

        self.validated = true;
        if !self.is_valid {
            tracing::debug!(
                "Field '{}' failed rule {} ({})",
                self.name,
                self.error_index.unwrap_or_default(),
                self.message()
            );
        }

        self.is_valid
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("rules", &self.rules)
            .field("messages", &self.messages)
            .field("options", &self.options)
            .field("is_valid", &self.is_valid)
            .field("validated", &self.validated)
            .field("error_index", &self.error_index)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::FormElements;

    fn field_with(value: &str, rules: &[&str], messages: &[&str]) -> (Arc<FormElements>, Field) {
        let elements = FormElements::named("signup")
            .with(Element::password("password", value))
            .shared();
        let field = Field::new(
            "password",
            elements.clone(),
            rules.iter().map(|rule| RuleSpec::parse(rule)).collect(),
            messages.iter().map(|message| message.to_string()).collect(),
            FieldOptions::default(),
        );
        (elements, field)
    }

    #[test]
    fn test_initial_state() {
        let (_, field) = field_with("", &["required"], &["Password is required"]);
        assert!(field.is_valid());
        assert!(!field.validated());
        assert_eq!(field.error_index(), None);
        assert_eq!(field.message(), "");
    }

    #[test]
    fn test_first_failure_stops_evaluation() {
        let (_, mut field) = field_with(
            "",
            &["required", "min_length[6]"],
            &["Password is required", "Password is too short"],
        );

        assert!(!field.validate(&RuleRegistry::with_builtins()));
        assert!(field.validated());
        assert_eq!(field.error_index(), Some(0));
        assert_eq!(field.message(), "Password is required");
    }

    #[test]
    fn test_failure_reports_second_rule() {
        let (_, mut field) = field_with(
            "abc",
            &["required", "min_length[6]"],
            &["Password is required", "Password is too short"],
        );

        assert!(!field.validate(&RuleRegistry::with_builtins()));
        assert_eq!(field.error_index(), Some(1));
        assert_eq!(field.message(), "Password is too short");
    }

    #[test]
    fn test_revalidation_tracks_value_changes() {
        let registry = RuleRegistry::with_builtins();
        let (elements, mut field) = field_with("abc", &["min_length[6]"], &["Too short"]);

        assert!(!field.validate(&registry));
        elements.set_value("password", "long enough");
        assert!(field.validate(&registry));
        assert_eq!(field.error_index(), None);
        assert_eq!(field.message(), "");
    }

    #[test]
    fn test_validate_is_idempotent() {
        let registry = RuleRegistry::with_builtins();
        let (_, mut field) = field_with("abc", &["required", "alpha", "min_length[6]"], &[]);

        let first = (field.validate(&registry), field.error_index());
        let second = (field.validate(&registry), field.error_index());
        assert_eq!(first, second);
        assert_eq!(first, (false, Some(2)));
    }

    #[test]
    fn test_blank_optional_value_skips_format_rules() {
        let (_, mut field) = field_with("   ", &["email", "min_length[6]"], &[]);
        assert!(field.validate(&RuleRegistry::with_builtins()));
        assert!(field.validated());
    }

    #[test]
    fn test_unknown_rule_is_skipped() {
        let (_, mut field) = field_with("secret", &["required", "frobnicate"], &[]);
        assert!(field.validate(&RuleRegistry::with_builtins()));
    }

    #[test]
    fn test_missing_message_is_empty() {
        let (_, mut field) = field_with("abc", &["required", "min_length[6]"], &["Required"]);
        assert!(!field.validate(&RuleRegistry::with_builtins()));
        assert_eq!(field.error_index(), Some(1));
        assert_eq!(field.message(), "");
    }

    #[test]
    fn test_predicate_rule_runs_even_on_blank_value() {
        let elements = FormElements::new().with(Element::text("nickname", "")).shared();
        let mut field = Field::new(
            "nickname",
            elements,
            vec![
                RuleSpec::predicate(|element| element.value != "root"),
                RuleSpec::predicate(|element| !element.value.is_empty()),
            ],
            vec!["Reserved".to_string(), "Pick a nickname".to_string()],
            FieldOptions::default(),
        );

        assert!(!field.validate(&RuleRegistry::with_builtins()));
        assert_eq!(field.error_index(), Some(1));
        assert_eq!(field.message(), "Pick a nickname");
    }

    #[test]
    fn test_missing_control_validates_as_blank() {
        let elements = FormElements::new().shared();
        let mut field = Field::new(
            "ghost",
            elements,
            vec![RuleSpec::parse("required")],
            vec!["Required".to_string()],
            FieldOptions::default(),
        );

        assert!(!field.validate(&RuleRegistry::with_builtins()));
        assert_eq!(field.message(), "Required");
    }

    #[test]
    fn test_options_merge() {
        let merged = FieldOptions::default().merge(&FieldOptionsOverride::default().onkeyup(false));
        assert!(!merged.onkeyup);
        assert!(merged.onfocusout);

        let untouched = FieldOptions::default().merge(&FieldOptionsOverride::default());
        assert_eq!(untouched, FieldOptions::default());
    }
}
