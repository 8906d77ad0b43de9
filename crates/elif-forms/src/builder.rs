//! Construction of forms from declarative field specs

use crate::element::Document;
use crate::field::{Field, FieldOptions, FieldOptionsOverride};
use crate::form::Form;
use crate::handlers::Handlers;
use crate::registry::RuleRegistry;
use crate::rules::RuleSpec;
use crate::traits::ValueSource;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Name of a field spec: one control, or a group sharing rules and messages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldName {
    One(String),
    Many(Vec<String>),
}

impl FieldName {
    /// Expanded control names
    pub fn names(&self) -> Vec<&str> {
        match self {
            FieldName::One(name) => vec![name.as_str()],
            FieldName::Many(names) => names.iter().map(String::as_str).collect(),
        }
    }

    fn is_empty(&self) -> bool {
        match self {
            FieldName::One(name) => name.is_empty(),
            FieldName::Many(names) => names.is_empty(),
        }
    }
}

impl From<&str> for FieldName {
    fn from(name: &str) -> Self {
        FieldName::One(name.to_string())
    }
}

impl From<String> for FieldName {
    fn from(name: String) -> Self {
        FieldName::One(name)
    }
}

impl From<Vec<String>> for FieldName {
    fn from(names: Vec<String>) -> Self {
        FieldName::Many(names)
    }
}

impl From<Vec<&str>> for FieldName {
    fn from(names: Vec<&str>) -> Self {
        FieldName::Many(names.into_iter().map(str::to_string).collect())
    }
}

/// Declarative description of one field or field group
#[derive(Debug, Clone, Default)]
pub struct FieldSpec {
    pub name: Option<FieldName>,
    pub rules: Vec<RuleSpec>,
    pub messages: Vec<String>,
    pub options: FieldOptionsOverride,
}

impl FieldSpec {
    /// Spec for a single control
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(FieldName::One(name.into())),
            ..Self::default()
        }
    }

    /// Spec for several controls validated under the same rules
    pub fn group<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: Some(FieldName::Many(names.into_iter().map(Into::into).collect())),
            ..Self::default()
        }
    }

    /// Append a rule
    pub fn rule(mut self, rule: impl Into<RuleSpec>) -> Self {
        self.rules.push(rule.into());
        self
    }

    /// Append several rules
    pub fn rules<I, R>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<RuleSpec>,
    {
        self.rules.extend(rules.into_iter().map(Into::into));
        self
    }

    /// Append an inline predicate rule
    pub fn predicate<F>(self, predicate: F) -> Self
    where
        F: Fn(&crate::element::Element) -> bool + Send + Sync + 'static,
    {
        self.rule(RuleSpec::predicate(predicate))
    }

    /// Append a message; messages line up with rules by position
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.messages.push(message.into());
        self
    }

    /// Append several messages
    pub fn messages<I, S>(mut self, messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.messages.extend(messages.into_iter().map(Into::into));
        self
    }

    pub fn options(mut self, options: FieldOptionsOverride) -> Self {
        self.options = options;
        self
    }
}

/// How a form is identified when building it
#[derive(Clone, Default)]
pub enum FormTarget {
    /// Resolved by name against a [`Document`]
    Named(String),
    /// Controls handed over directly
    Direct(Arc<dyn ValueSource>),
    /// No backing form; yields a no-op form
    #[default]
    Absent,
}

impl fmt::Debug for FormTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormTarget::Named(name) => f.debug_tuple("Named").field(name).finish(),
            FormTarget::Direct(source) => f.debug_tuple("Direct").field(&source.form_name()).finish(),
            FormTarget::Absent => f.write_str("Absent"),
        }
    }
}

impl From<&str> for FormTarget {
    fn from(name: &str) -> Self {
        FormTarget::Named(name.to_string())
    }
}

impl From<String> for FormTarget {
    fn from(name: String) -> Self {
        FormTarget::Named(name)
    }
}

impl From<Arc<dyn ValueSource>> for FormTarget {
    fn from(source: Arc<dyn ValueSource>) -> Self {
        FormTarget::Direct(source)
    }
}

impl<T: ValueSource + 'static> From<Arc<T>> for FormTarget {
    fn from(source: Arc<T>) -> Self {
        FormTarget::Direct(source)
    }
}

impl<T: Into<FormTarget>> From<Option<T>> for FormTarget {
    fn from(target: Option<T>) -> Self {
        target.map_or(FormTarget::Absent, Into::into)
    }
}

/// Builder wiring controls, rules, hooks and field specs into a [`Form`]
#[derive(Debug, Default)]
pub struct FormBuilder<'d> {
    target: FormTarget,
    document: Option<&'d Document>,
    registry: Option<Arc<RuleRegistry>>,
    handlers: Handlers,
    fields: Vec<FieldSpec>,
}

impl<'d> FormBuilder<'d> {
    pub fn new(target: impl Into<FormTarget>) -> Self {
        Self {
            target: target.into(),
            ..Self::default()
        }
    }

    /// Document used to resolve a named target
    pub fn document(mut self, document: &'d Document) -> Self {
        self.document = Some(document);
        self
    }

    /// Rule registry; defaults to the shared built-in registry
    pub fn registry(mut self, registry: Arc<RuleRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn handlers(mut self, handlers: Handlers) -> Self {
        self.handlers = handlers;
        self
    }

    /// Add one field spec
    pub fn field(mut self, spec: FieldSpec) -> Self {
        self.fields.push(spec);
        self
    }

    /// Add several field specs
    pub fn fields<I>(mut self, specs: I) -> Self
    where
        I: IntoIterator<Item = FieldSpec>,
    {
        self.fields.extend(specs);
        self
    }

    /// Resolve the target and build the fully wired form
    pub fn build(self) -> Form {
        let elements = resolve_target(self.target, self.document);
        let registry = self.registry.unwrap_or_else(RuleRegistry::shared);
        let mut form = Form::new(elements.clone(), registry, self.handlers);

        let Some(elements) = elements else {
            tracing::debug!("Form target not found; building a no-op form");
            return form;
        };

        for spec in self.fields {
            for field in expand_spec(&elements, spec) {
                form.push_field(field);
            }
        }

        tracing::debug!(
            "Built form '{}' with {} field(s)",
            form.name().unwrap_or_default(),
            form.fields().len()
        );
        form
    }
}

fn resolve_target(target: FormTarget, document: Option<&Document>) -> Option<Arc<dyn ValueSource>> {
    match target {
        FormTarget::Direct(source) => Some(source),
        FormTarget::Named(name) => {
            let source = document.and_then(|document| document.form(&name));
            if source.is_none() {
                tracing::debug!("No form named '{}' in document", name);
            }
            source
        }
        FormTarget::Absent => None,
    }
}

/// Expand one spec into a field per existing control.
///
/// Specs without a name and names with no matching control are skipped.
pub(crate) fn expand_spec(elements: &Arc<dyn ValueSource>, spec: FieldSpec) -> Vec<Field> {
    let Some(name) = spec.name.as_ref().filter(|name| !name.is_empty()) else {
        tracing::debug!("Skipping field spec without a name");
        return Vec::new();
    };

    let options = FieldOptions::default().merge(&spec.options);
    name.names()
        .into_iter()
        .filter(|name| {
            let exists = !name.is_empty() && elements.contains(name);
            if !exists {
                tracing::debug!("Skipping field '{}': no such control", name);
            }
            exists
        })
        .map(|name| {
            Field::new(
                name,
                Arc::clone(elements),
                spec.rules.clone(),
                spec.messages.clone(),
                options,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{Element, FormElements};
    use tracing_test::traced_test;

    fn contact_form() -> Arc<FormElements> {
        FormElements::named("contact")
            .with(Element::text("email", "jane@example.com"))
            .with(Element::text("phone_home", ""))
            .with(Element::text("phone_work", "12"))
            .shared()
    }

    #[test]
    fn test_build_direct_target() {
        let form = FormBuilder::new(contact_form())
            .field(FieldSpec::new("email").rules(["required", "email"]))
            .build();

        assert!(!form.is_null());
        assert_eq!(form.fields().len(), 1);
        assert_eq!(form.fields()[0].rules().len(), 2);
    }

    #[test]
    fn test_build_named_target_through_document() {
        let mut document = Document::new();
        document.add_named_form(contact_form());

        let form = FormBuilder::new("contact")
            .document(&document)
            .field(FieldSpec::new("email").rule("required"))
            .build();
        assert_eq!(form.name().as_deref(), Some("contact"));
        assert_eq!(form.fields().len(), 1);

        let missing = FormBuilder::new("newsletter")
            .document(&document)
            .field(FieldSpec::new("email").rule("required"))
            .build();
        assert!(missing.is_null());
        assert!(missing.fields().is_empty());
    }

    #[test]
    fn test_named_target_without_document_is_null() {
        let mut form = FormBuilder::new("contact").build();
        assert!(form.is_null());
        assert!(form.check());
    }

    #[test]
    fn test_group_name_expands_to_fields() {
        let form = FormBuilder::new(contact_form())
            .field(
                FieldSpec::group(["phone_home", "phone_work", "phone_mobile"])
                    .rules(["numeric", "min_length[6]"])
                    .messages(["Digits only", "Too short"]),
            )
            .build();

        let names: Vec<&str> = form.fields().iter().map(Field::name).collect();
        assert_eq!(names, vec!["phone_home", "phone_work"]);
        assert!(form.fields().iter().all(|field| field.messages().len() == 2));
    }

    #[test]
    fn test_specs_without_name_or_control_are_skipped() {
        let form = FormBuilder::new(contact_form())
            .field(FieldSpec::default().rule("required"))
            .field(FieldSpec::new("").rule("required"))
            .field(FieldSpec::new("nickname").rule("required"))
            .field(FieldSpec::group(Vec::<String>::new()).rule("required"))
            .build();

        assert!(form.fields().is_empty());
    }

    #[test]
    #[traced_test]
    fn test_skipped_specs_are_logged() {
        FormBuilder::new(contact_form())
            .field(FieldSpec::new("nickname").rule("required"))
            .build();

        assert!(logs_contain("Skipping field 'nickname': no such control"));
    }

    #[test]
    fn test_options_merge_over_defaults() {
        let form = FormBuilder::new(contact_form())
            .field(
                FieldSpec::new("email")
                    .rule("email")
                    .options(FieldOptionsOverride::default().onkeyup(false)),
            )
            .field(FieldSpec::new("phone_work").rule("numeric"))
            .build();

        assert_eq!(
            form.fields()[0].options(),
            FieldOptions {
                onkeyup: false,
                onfocusout: true
            }
        );
        assert_eq!(form.fields()[1].options(), FieldOptions::default());
    }

    #[test]
    fn test_custom_registry_is_used() {
        let mut registry = RuleRegistry::with_builtins();
        registry.register("even_length", |context, _| context.value().chars().count() % 2 == 0);

        let mut form = FormBuilder::new(contact_form())
            .registry(Arc::new(registry))
            .field(FieldSpec::new("phone_work").rule("even_length"))
            .build();

        assert!(form.check());
    }

    #[test]
    fn test_option_target_conversion() {
        let none: Option<Arc<FormElements>> = None;
        assert!(matches!(FormTarget::from(none), FormTarget::Absent));
        assert!(matches!(FormTarget::from(Some(contact_form())), FormTarget::Direct(_)));
    }
}
