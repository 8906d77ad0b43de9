//! Entry point bundling a rule registry, default hooks and a document

use crate::builder::{FieldSpec, FormBuilder, FormTarget};
use crate::element::Document;
use crate::form::Form;
use crate::handlers::Handlers;
use crate::registry::{RuleContext, RuleFn, RuleRegistry};
use crate::traits::Styler;
use std::sync::Arc;

/// Owned validation setup shared by the forms it builds.
///
/// Rules registered here apply to forms built afterwards; forms already built
/// keep the registry they were created with.
#[derive(Debug, Clone)]
pub struct Validation {
    registry: Arc<RuleRegistry>,
    handlers: Handlers,
    document: Document,
}

impl Validation {
    /// Built-in rules, no-op styling and an empty document
    pub fn new() -> Self {
        Self {
            registry: RuleRegistry::shared(),
            handlers: Handlers::default(),
            document: Document::new(),
        }
    }

    /// Use a prepared registry
    pub fn with_registry(mut self, registry: RuleRegistry) -> Self {
        self.registry = Arc::new(registry);
        self
    }

    /// Default hooks styled by `styler`
    pub fn with_styler(mut self, styler: Arc<dyn Styler>) -> Self {
        self.handlers = Handlers::with_styler(styler);
        self
    }

    /// Replace the default hooks
    pub fn with_handlers(mut self, handlers: Handlers) -> Self {
        self.handlers = handlers;
        self
    }

    /// Add or override rules; the last registration of a name wins
    pub fn register_rules<I, K>(&mut self, rules: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, RuleFn)>,
        K: Into<String>,
    {
        Arc::make_mut(&mut self.registry).register_all(rules);
        self
    }

    /// Add or override a single rule
    pub fn register_rule<F>(&mut self, name: impl Into<String>, rule: F) -> &mut Self
    where
        F: Fn(&RuleContext<'_>, Option<&str>) -> bool + Send + Sync + 'static,
    {
        Arc::make_mut(&mut self.registry).register(name, rule);
        self
    }

    pub fn registry(&self) -> &Arc<RuleRegistry> {
        &self.registry
    }

    pub fn handlers(&self) -> &Handlers {
        &self.handlers
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Forms resolvable by name in [`Validation::init`]
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// Build a form from its target and field specs.
    ///
    /// `handlers` replaces the default hooks for this form only; start from
    /// [`Validation::handlers`] to override a single hook.
    pub fn init<I>(&self, target: impl Into<FormTarget>, fields: I, handlers: Option<Handlers>) -> Form
    where
        I: IntoIterator<Item = FieldSpec>,
    {
        FormBuilder::new(target)
            .document(&self.document)
            .registry(Arc::clone(&self.registry))
            .handlers(handlers.unwrap_or_else(|| self.handlers.clone()))
            .fields(fields)
            .build()
    }
}

impl Default for Validation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{Element, FormElements};
    use crate::validators::value_rule;
    use std::sync::Mutex;

    fn validation_with_signup() -> Validation {
        let mut validation = Validation::new();
        validation.document_mut().add_named_form(
            FormElements::named("signup")
                .with(Element::text("username", "admin"))
                .shared(),
        );
        validation
    }

    #[test]
    fn test_init_by_name() {
        let validation = validation_with_signup();
        let mut form = validation.init("signup", vec![FieldSpec::new("username").rule("alpha")], None);

        assert!(!form.is_null());
        assert!(form.check());
    }

    #[test]
    fn test_init_unknown_form_is_permissive() {
        let validation = validation_with_signup();
        let mut form = validation.init("checkout", vec![FieldSpec::new("card").rule("required")], None);

        assert!(form.is_null());
        assert!(form.check());
    }

    #[test]
    fn test_register_rules_extends_builtins() {
        let mut validation = validation_with_signup();
        validation.register_rules(vec![("not_admin", value_rule(|value, _| value != "admin"))]);

        let mut form = validation.init(
            "signup",
            vec![FieldSpec::new("username").rules(["required", "not_admin"])],
            None,
        );
        assert!(!form.check());
        assert_eq!(form.field("username").unwrap().error_index(), Some(1));
        assert!(validation.registry().contains("required"));
        // The shared built-in registry is not modified
        assert!(!RuleRegistry::shared().contains("not_admin"));
    }

    #[test]
    fn test_register_rule_overrides_builtin() {
        let mut validation = validation_with_signup();
        validation.register_rule("alpha", |_, _| false);

        let mut form = validation.init("signup", vec![FieldSpec::new("username").rule("alpha")], None);
        assert!(!form.check());
    }

    #[test]
    fn test_handler_overrides_apply_per_form() {
        let checked = Arc::new(Mutex::new(Vec::new()));
        let sink = checked.clone();
        let validation = validation_with_signup();

        let handlers = validation
            .handlers()
            .clone()
            .on_form_check(move |form| sink.lock().unwrap().push(form.is_valid));
        let mut form = validation.init("signup", vec![FieldSpec::new("username").rule("required")], Some(handlers));

        form.check();
        assert_eq!(*checked.lock().unwrap(), vec![Some(true)]);
    }
}
