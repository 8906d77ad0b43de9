//! Rule registry mapping rule names to predicates
//!
//! A registry is an owned value injected into each form. The built-in rule set
//! is available as a shared, immutable instance through [`RuleRegistry::shared`];
//! callers that need custom rules build their own registry and register on top
//! of the built-ins. Registering a name that already exists replaces it.

use crate::element::Element;
use crate::traits::ValueSource;
use crate::validators;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Predicate implementing a named rule: `(context, param) -> passed`
pub type RuleFn = Arc<dyn Fn(&RuleContext<'_>, Option<&str>) -> bool + Send + Sync>;

static BUILTIN_RULES: Lazy<Arc<RuleRegistry>> = Lazy::new(|| Arc::new(RuleRegistry::with_builtins()));

/// Everything a rule can see while evaluating one field
#[derive(Clone, Copy)]
pub struct RuleContext<'a> {
    pub field_name: &'a str,
    pub element: &'a Element,
    pub elements: &'a dyn ValueSource,
}

impl<'a> RuleContext<'a> {
    pub fn new(field_name: &'a str, element: &'a Element, elements: &'a dyn ValueSource) -> Self {
        Self {
            field_name,
            element,
            elements,
        }
    }

    /// Raw value of the field under validation
    pub fn value(&self) -> &'a str {
        &self.element.value
    }

    /// Raw value of another control in the same form
    pub fn other_value(&self, name: &str) -> Option<String> {
        self.elements.value(name)
    }
}

impl fmt::Debug for RuleContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleContext")
            .field("field_name", &self.field_name)
            .field("element", &self.element)
            .finish()
    }
}

/// Mapping from case-sensitive rule name to predicate
#[derive(Clone, Default)]
pub struct RuleRegistry {
    rules: HashMap<String, RuleFn>,
}

impl RuleRegistry {
    /// Create a registry with no rules
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry seeded with every built-in rule
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        validators::register_builtins(&mut registry);
        registry
    }

    /// Shared immutable built-in registry
    pub fn shared() -> Arc<RuleRegistry> {
        Arc::clone(&BUILTIN_RULES)
    }

    /// Add a rule or replace the rule with the same name
    pub fn register<F>(&mut self, name: impl Into<String>, rule: F) -> &mut Self
    where
        F: Fn(&RuleContext<'_>, Option<&str>) -> bool + Send + Sync + 'static,
    {
        self.insert(name, Arc::new(rule))
    }

    /// Add an already shared rule function
    pub fn insert(&mut self, name: impl Into<String>, rule: RuleFn) -> &mut Self {
        let name = name.into();
        if self.rules.insert(name.clone(), rule).is_some() {
            tracing::debug!("Rule '{}' overridden", name);
        }
        self
    }

    /// Register a batch of rules; later entries win over earlier ones
    pub fn register_all<I, K>(&mut self, rules: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, RuleFn)>,
        K: Into<String>,
    {
        for (name, rule) in rules {
            self.insert(name, rule);
        }
        self
    }

    /// Look up a rule by name
    pub fn resolve(&self, name: &str) -> Option<RuleFn> {
        self.rules.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Registered rule names in sorted order
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &self.names())
            .finish()
    }
}
