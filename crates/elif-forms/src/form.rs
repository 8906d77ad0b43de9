//! Form-level orchestration of field checks

use crate::builder::{expand_spec, FieldSpec};
use crate::field::Field;
use crate::format::{format_field, format_fields, format_form, FieldResult};
use crate::handlers::Handlers;
use crate::registry::RuleRegistry;
use crate::traits::ValueSource;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Ordered set of fields for one form plus its hooks and overall outcome.
///
/// A form without backing controls is a permissive no-op: every check passes
/// and no hook runs.
pub struct Form {
    elements: Option<Arc<dyn ValueSource>>,
    fields: Vec<Field>,
    handlers: Handlers,
    registry: Arc<RuleRegistry>,
    is_valid: Option<bool>,
    validated: bool,
    lookup: HashMap<String, usize>,
}

impl Form {
    /// Create a form with no fields
    pub fn new(
        elements: Option<Arc<dyn ValueSource>>,
        registry: Arc<RuleRegistry>,
        handlers: Handlers,
    ) -> Self {
        Self {
            elements,
            fields: Vec::new(),
            handlers,
            registry,
            is_valid: None,
            validated: false,
            lookup: HashMap::new(),
        }
    }

    /// Create the no-op form used when the form could not be resolved
    pub fn null() -> Self {
        Self::new(None, RuleRegistry::shared(), Handlers::default())
    }

    /// Validate every enabled field and report the aggregate outcome.
    ///
    /// All fields are evaluated even after one fails so every error can be
    /// reported. Fields whose control is missing or disabled are skipped.
    pub fn check(&mut self) -> bool {
        if self.elements.is_none() {
            return true;
        }

        self.is_valid = Some(true);
        self.handlers.pre_check(&format_fields(&self.fields));

        let mut is_valid = true;
        for field in self.fields.iter_mut() {
            match field.element() {
                Some(element) if !element.disabled => {}
                Some(_) => {
                    tracing::trace!("Skipping disabled field '{}'", field.name());
                    continue;
                }
                None => {
                    tracing::trace!("Skipping field '{}' without a control", field.name());
                    continue;
                }
            }

            if !field.validate(&self.registry) {
                is_valid = false;
            }
        }
        self.is_valid = Some(is_valid);

        self.handlers.post_check(&format_fields(&self.fields));
        self.handlers.form_check(&format_form(self));
        self.validated = true;

        tracing::debug!(
            "Form '{}' checked: {} field(s), valid={}",
            self.name().unwrap_or_default(),
            self.fields.len(),
            is_valid
        );
        is_valid
    }

    /// Validate a single field and run the field-check hook.
    ///
    /// The form-level outcome is left untouched. An unknown name has nothing to
    /// validate and passes.
    pub fn check_field(&mut self, name: &str) -> bool {
        let Some(index) = self.lookup_index(name) else {
            tracing::debug!("check_field: no field named '{}'", name);
            return true;
        };

        let field = &mut self.fields[index];
        let is_valid = field.validate(&self.registry);
        self.handlers.field_check(&format_field(field));
        is_valid
    }

    /// Look up a field by name, remembering the answer.
    ///
    /// When several fields share a name the last one wins.
    pub fn find_field(&mut self, name: &str) -> Option<&Field> {
        let index = self.lookup_index(name)?;
        self.fields.get(index)
    }

    /// Look up a field without touching the lookup cache
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().rev().find(|field| field.name() == name)
    }

    /// Append fields declared after construction
    pub fn add_fields<I>(&mut self, specs: I) -> &mut Self
    where
        I: IntoIterator<Item = FieldSpec>,
    {
        if let Some(elements) = self.elements.clone() {
            for spec in specs {
                self.fields.extend(expand_spec(&elements, spec));
            }
            self.lookup.clear();
        }
        self
    }

    pub(crate) fn push_field(&mut self, field: Field) {
        self.fields.push(field);
        self.lookup.clear();
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Formatted snapshot of every field
    pub fn results(&self) -> Vec<FieldResult> {
        format_fields(&self.fields)
    }

    /// Name of the backing form, if known
    pub fn name(&self) -> Option<String> {
        self.elements
            .as_ref()
            .and_then(|elements| elements.form_name().map(str::to_string))
    }

    /// Whether the form has no backing controls
    pub fn is_null(&self) -> bool {
        self.elements.is_none()
    }

    /// Outcome of the last full check; `None` before the first one
    pub fn is_valid(&self) -> Option<bool> {
        self.is_valid
    }

    /// Whether a full check has run
    pub fn validated(&self) -> bool {
        self.validated
    }

    pub fn elements(&self) -> Option<&Arc<dyn ValueSource>> {
        self.elements.as_ref()
    }

    pub fn registry(&self) -> &Arc<RuleRegistry> {
        &self.registry
    }

    pub fn handlers(&self) -> &Handlers {
        &self.handlers
    }

    /// Only hits are remembered so unknown names cannot grow the cache
    fn lookup_index(&mut self, name: &str) -> Option<usize> {
        if let Some(index) = self.lookup.get(name) {
            return Some(*index);
        }

        let index = self.fields.iter().rposition(|field| field.name() == name)?;
        self.lookup.insert(name.to_string(), index);
        Some(index)
    }
}

impl Default for Form {
    fn default() -> Self {
        Self::null()
    }
}

impl fmt::Debug for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Form")
            .field("name", &self.name())
            .field("fields", &self.fields)
            .field("is_valid", &self.is_valid)
            .field("validated", &self.validated)
            .finish()
    }
}
