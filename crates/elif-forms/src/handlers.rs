//! Lifecycle hooks invoked around form and field checks
//!
//! Hooks receive formatted result records, never live fields. The defaults pass
//! results to a [`Styler`]; individual hooks can be replaced one at a time.

use crate::format::{FieldResult, FormResult};
use crate::traits::Styler;
use std::fmt;
use std::sync::Arc;

pub type FieldsHook = Arc<dyn Fn(&[FieldResult]) + Send + Sync>;
pub type FieldHook = Arc<dyn Fn(&FieldResult) + Send + Sync>;
pub type FormHook = Arc<dyn Fn(&FormResult) + Send + Sync>;

/// Styler that renders nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopStyler;

impl Styler for NoopStyler {}

/// Styler that reports results through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingStyler;

impl Styler for TracingStyler {
    fn field(&self, result: &FieldResult) {
        if result.is_valid {
            tracing::debug!("Field '{}' is valid", result.name);
        } else {
            tracing::info!("Field '{}' is invalid: {}", result.name, result.message);
        }
    }

    fn form(&self, result: &FormResult) {
        tracing::info!(
            "Form '{}' checked: valid={:?}",
            result.name.as_deref().unwrap_or("<unnamed>"),
            result.is_valid
        );
    }
}

/// The four lifecycle hooks of a form
#[derive(Clone)]
pub struct Handlers {
    pub(crate) pre_check: FieldsHook,
    pub(crate) post_check: FieldsHook,
    pub(crate) field_check: FieldHook,
    pub(crate) form_check: FormHook,
}

impl Handlers {
    /// Default hooks delegating to `styler`.
    ///
    /// Pre-check does nothing, post-check styles every field, field-check
    /// styles the checked field and form-check styles the form.
    pub fn with_styler(styler: Arc<dyn Styler>) -> Self {
        let post_styler = Arc::clone(&styler);
        let field_styler = Arc::clone(&styler);
        Self {
            pre_check: Arc::new(|_: &[FieldResult]| {}),
            post_check: Arc::new(move |fields: &[FieldResult]| {
                for field in fields {
                    post_styler.field(field);
                }
            }),
            field_check: Arc::new(move |field: &FieldResult| field_styler.field(field)),
            form_check: Arc::new(move |form: &FormResult| styler.form(form)),
        }
    }

    /// Replace the hook run before any field is validated
    pub fn on_pre_check<F>(mut self, hook: F) -> Self
    where
        F: Fn(&[FieldResult]) + Send + Sync + 'static,
    {
        self.pre_check = Arc::new(hook);
        self
    }

    /// Replace the hook run after every field was validated
    pub fn on_post_check<F>(mut self, hook: F) -> Self
    where
        F: Fn(&[FieldResult]) + Send + Sync + 'static,
    {
        self.post_check = Arc::new(hook);
        self
    }

    /// Replace the hook run after a single-field check
    pub fn on_field_check<F>(mut self, hook: F) -> Self
    where
        F: Fn(&FieldResult) + Send + Sync + 'static,
    {
        self.field_check = Arc::new(hook);
        self
    }

    /// Replace the hook run with the form outcome
    pub fn on_form_check<F>(mut self, hook: F) -> Self
    where
        F: Fn(&FormResult) + Send + Sync + 'static,
    {
        self.form_check = Arc::new(hook);
        self
    }

    pub(crate) fn pre_check(&self, fields: &[FieldResult]) {
        (self.pre_check)(fields)
    }

    pub(crate) fn post_check(&self, fields: &[FieldResult]) {
        (self.post_check)(fields)
    }

    pub(crate) fn field_check(&self, field: &FieldResult) {
        (self.field_check)(field)
    }

    pub(crate) fn form_check(&self, form: &FormResult) {
        (self.form_check)(form)
    }
}

impl Default for Handlers {
    fn default() -> Self {
        Self::with_styler(Arc::new(NoopStyler))
    }
}

impl fmt::Debug for Handlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handlers").finish_non_exhaustive()
    }
}
