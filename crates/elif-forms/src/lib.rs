//! # elif-forms
//!
//! Declarative form field validation for the elif framework.
//!
//! Fields declare ordered rules (`required`, `min_length[6]`, `matches[password]`,
//! or inline predicates) and messages. A [`Form`] validates its fields against a
//! [`RuleRegistry`], reports one error per field and aggregates the outcome into a
//! form-level verdict. Lifecycle hooks receive detached result records.
//!
//! UI bindings stay outside the engine: adapters mirror control state into a
//! [`ValueSource`] and route their events through [`Form::handle_event`].

pub mod builder;
pub mod config;
pub mod element;
pub mod error;
pub mod events;
pub mod field;
pub mod form;
pub mod format;
pub mod handlers;
pub mod registry;
pub mod rules;
pub mod traits;
pub mod validation;
pub mod validators;

// Re-exports for easy access
pub use builder::{FieldName, FieldSpec, FormBuilder, FormTarget};
pub use config::{FieldConfig, FormConfig, OneOrMany};
pub use element::{Document, Element, ElementKind, FormElements};
pub use error::{FormsError, FormsResult};
pub use events::FieldEvent;
pub use field::{Field, FieldOptions, FieldOptionsOverride};
pub use form::Form;
pub use format::{format_field, format_fields, format_form, FieldResult, FormResult};
pub use handlers::{Handlers, NoopStyler, TracingStyler};
pub use registry::{RuleContext, RuleFn, RuleRegistry};
pub use rules::{PredicateFn, RuleSpec};
pub use traits::{Styler, ValueSource};
pub use validation::Validation;

/// Build a form with the shared built-in rules and no-op default hooks.
///
/// A target that cannot be resolved yields a form whose checks always pass.
pub fn build_form<I>(target: impl Into<FormTarget>, fields: I, handlers: Option<Handlers>) -> Form
where
    I: IntoIterator<Item = FieldSpec>,
{
    Validation::new().init(target, fields, handlers)
}
