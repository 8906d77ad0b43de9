//! Core traits at the seams between the validation engine and its host

use crate::element::Element;
use crate::format::{FieldResult, FormResult};

/// Read access to the controls of one form.
///
/// The engine never talks to a UI toolkit directly. Adapters implement this
/// trait (or fill a [`FormElements`](crate::element::FormElements)) and the
/// engine reads control state through it, including for cross-field rules.
pub trait ValueSource: Send + Sync {
    /// Identifier of the backing form, if it has one
    fn form_name(&self) -> Option<&str> {
        None
    }

    /// Snapshot of the named control
    fn element(&self, name: &str) -> Option<Element>;

    /// Current raw value of the named control
    fn value(&self, name: &str) -> Option<String> {
        self.element(name).map(|element| element.value)
    }

    /// Check whether the form has a control with this name
    fn contains(&self, name: &str) -> bool {
        self.element(name).is_some()
    }
}

/// Presentation callbacks invoked with formatted validation results.
///
/// Stylers only render pass/fail state; they carry no validation logic.
pub trait Styler: Send + Sync {
    /// Render the outcome of a single field
    fn field(&self, _result: &FieldResult) {}

    /// Render the outcome of the whole form
    fn form(&self, _result: &FormResult) {}
}
