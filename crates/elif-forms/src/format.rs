//! Plain result records handed to hooks and stylers
//!
//! Records are owned copies of field and form state. Changing them never
//! touches the live validation state.

use crate::element::Element;
use crate::field::Field;
use crate::form::Form;
use serde::{Deserialize, Serialize};

/// Outcome of one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldResult {
    pub name: String,
    pub element: Option<Element>,
    pub is_valid: bool,
    pub message: String,
}

/// Outcome of the whole form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormResult {
    pub name: Option<String>,
    /// `None` until the form has been checked
    pub is_valid: Option<bool>,
}

pub fn format_field(field: &Field) -> FieldResult {
    FieldResult {
        name: field.name().to_string(),
        element: field.element(),
        is_valid: field.is_valid(),
        message: field.message().to_string(),
    }
}

pub fn format_fields(fields: &[Field]) -> Vec<FieldResult> {
    fields.iter().map(format_field).collect()
}

pub fn format_form(form: &Form) -> FormResult {
    FormResult {
        name: form.name(),
        is_valid: form.is_valid(),
    }
}
