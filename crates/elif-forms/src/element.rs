//! Host-neutral model of form controls
//!
//! Adapters mirror the state of their UI controls into these snapshots. The
//! validation engine reads them through the [`ValueSource`] trait and never holds
//! a reference into the host toolkit.

use crate::traits::ValueSource;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Kind of form control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementKind {
    Text,
    Password,
    Textarea,
    File,
    Hidden,
    SelectOne,
    SelectMultiple,
    Checkbox,
    Radio,
}

impl ElementKind {
    /// Controls that report changes through key presses and focus loss
    pub fn is_text_like(&self) -> bool {
        matches!(
            self,
            ElementKind::Text
                | ElementKind::Password
                | ElementKind::Textarea
                | ElementKind::File
                | ElementKind::SelectOne
                | ElementKind::SelectMultiple
        )
    }

    /// Controls that report changes through clicks
    pub fn is_toggle(&self) -> bool {
        matches!(self, ElementKind::Checkbox | ElementKind::Radio)
    }
}

/// Detached snapshot of a single form control
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub name: String,
    pub kind: ElementKind,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub disabled: bool,
}

impl Element {
    /// Create a control of the given kind
    pub fn new(name: impl Into<String>, kind: ElementKind, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            value: value.into(),
            checked: false,
            disabled: false,
        }
    }

    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, ElementKind::Text, value)
    }

    pub fn password(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, ElementKind::Password, value)
    }

    pub fn textarea(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, ElementKind::Textarea, value)
    }

    pub fn file(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, ElementKind::File, value)
    }

    pub fn hidden(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, ElementKind::Hidden, value)
    }

    /// Single-choice select with the currently selected value
    pub fn select(name: impl Into<String>, selected: impl Into<String>) -> Self {
        Self::new(name, ElementKind::SelectOne, selected)
    }

    /// Checkbox submitting `"on"` when checked
    pub fn checkbox(name: impl Into<String>, checked: bool) -> Self {
        Self::new(name, ElementKind::Checkbox, "on").checked(checked)
    }

    /// One option of a radio group; options share `name` and differ by `value`
    pub fn radio(name: impl Into<String>, value: impl Into<String>, checked: bool) -> Self {
        Self::new(name, ElementKind::Radio, value).checked(checked)
    }

    /// Replace the raw value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Set the checked state
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Set the disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Check whether the value is empty after trimming whitespace
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }
}

/// In-memory control collection for one form.
///
/// Adapters keep it in sync with the host controls; the engine shares it with
/// every field through an `Arc`. Insertion order is preserved.
#[derive(Debug, Default)]
pub struct FormElements {
    name: Option<String>,
    elements: RwLock<Vec<Element>>,
}

impl FormElements {
    /// Create an empty, unnamed collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty collection for the named form
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            elements: RwLock::new(Vec::new()),
        }
    }

    /// Add a control, consuming and returning the collection
    pub fn with(self, element: Element) -> Self {
        self.insert(element);
        self
    }

    /// Wrap the collection for sharing with a form
    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Add a control; a control with the same name is replaced.
    ///
    /// Radio buttons sharing a name form a group: a radio with a new value is
    /// added as another option, one with a known value replaces that option.
    pub fn insert(&self, element: Element) {
        let mut elements = self.elements.write().expect("Form elements lock poisoned");
        let position = elements.iter().position(|existing| {
            existing.name == element.name
                && (!is_radio_pair(existing, &element) || existing.value == element.value)
        });
        match position {
            Some(index) => elements[index] = element,
            None => elements.push(element),
        }
    }

    /// Remove a control or a whole radio group, returning its last snapshot
    pub fn remove(&self, name: &str) -> Option<Element> {
        let mut elements = self.elements.write().expect("Form elements lock poisoned");
        let removed = snapshot(&elements, name)?;
        elements.retain(|element| element.name != name);
        Some(removed)
    }

    /// Update the raw value of a control.
    ///
    /// For a radio group this selects the option carrying `value`; no option
    /// matching leaves the group unchecked.
    pub fn set_value(&self, name: &str, value: impl Into<String>) -> bool {
        let value = value.into();
        self.update(name, |group| {
            if is_radio_group(group) {
                for option in group.iter_mut() {
                    option.checked = option.value == value;
                }
            } else {
                for element in group.iter_mut() {
                    element.value = value.clone();
                }
            }
        })
    }

    /// Update the checked state of a checkbox or radio.
    ///
    /// Checking a radio group selects its first option; unchecking clears it.
    pub fn set_checked(&self, name: &str, checked: bool) -> bool {
        self.update(name, |group| {
            let radio = is_radio_group(group);
            for (index, element) in group.iter_mut().enumerate() {
                element.checked = checked && (!radio || index == 0);
            }
        })
    }

    /// Enable or disable a control or every option of a radio group
    pub fn set_disabled(&self, name: &str, disabled: bool) -> bool {
        self.update(name, |group| {
            for element in group.iter_mut() {
                element.disabled = disabled;
            }
        })
    }

    /// Names of all controls in insertion order; a radio group is listed once
    pub fn names(&self) -> Vec<String> {
        let elements = self.elements.read().expect("Form elements lock poisoned");
        let mut names: Vec<String> = Vec::with_capacity(elements.len());
        for element in elements.iter() {
            if !names.contains(&element.name) {
                names.push(element.name.clone());
            }
        }
        names
    }

    /// Number of named controls
    pub fn len(&self) -> usize {
        self.names().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn update(&self, name: &str, apply: impl FnOnce(&mut [&mut Element])) -> bool {
        let mut elements = self.elements.write().expect("Form elements lock poisoned");
        let mut group: Vec<&mut Element> = elements
            .iter_mut()
            .filter(|element| element.name == name)
            .collect();
        if group.is_empty() {
            return false;
        }
        apply(group.as_mut_slice());
        true
    }
}

fn is_radio_pair(left: &Element, right: &Element) -> bool {
    left.kind == ElementKind::Radio && right.kind == ElementKind::Radio
}

fn is_radio_group(group: &[&mut Element]) -> bool {
    group.iter().all(|element| element.kind == ElementKind::Radio)
}

/// Snapshot of the control named `name`.
///
/// A radio group reads as one control: its value is that of the checked option
/// (empty when none is checked) and it is disabled only when every option is.
fn snapshot(elements: &[Element], name: &str) -> Option<Element> {
    let mut group = elements.iter().filter(|element| element.name == name);
    let first = group.next()?;
    if first.kind != ElementKind::Radio {
        return Some(first.clone());
    }

    let options: Vec<&Element> = std::iter::once(first).chain(group).collect();
    let selected = options.iter().find(|option| option.checked);
    Some(Element {
        name: first.name.clone(),
        kind: ElementKind::Radio,
        value: selected.map(|option| option.value.clone()).unwrap_or_default(),
        checked: selected.is_some(),
        disabled: options.iter().all(|option| option.disabled),
    })
}

impl ValueSource for FormElements {
    fn form_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn element(&self, name: &str) -> Option<Element> {
        let elements = self.elements.read().expect("Form elements lock poisoned");
        snapshot(&elements, name)
    }
}

/// Named collection of forms used to resolve a form by identifier
#[derive(Default, Clone)]
pub struct Document {
    forms: HashMap<String, Arc<dyn ValueSource>>,
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&String> = self.forms.keys().collect();
        names.sort();
        f.debug_struct("Document").field("forms", &names).finish()
    }
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a form under a name; an existing form with that name is replaced
    pub fn add_form(&mut self, name: impl Into<String>, source: Arc<dyn ValueSource>) -> &mut Self {
        self.forms.insert(name.into(), source);
        self
    }

    /// Register a form under its own name, if it has one
    pub fn add_named_form(&mut self, source: Arc<dyn ValueSource>) -> &mut Self {
        if let Some(name) = source.form_name().map(str::to_string) {
            self.forms.insert(name, source);
        }
        self
    }

    /// Look up a form by name
    pub fn form(&self, name: &str) -> Option<Arc<dyn ValueSource>> {
        self.forms.get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }
}
