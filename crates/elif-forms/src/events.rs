//! Routing of host UI events to form and field checks
//!
//! Adapters translate their toolkit events into [`FieldEvent`]s and call
//! [`Form::handle_event`]; submission maps to [`Form::submit`].

use crate::element::ElementKind;
use crate::form::Form;
use serde::{Deserialize, Serialize};

/// UI events that can trigger a field check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldEvent {
    KeyUp,
    FocusOut,
    Click,
}

impl FieldEvent {
    /// Whether this event is routed for controls of `kind`
    pub fn targets(&self, kind: ElementKind) -> bool {
        match self {
            FieldEvent::KeyUp | FieldEvent::FocusOut => kind.is_text_like(),
            FieldEvent::Click => kind.is_toggle(),
        }
    }
}

impl Form {
    /// Handle a UI event on the named control.
    ///
    /// Returns the resulting validity, or `None` when the event triggered no
    /// check. Key presses only re-validate a field that was checked before,
    /// and re-run the whole form once it has been submitted.
    pub fn handle_event(&mut self, name: &str, event: FieldEvent) -> Option<bool> {
        let (kind, options, field_validated) = {
            let field = self.find_field(name)?;
            (field.element()?.kind, field.options(), field.validated())
        };
        if !event.targets(kind) {
            return None;
        }

        match event {
            FieldEvent::KeyUp => {
                if !options.onkeyup || !field_validated {
                    return None;
                }
                if self.validated() {
                    Some(self.check())
                } else {
                    Some(self.check_field(name))
                }
            }
            FieldEvent::FocusOut => {
                if !options.onfocusout {
                    return None;
                }
                Some(self.check_field(name))
            }
            FieldEvent::Click => Some(self.check_field(name)),
        }
    }

    /// Check the form on submission; `false` means the submission must be cancelled
    pub fn submit(&mut self) -> bool {
        self.check()
    }
}
