//! Presence rules: `required` and the cross-field `matches`

use crate::element::ElementKind;
use crate::registry::RuleContext;

/// Value the placeholder option of a single select submits
const UNSELECTED: &str = "0";

/// Field must carry a value.
///
/// Checkboxes and radio groups must be checked and single selects must have
/// moved off the `"0"` placeholder; every other control needs a non-blank value.
pub fn required(context: &RuleContext<'_>, _param: Option<&str>) -> bool {
    let element = context.element;
    match element.kind {
        ElementKind::Checkbox => element.checked,
        ElementKind::Radio => element.checked && !element.is_blank(),
        ElementKind::SelectOne => element.value != UNSELECTED,
        _ => !element.is_blank(),
    }
}

/// Raw value must equal the raw value of the control named by the parameter.
///
/// The other control is read straight from the form's controls, so it does not
/// need rules of its own. A missing parameter or control fails.
pub fn matches(context: &RuleContext<'_>, param: Option<&str>) -> bool {
    param
        .and_then(|other| context.other_value(other))
        .map_or(false, |other| other == context.value())
}
