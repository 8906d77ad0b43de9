//! Built-in rules for common form validation scenarios

pub mod custom;
pub mod email;
pub mod length;
pub mod numeric;
pub mod pattern;
pub mod required;

use crate::registry::RuleRegistry;

pub use custom::{pattern_rule, value_rule};

/// Seed a registry with every built-in rule
pub fn register_builtins(registry: &mut RuleRegistry) {
    registry
        .register("required", required::required)
        .register("matches", required::matches)
        .register("email", email::email)
        .register("emails", email::emails)
        .register("min_length", length::min_length)
        .register("max_length", length::max_length)
        .register("exact_length", length::exact_length)
        .register("between", length::between)
        .register("greater_than", numeric::greater_than)
        .register("less_than", numeric::less_than)
        .register("numeric", numeric::numeric)
        .register("decimal", numeric::decimal)
        .register("integer", numeric::integer)
        .register("is_natural", numeric::is_natural)
        .register("is_natural_no_zero", numeric::is_natural_no_zero)
        .register("alpha", pattern::alpha)
        .register("alpha_numeric", pattern::alpha_numeric)
        .register("alpha_dash", pattern::alpha_dash)
        .register("ip", pattern::ip)
        .register("base64", pattern::base64)
        .register("url", pattern::url);
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::element::{Element, FormElements};
    use crate::registry::{RuleContext, RuleFn};

    /// Evaluate a rule against a standalone text control
    pub fn check(rule: fn(&RuleContext<'_>, Option<&str>) -> bool, value: &str, param: Option<&str>) -> bool {
        check_element(rule, &Element::text("field", value), param)
    }

    pub fn check_element(
        rule: fn(&RuleContext<'_>, Option<&str>) -> bool,
        element: &Element,
        param: Option<&str>,
    ) -> bool {
        let elements = FormElements::new().with(element.clone());
        let context = RuleContext::new(&element.name, element, &elements);
        rule(&context, param)
    }

    pub fn check_fn(rule: &RuleFn, value: &str, param: Option<&str>) -> bool {
        let element = Element::text("field", value);
        let elements = FormElements::new().with(element.clone());
        let context = RuleContext::new("field", &element, &elements);
        rule(&context, param)
    }
}
