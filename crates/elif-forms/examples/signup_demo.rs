//! Signup form demo showing rules, hooks, events and form definitions

use elif_forms::validators::value_rule;
use elif_forms::{Element, FieldEvent, FieldSpec, Form, FormConfig, FormElements, TracingStyler, Validation};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("🦀 elif-forms Demo");
    println!("==================\n");

    // Demo 1: Declarative fields
    demo_declarative_fields();

    // Demo 2: Field events
    demo_field_events();

    // Demo 3: Custom rules
    demo_custom_rules();

    // Demo 4: Form definitions from YAML
    demo_form_config()?;

    println!("✅ All form demos completed successfully!");
    Ok(())
}

fn signup_elements() -> Arc<FormElements> {
    FormElements::named("signup")
        .with(Element::text("username", "jane_doe"))
        .with(Element::text("email", "jane@example"))
        .with(Element::password("password", "hunter"))
        .with(Element::password("password_confirmation", "hunter2"))
        .with(Element::checkbox("terms", false))
        .shared()
}

fn signup_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::new("username")
            .rules(["required", "alpha_dash", "between[3,20]"])
            .messages(["Pick a username", "Letters, digits and dashes only", "3 to 20 characters"]),
        FieldSpec::new("email")
            .rules(["required", "email"])
            .messages(["Email is required", "That does not look like an email"]),
        FieldSpec::new("password")
            .rules(["required", "min_length[8]"])
            .messages(["Choose a password", "At least 8 characters"]),
        FieldSpec::new("password_confirmation")
            .rule("matches[password]")
            .message("Passwords do not match"),
        FieldSpec::new("terms").rule("required").message("Please accept the terms"),
    ]
}

fn print_results(form: &Form) {
    for result in form.results() {
        if result.is_valid {
            println!("  ✓ {}", result.name);
        } else {
            println!("  ✗ {}: {}", result.name, result.message);
        }
    }
}

fn demo_declarative_fields() {
    println!("📝 Demo 1: Declarative Fields");
    println!("-----------------------------");

    let validation = Validation::new().with_styler(Arc::new(TracingStyler));
    let elements = signup_elements();
    let mut form = validation.init(elements.clone(), signup_fields(), None);

    println!("First submission valid: {}", form.submit());
    print_results(&form);

    elements.set_value("email", "jane@example.com");
    elements.set_value("password", "hunter22");
    elements.set_value("password_confirmation", "hunter22");
    elements.set_checked("terms", true);

    println!("After corrections valid: {}", form.submit());
    print_results(&form);
    println!();
}

fn demo_field_events() {
    println!("⌨️  Demo 2: Field Events");
    println!("------------------------");

    let elements = signup_elements();
    let mut form = Validation::new().init(elements.clone(), signup_fields(), None);

    println!("KeyUp before any check: {:?}", form.handle_event("email", FieldEvent::KeyUp));
    println!("FocusOut on email: {:?}", form.handle_event("email", FieldEvent::FocusOut));

    elements.set_value("email", "jane@example.com");
    println!("KeyUp after correction: {:?}", form.handle_event("email", FieldEvent::KeyUp));
    println!("Click on terms: {:?}", form.handle_event("terms", FieldEvent::Click));
    println!();
}

fn demo_custom_rules() {
    println!("🔧 Demo 3: Custom Rules");
    println!("-----------------------");

    let mut validation = Validation::new();
    validation.register_rules(vec![(
        "not_reserved",
        value_rule(|value, _| !matches!(value, "admin" | "root")),
    )]);
    validation.register_rule("no_spaces", |context, _| !context.value().contains(' '));

    let elements = FormElements::named("profile")
        .with(Element::text("handle", "admin"))
        .with(Element::text("display_name", "Jane Doe"))
        .shared();
    let mut form = validation.init(
        elements,
        vec![
            FieldSpec::new("handle")
                .rules(["required", "not_reserved", "no_spaces"])
                .messages(["Pick a handle", "That handle is reserved", "No spaces allowed"]),
            FieldSpec::new("display_name")
                .predicate(|element| element.value.chars().count() <= 32)
                .message("Too long"),
        ],
        None,
    );

    println!("Profile valid: {}", form.check());
    print_results(&form);
    println!();
}

fn demo_form_config() -> Result<(), Box<dyn std::error::Error>> {
    println!("📄 Demo 4: Form Definitions");
    println!("---------------------------");

    let config = FormConfig::from_yaml_str(
        r#"
form: signup
fields:
  - name: [username, email]
    rules: required
    messages: This field is required
  - name: email
    rules: [email]
    messages: [That does not look like an email]
    options:
      onkeyup: false
"#,
    )?;

    let mut validation = Validation::new();
    validation.document_mut().add_named_form(signup_elements());

    let target = config.form.clone().unwrap_or_default();
    let mut form = validation.init(target, config.into_field_specs(), None);

    let is_valid = form.check();
    println!("Loaded {} field(s), valid: {}", form.fields().len(), is_valid);
    print_results(&form);
    println!();
    Ok(())
}
