//! Signup Form Example
//!
//! Renders a signup form the way a handler would after a failed POST: the
//! submitted values come back from the session as old input, and fields the
//! validator rejected carry the error class.
//!
//! Run with: cargo run --example signup_form -- --verbose

use oxide_form_binder::render::html_escape;
use oxide_form_binder::{
    Attributes, BinderConfig, FormBinder, HtmlRenderer, InputData, OldInput, SelectOption,
    ValidationErrors,
};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let verbose = std::env::args().any(|arg| arg == "--verbose");
    let log_level = if verbose { Level::TRACE } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Values flashed to the session by the failed POST.
    let old: InputData = serde_json::from_str(
        r#"{
            "username": "ferris",
            "email": "ferris@",
            "country": "be",
            "newsletter": "1",
            "plan": "pro"
        }"#,
    )?;

    let mut errors = ValidationErrors::new();
    errors.add("email", "Enter a valid email address.");
    errors.add("password", "Ensure this value has at least 8 characters.");

    let config = BinderConfig::from_json(r#"{"error_class": "is-invalid"}"#)?;
    let binder = FormBinder::new(OldInput::new(InputData::new(), old), HtmlRenderer::bootstrap())
        .with_config(config)
        .with_validator(&errors);

    let countries = vec![
        SelectOption::new("be", "Belgium"),
        SelectOption::new("fr", "France"),
        SelectOption::new("nl", "Netherlands"),
    ];

    let mut form = vec![
        binder.call("open", vec!["/signup".into(), "post".into()])?,
        binder.label("username", Some("Username"), Attributes::new())?,
        binder.text("username", None, Attributes::new().with("id", "username"))?,
        binder.label("email", Some("Email"), Attributes::new())?,
        binder.email("email", None, Attributes::new().with("id", "email"))?,
    ];
    for message in binder.errors_for("email") {
        form.push(format!(
            r#"<div class="invalid-feedback">{}</div>"#,
            html_escape(message)
        ));
    }
    form.extend([
        binder.password("password", Attributes::new())?,
        binder.password("password_confirmation", Attributes::new())?,
        binder.select("country", countries, None, Attributes::new())?,
        binder.checkbox("newsletter", "1", false, Attributes::new())?,
        binder.radio("plan", "free", true, Attributes::new())?,
        binder.radio("plan", "pro", false, Attributes::new())?,
        binder.call("submit", vec!["Sign up".into()])?,
        binder.call("close", Vec::new())?,
    ]);

    info!(controls = form.len(), "rendered signup form");
    println!("{}", form.join("\n"));

    Ok(())
}
