//! The form binder.
//!
//! [`FormBinder`] sits between a view and its [`Renderer`]. For every form
//! control it intercepts, it fills the control from previously submitted
//! [`Input`] and appends the configured error class when the validator
//! reports a failure for the field. Everything else is forwarded untouched.

use tracing::{debug, trace};

use crate::attrs::Attributes;
use crate::config::BinderConfig;
use crate::error::{ErrorSource, Result};
use crate::field::{Arg, Field, SelectOption};
use crate::input::{Input, InputValue};
use crate::kind::{FieldKind, InputKind};
use crate::render::Renderer;

/// Binds form helpers to submitted input and validation state.
///
/// A binder is built per request: it owns that request's input snapshot and
/// configuration and borrows the validator, which it never modifies.
pub struct FormBinder<'v, I, R> {
    config: BinderConfig,
    validator: Option<&'v dyn ErrorSource>,
    input: I,
    renderer: R,
}

impl<I, R> std::fmt::Debug for FormBinder<'_, I, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormBinder")
            .field("config", &self.config)
            .field("has_validator", &self.validator.is_some())
            .finish_non_exhaustive()
    }
}

impl<'v, I: Input, R: Renderer> FormBinder<'v, I, R> {
    /// Creates a binder with the default configuration and no validator.
    ///
    /// Without a validator no field is ever marked invalid.
    pub fn new(input: I, renderer: R) -> Self {
        Self {
            config: BinderConfig::default(),
            validator: None,
            input,
            renderer,
        }
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: BinderConfig) -> Self {
        self.config = config;
        self
    }

    /// Attaches the validator whose errors decorate fields.
    #[must_use]
    pub fn with_validator(mut self, validator: &'v dyn ErrorSource) -> Self {
        self.validator = Some(validator);
        self
    }

    /// Stores the validator and, optionally, a new error class for
    /// subsequent calls.
    pub fn configure(&mut self, validator: &'v dyn ErrorSource, error_class: Option<&str>) {
        self.validator = Some(validator);
        if let Some(class) = error_class {
            self.set_error_class(class);
        }
    }

    /// Sets the class appended to invalid controls.
    pub fn set_error_class(&mut self, class: impl Into<String>) {
        self.config.error_class = class.into();
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &BinderConfig {
        &self.config
    }

    /// Returns whether `name` failed validation.
    ///
    /// A confirmation field (`password_confirmation`) also fails when its
    /// base field (`password`) did.
    pub fn is_invalid(&self, name: &str) -> bool {
        let Some(validator) = self.validator else {
            return false;
        };
        validator.has_error(name)
            || self
                .config
                .confirmed_field(name)
                .is_some_and(|base| validator.has_error(base))
    }

    /// Returns the error messages to show beside `name`.
    ///
    /// Messages recorded for the field itself come first, followed by those
    /// inherited from the base field of a confirmation field.
    pub fn errors_for(&self, name: &str) -> Vec<&'v str> {
        let Some(validator) = self.validator else {
            return Vec::new();
        };
        let own = validator.messages(name).unwrap_or_default();
        let inherited = self
            .config
            .confirmed_field(name)
            .and_then(|base| validator.messages(base))
            .unwrap_or_default();
        own.iter()
            .chain(inherited)
            .map(String::as_str)
            .collect()
    }

    /// Returns the submitted value for `name`, falling back to `default`.
    ///
    /// Any submitted value wins, including `"0"` and the empty string.
    pub fn resolve_value(&self, name: &str, default: Option<&str>) -> Option<String> {
        match self.input.get(name) {
            Some(submitted) => Some(submitted.to_form_string()),
            None => default.map(str::to_string),
        }
    }

    /// Applies error decoration and submitted input to a control without
    /// rendering it.
    pub fn bind(&self, mut field: Field) -> Field {
        let Some(name) = field.name().map(str::to_string) else {
            return field;
        };

        if self.is_invalid(&name) {
            debug!(field = %name, class = %self.config.error_class, "marking field invalid");
            field.attributes_mut().append_class(&self.config.error_class);
        }

        if field.kind().repopulates() {
            if let Some(submitted) = self.input.get(&name) {
                trace!(field = %name, kind = %field.kind(), "repopulating from submitted input");
                apply_submitted(&mut field, &submitted);
            }
        }

        field
    }

    /// Binds and renders a control.
    pub fn field(&self, field: Field) -> Result<String> {
        self.renderer.render_field(&self.bind(field))
    }

    /// Renders a helper by method name with positional arguments.
    ///
    /// Recognized field kinds are bound first; any other method goes to
    /// [`FormBinder::passthrough`] with its arguments unchanged.
    pub fn call(&self, method: &str, args: Vec<Arg>) -> Result<String> {
        match FieldKind::from_method(method) {
            Some(kind) => self.field(Field::from_args(kind, args)?),
            None => self.passthrough(method, &args),
        }
    }

    /// Forwards a call the binder does not decorate.
    pub fn passthrough(&self, method: &str, args: &[Arg]) -> Result<String> {
        debug!(method, args = args.len(), "forwarding form method to renderer");
        self.renderer.render_other(method, args)
    }

    /// Renders a label.
    pub fn label(&self, name: &str, text: Option<&str>, attributes: Attributes) -> Result<String> {
        self.field(Field::Label {
            name: name.to_string(),
            text: text.map(str::to_string),
            attributes,
        })
    }

    fn input(
        &self,
        kind: InputKind,
        name: &str,
        default: Option<&str>,
        attributes: Attributes,
    ) -> Result<String> {
        self.field(Field::Input {
            kind,
            name: name.to_string(),
            value: default.map(str::to_string),
            attributes,
        })
    }

    /// Renders a text input.
    pub fn text(&self, name: &str, default: Option<&str>, attributes: Attributes) -> Result<String> {
        self.input(InputKind::Text, name, default, attributes)
    }

    /// Renders a password input. Submitted passwords are never echoed back.
    pub fn password(&self, name: &str, attributes: Attributes) -> Result<String> {
        self.input(InputKind::Password, name, None, attributes)
    }

    /// Renders a search input.
    pub fn search(&self, name: &str, default: Option<&str>, attributes: Attributes) -> Result<String> {
        self.input(InputKind::Search, name, default, attributes)
    }

    /// Renders an email input.
    pub fn email(&self, name: &str, default: Option<&str>, attributes: Attributes) -> Result<String> {
        self.input(InputKind::Email, name, default, attributes)
    }

    /// Renders a telephone input.
    pub fn telephone(
        &self,
        name: &str,
        default: Option<&str>,
        attributes: Attributes,
    ) -> Result<String> {
        self.input(InputKind::Telephone, name, default, attributes)
    }

    /// Renders a URL input.
    pub fn url(&self, name: &str, default: Option<&str>, attributes: Attributes) -> Result<String> {
        self.input(InputKind::Url, name, default, attributes)
    }

    /// Renders a number input.
    pub fn number(&self, name: &str, default: Option<&str>, attributes: Attributes) -> Result<String> {
        self.input(InputKind::Number, name, default, attributes)
    }

    /// Renders a date input.
    pub fn date(&self, name: &str, default: Option<&str>, attributes: Attributes) -> Result<String> {
        self.input(InputKind::Date, name, default, attributes)
    }

    /// Renders a hidden input. The server-side value is always kept.
    pub fn hidden(&self, name: &str, default: Option<&str>, attributes: Attributes) -> Result<String> {
        self.input(InputKind::Hidden, name, default, attributes)
    }

    /// Renders a file input.
    pub fn file(&self, name: &str, attributes: Attributes) -> Result<String> {
        self.input(InputKind::File, name, None, attributes)
    }

    /// Renders a textarea.
    pub fn textarea(
        &self,
        name: &str,
        default: Option<&str>,
        attributes: Attributes,
    ) -> Result<String> {
        self.field(Field::Textarea {
            name: name.to_string(),
            value: default.map(str::to_string),
            attributes,
        })
    }

    /// Renders a select with `default` pre-selected unless input overrides it.
    pub fn select(
        &self,
        name: &str,
        options: Vec<SelectOption>,
        default: Option<&str>,
        attributes: Attributes,
    ) -> Result<String> {
        self.field(Field::Select {
            name: name.to_string(),
            options,
            selected: default.map(str::to_string).into_iter().collect(),
            attributes,
        })
    }

    /// Renders a checkbox.
    pub fn checkbox(
        &self,
        name: &str,
        value: &str,
        checked: bool,
        attributes: Attributes,
    ) -> Result<String> {
        self.field(Field::Checkbox {
            name: name.to_string(),
            value: value.to_string(),
            checked,
            attributes,
        })
    }

    /// Renders one radio option.
    pub fn radio(
        &self,
        name: &str,
        value: &str,
        checked: bool,
        attributes: Attributes,
    ) -> Result<String> {
        self.field(Field::Radio {
            name: name.to_string(),
            value: value.to_string(),
            checked,
            attributes,
        })
    }

    /// Renders an image submit input.
    pub fn image(&self, url: &str, name: Option<&str>, attributes: Attributes) -> Result<String> {
        self.field(Field::Image {
            url: url.to_string(),
            name: name.map(str::to_string),
            attributes,
        })
    }
}

/// Routes a submitted value into the slot each kind reads it from.
fn apply_submitted(field: &mut Field, submitted: &InputValue) {
    match field {
        Field::Input { value, .. } | Field::Textarea { value, .. } => {
            *value = Some(submitted.to_form_string());
        }
        Field::Select { selected, .. } => *selected = submitted.values(),
        Field::Checkbox { value, checked, .. } => {
            // A group submits the list of ticked values; a lone box is on or off.
            *checked = match submitted {
                InputValue::List(_) => submitted.matches(value),
                _ => submitted.is_truthy(),
            };
        }
        Field::Radio { value, checked, .. } => *checked = submitted.matches(value),
        Field::Label { .. } | Field::Image { .. } => {}
    }
}
