//! Binder configuration.

use serde::Deserialize;

use crate::error::Result;

/// Settings for one binder, usually built once per request or application.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BinderConfig {
    /// Class token appended to controls that failed validation.
    pub error_class: String,
    /// Name suffix marking a confirmation field, e.g. `password_confirmation`.
    pub confirmation_suffix: String,
}

impl BinderConfig {
    /// Default error class.
    pub const DEFAULT_ERROR_CLASS: &'static str = "form-error";

    /// Default confirmation suffix.
    pub const DEFAULT_CONFIRMATION_SUFFIX: &'static str = "_confirmation";

    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the error class.
    #[must_use]
    pub fn error_class(mut self, class: impl Into<String>) -> Self {
        self.error_class = class.into();
        self
    }

    /// Sets the confirmation suffix.
    #[must_use]
    pub fn confirmation_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.confirmation_suffix = suffix.into();
        self
    }

    /// Loads a configuration from JSON; missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Returns the base field name if `field` is a confirmation field.
    ///
    /// Only a true suffix counts: `password_confirmation` maps to `password`,
    /// while `password_confirmation_hint` and a bare `_confirmation` do not.
    pub fn confirmed_field<'a>(&self, field: &'a str) -> Option<&'a str> {
        if self.confirmation_suffix.is_empty() {
            return None;
        }
        field
            .strip_suffix(self.confirmation_suffix.as_str())
            .filter(|base| !base.is_empty())
    }
}

impl Default for BinderConfig {
    fn default() -> Self {
        Self {
            error_class: Self::DEFAULT_ERROR_CLASS.to_string(),
            confirmation_suffix: Self::DEFAULT_CONFIRMATION_SUFFIX.to_string(),
        }
    }
}
