//! Error types and the validation-state collaborator.

use std::collections::HashMap;
use thiserror::Error;

/// Errors surfaced by the binder or its renderer.
#[derive(Debug, Error)]
pub enum BinderError {
    /// Arguments of a by-name call do not fit the field kind's positional contract.
    #[error("invalid arguments for {method}: {message}")]
    InvalidArguments { method: String, message: String },

    /// The renderer does not know the passthrough method.
    #[error("unknown form method: {0}")]
    UnknownMethod(String),

    /// The renderer failed to produce markup.
    #[error("render failed: {0}")]
    Render(String),

    /// Configuration could not be decoded.
    #[error("invalid binder configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type alias for binder operations.
pub type Result<T> = std::result::Result<T, BinderError>;

/// Read-only view of a validator's outcome.
///
/// The binder only ever asks whether a field failed and which messages it
/// carries; it never adds or clears errors.
pub trait ErrorSource {
    /// Returns the messages recorded for `field`, if any.
    fn messages(&self, field: &str) -> Option<&[String]>;

    /// Returns whether `field` has at least one error entry.
    fn has_error(&self, field: &str) -> bool {
        self.messages(field).is_some()
    }
}

/// Collection of validation errors by field.
#[derive(Debug, Clone, Default)]
pub struct ValidationErrors {
    /// Errors keyed by field name.
    pub errors: HashMap<String, Vec<String>>,
}

impl ValidationErrors {
    /// Creates a new empty ValidationErrors.
    pub fn new() -> Self {
        Self {
            errors: HashMap::new(),
        }
    }

    /// Adds an error for a field.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Builder form of [`ValidationErrors::add`].
    #[must_use]
    pub fn with(mut self, field: &str, message: impl Into<String>) -> Self {
        self.add(field, message);
        self
    }

    /// Returns whether there are any errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of fields with errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns errors for a specific field.
    pub fn get(&self, field: &str) -> Option<&Vec<String>> {
        self.errors.get(field)
    }
}

impl ErrorSource for ValidationErrors {
    fn messages(&self, field: &str) -> Option<&[String]> {
        self.errors.get(field).map(Vec::as_slice)
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (field, messages) in &self.errors {
            for message in messages {
                writeln!(f, "{field}: {message}")?;
            }
        }
        Ok(())
    }
}
