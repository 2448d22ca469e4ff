//! Previously submitted input.

use std::collections::HashMap;

use serde::Deserialize;

/// A submitted form value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum InputValue {
    /// Checkbox-style boolean.
    Bool(bool),
    /// Numeric value, integer or float.
    Number(serde_json::Number),
    /// Plain text.
    Text(String),
    /// Multiple values under one name (multi-select, checkbox groups).
    List(Vec<String>),
}

impl InputValue {
    /// Returns whether the value counts as "on".
    ///
    /// Empty text, `"0"`, zero, `false` and an empty list are off.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
            Self::Text(s) => !s.is_empty() && s != "0",
            Self::List(items) => !items.is_empty(),
        }
    }

    /// Returns the value as it would appear in a form control.
    pub fn to_form_string(&self) -> String {
        match self {
            Self::Bool(true) => "1".to_string(),
            Self::Bool(false) => "0".to_string(),
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
            Self::List(items) => items.join(","),
        }
    }

    /// Returns every value carried, one per selected option.
    pub fn values(&self) -> Vec<String> {
        match self {
            Self::List(items) => items.clone(),
            other => vec![other.to_form_string()],
        }
    }

    /// Returns whether this value selects the option `value`.
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Self::List(items) => items.iter().any(|item| item == value),
            other => other.to_form_string() == value,
        }
    }
}

impl From<&str> for InputValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for InputValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for InputValue {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<bool> for InputValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Vec<String>> for InputValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

/// Source of previously submitted values, keyed by field name.
pub trait Input {
    /// Returns the submitted value for `name`, or `None` when nothing was submitted.
    fn get(&self, name: &str) -> Option<InputValue>;
}

impl<T: Input + ?Sized> Input for &T {
    fn get(&self, name: &str) -> Option<InputValue> {
        (**self).get(name)
    }
}

impl Input for HashMap<String, String> {
    fn get(&self, name: &str) -> Option<InputValue> {
        HashMap::get(self, name).map(|v| InputValue::Text(v.clone()))
    }
}

impl Input for HashMap<String, InputValue> {
    fn get(&self, name: &str) -> Option<InputValue> {
        HashMap::get(self, name).cloned()
    }
}

/// Input with nothing submitted.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInput;

impl Input for NoInput {
    fn get(&self, _name: &str) -> Option<InputValue> {
        None
    }
}

/// Map-backed input snapshot.
///
/// Deserializes from a JSON object; `null` entries count as not submitted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "HashMap<String, Option<InputValue>>")]
pub struct InputData {
    values: HashMap<String, InputValue>,
}

impl InputData {
    /// Creates an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a submitted value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<InputValue>) {
        self.values.insert(name.into(), value.into());
    }

    /// Builder form of [`InputData::insert`].
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<InputValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Returns whether nothing was submitted.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<HashMap<String, Option<InputValue>>> for InputData {
    fn from(raw: HashMap<String, Option<InputValue>>) -> Self {
        Self {
            values: raw
                .into_iter()
                .filter_map(|(name, value)| value.map(|v| (name, v)))
                .collect(),
        }
    }
}

impl Input for InputData {
    fn get(&self, name: &str) -> Option<InputValue> {
        self.values.get(name).cloned()
    }
}

/// Current request input layered over input flashed from the previous request.
///
/// After a failed submission the handler usually redirects back to the form;
/// the submitted values then live in the session as "old" input. Values in
/// the current request win.
#[derive(Debug, Clone, Default)]
pub struct OldInput<C, O> {
    current: C,
    old: O,
}

impl<C: Input, O: Input> OldInput<C, O> {
    /// Layers `current` over `old`.
    pub fn new(current: C, old: O) -> Self {
        Self { current, old }
    }
}

impl<C: Input, O: Input> Input for OldInput<C, O> {
    fn get(&self, name: &str) -> Option<InputValue> {
        self.current.get(name).or_else(|| self.old.get(name))
    }
}
