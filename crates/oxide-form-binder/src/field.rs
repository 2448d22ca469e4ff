//! Typed arguments for each form helper.

use crate::attrs::Attributes;
use crate::error::{BinderError, Result};
use crate::kind::{FieldKind, InputKind};

/// One `<option>` of a select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Submitted value.
    pub value: String,
    /// Visible label.
    pub label: String,
}

impl SelectOption {
    /// Creates a new option.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

impl<V: Into<String>, L: Into<String>> From<(V, L)> for SelectOption {
    fn from((value, label): (V, L)) -> Self {
        Self::new(value, label)
    }
}

/// A form control call, with every argument in its slot.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    /// `label(name, text, attributes)`
    Label {
        name: String,
        text: Option<String>,
        attributes: Attributes,
    },
    /// `text(name, value, attributes)` and the other single-input helpers.
    Input {
        kind: InputKind,
        name: String,
        value: Option<String>,
        attributes: Attributes,
    },
    /// `textarea(name, value, attributes)`
    Textarea {
        name: String,
        value: Option<String>,
        attributes: Attributes,
    },
    /// `select(name, options, selected, attributes)`
    Select {
        name: String,
        options: Vec<SelectOption>,
        selected: Vec<String>,
        attributes: Attributes,
    },
    /// `checkbox(name, value, checked, attributes)`
    Checkbox {
        name: String,
        value: String,
        checked: bool,
        attributes: Attributes,
    },
    /// `radio(name, value, checked, attributes)`
    Radio {
        name: String,
        value: String,
        checked: bool,
        attributes: Attributes,
    },
    /// `image(url, name, attributes)`
    Image {
        url: String,
        name: Option<String>,
        attributes: Attributes,
    },
}

impl Field {
    /// Returns the kind of helper this call targets.
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Label { .. } => FieldKind::Label,
            Self::Input { kind, .. } => FieldKind::Input(*kind),
            Self::Textarea { .. } => FieldKind::Textarea,
            Self::Select { .. } => FieldKind::Select,
            Self::Checkbox { .. } => FieldKind::Checkbox,
            Self::Radio { .. } => FieldKind::Radio,
            Self::Image { .. } => FieldKind::Image,
        }
    }

    /// Returns the field name used for input and error lookups.
    ///
    /// An image without a name has nothing to look up.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Label { name, .. }
            | Self::Input { name, .. }
            | Self::Textarea { name, .. }
            | Self::Select { name, .. }
            | Self::Checkbox { name, .. }
            | Self::Radio { name, .. } => Some(name),
            Self::Image { name, .. } => name.as_deref(),
        }
    }

    /// Returns the control's attributes.
    pub fn attributes(&self) -> &Attributes {
        match self {
            Self::Label { attributes, .. }
            | Self::Input { attributes, .. }
            | Self::Textarea { attributes, .. }
            | Self::Select { attributes, .. }
            | Self::Checkbox { attributes, .. }
            | Self::Radio { attributes, .. }
            | Self::Image { attributes, .. } => attributes,
        }
    }

    /// Returns the control's attributes mutably.
    pub fn attributes_mut(&mut self) -> &mut Attributes {
        match self {
            Self::Label { attributes, .. }
            | Self::Input { attributes, .. }
            | Self::Textarea { attributes, .. }
            | Self::Select { attributes, .. }
            | Self::Checkbox { attributes, .. }
            | Self::Radio { attributes, .. }
            | Self::Image { attributes, .. } => attributes,
        }
    }

    /// Builds a field from positional arguments.
    ///
    /// A trailing [`Arg::Attributes`] is taken as the attribute slot wherever
    /// it appears last; omitted optional slots take their defaults.
    pub fn from_args(kind: FieldKind, mut args: Vec<Arg>) -> Result<Self> {
        let attributes = if matches!(args.last(), Some(Arg::Attributes(_))) {
            args.pop().and_then(Arg::into_attributes).unwrap_or_default()
        } else {
            Attributes::new()
        };
        let mut slots = Slots {
            method: kind.method(),
            args: args.into_iter(),
        };

        let field = match kind {
            FieldKind::Label => Self::Label {
                name: slots.required_text("name")?,
                text: slots.text()?,
                attributes,
            },
            FieldKind::Input(input) => {
                let name = slots.required_text("name")?;
                let value = if input.has_value_slot() {
                    slots.text()?
                } else {
                    None
                };
                Self::Input {
                    kind: input,
                    name,
                    value,
                    attributes,
                }
            }
            FieldKind::Textarea => Self::Textarea {
                name: slots.required_text("name")?,
                value: slots.text()?,
                attributes,
            },
            FieldKind::Select => Self::Select {
                name: slots.required_text("name")?,
                options: slots.options()?,
                selected: slots.text()?.into_iter().collect(),
                attributes,
            },
            FieldKind::Checkbox => Self::Checkbox {
                name: slots.required_text("name")?,
                value: slots.text()?.unwrap_or_else(|| "1".to_string()),
                checked: slots.flag()?,
                attributes,
            },
            FieldKind::Radio => {
                let name = slots.required_text("name")?;
                let value = slots.text()?.unwrap_or_else(|| name.clone());
                Self::Radio {
                    name,
                    value,
                    checked: slots.flag()?,
                    attributes,
                }
            }
            FieldKind::Image => Self::Image {
                url: slots.required_text("url")?,
                name: slots.text()?,
                attributes,
            },
        };

        slots.finish()?;
        Ok(field)
    }
}

/// One positional argument of a by-name form call.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// Explicitly absent.
    Null,
    /// String argument.
    Text(String),
    /// Boolean argument.
    Flag(bool),
    /// Select options.
    Options(Vec<SelectOption>),
    /// Attribute map.
    Attributes(Attributes),
}

impl Arg {
    /// Unwraps an attribute argument.
    pub fn into_attributes(self) -> Option<Attributes> {
        match self {
            Self::Attributes(attrs) => Some(attrs),
            _ => None,
        }
    }

    fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Text(_) => "text",
            Self::Flag(_) => "flag",
            Self::Options(_) => "options",
            Self::Attributes(_) => "attributes",
        }
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for Arg {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<Attributes> for Arg {
    fn from(value: Attributes) -> Self {
        Self::Attributes(value)
    }
}

impl From<Vec<SelectOption>> for Arg {
    fn from(value: Vec<SelectOption>) -> Self {
        Self::Options(value)
    }
}

impl<T: Into<Arg>> From<Option<T>> for Arg {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Cursor over positional arguments.
struct Slots {
    method: &'static str,
    args: std::vec::IntoIter<Arg>,
}

impl Slots {
    fn error(&self, message: String) -> BinderError {
        BinderError::InvalidArguments {
            method: self.method.to_string(),
            message,
        }
    }

    fn required_text(&mut self, slot: &str) -> Result<String> {
        self.text()?
            .ok_or_else(|| self.error(format!("missing {slot}")))
    }

    fn text(&mut self) -> Result<Option<String>> {
        match self.args.next() {
            None | Some(Arg::Null) => Ok(None),
            Some(Arg::Text(s)) => Ok(Some(s)),
            Some(other) => Err(self.error(format!("expected text, got {}", other.type_name()))),
        }
    }

    fn flag(&mut self) -> Result<bool> {
        match self.args.next() {
            None | Some(Arg::Null) => Ok(false),
            Some(Arg::Flag(b)) => Ok(b),
            Some(other) => Err(self.error(format!("expected flag, got {}", other.type_name()))),
        }
    }

    fn options(&mut self) -> Result<Vec<SelectOption>> {
        match self.args.next() {
            None | Some(Arg::Null) => Ok(Vec::new()),
            Some(Arg::Options(options)) => Ok(options),
            Some(other) => Err(self.error(format!("expected options, got {}", other.type_name()))),
        }
    }

    fn finish(&mut self) -> Result<()> {
        let extra = self.args.len();
        if extra == 0 {
            Ok(())
        } else {
            Err(self.error(format!("{extra} unexpected trailing argument(s)")))
        }
    }
}
