//! Field kinds the binder knows how to decorate.

/// Single-`<input>` control kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    /// `type="text"`
    Text,
    /// `type="password"`
    Password,
    /// `type="search"`
    Search,
    /// `type="email"`
    Email,
    /// `type="tel"`
    Telephone,
    /// `type="url"`
    Url,
    /// `type="number"`
    Number,
    /// `type="date"`
    Date,
    /// `type="file"`
    File,
    /// `type="hidden"`
    Hidden,
}

impl InputKind {
    /// Returns the HTML `type` attribute value.
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Password => "password",
            Self::Search => "search",
            Self::Email => "email",
            Self::Telephone => "tel",
            Self::Url => "url",
            Self::Number => "number",
            Self::Date => "date",
            Self::File => "file",
            Self::Hidden => "hidden",
        }
    }

    /// Returns whether the control carries a value slot.
    ///
    /// Password and file inputs take only a name and attributes.
    pub fn has_value_slot(self) -> bool {
        !matches!(self, Self::Password | Self::File)
    }
}

/// A form helper the binder intercepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// `<label>` for a field.
    Label,
    /// Any single `<input>` control.
    Input(InputKind),
    /// `<textarea>`
    Textarea,
    /// `<select>`
    Select,
    /// Checkbox input.
    Checkbox,
    /// Radio input.
    Radio,
    /// Image submit input.
    Image,
}

impl FieldKind {
    /// Maps a form-helper method name to its kind.
    ///
    /// Returns `None` for methods the binder does not decorate; those are
    /// forwarded to the renderer untouched.
    pub fn from_method(method: &str) -> Option<Self> {
        let kind = match method {
            "label" => Self::Label,
            "text" => Self::Input(InputKind::Text),
            "password" => Self::Input(InputKind::Password),
            "search" => Self::Input(InputKind::Search),
            "email" => Self::Input(InputKind::Email),
            "telephone" | "tel" => Self::Input(InputKind::Telephone),
            "url" => Self::Input(InputKind::Url),
            "number" => Self::Input(InputKind::Number),
            "date" => Self::Input(InputKind::Date),
            "file" => Self::Input(InputKind::File),
            "hidden" => Self::Input(InputKind::Hidden),
            "textarea" => Self::Textarea,
            "select" => Self::Select,
            "checkbox" => Self::Checkbox,
            "radio" => Self::Radio,
            "image" => Self::Image,
            _ => return None,
        };
        Some(kind)
    }

    /// Returns the canonical method name.
    pub fn method(self) -> &'static str {
        match self {
            Self::Label => "label",
            Self::Input(InputKind::Telephone) => "telephone",
            Self::Input(kind) => kind.input_type(),
            Self::Textarea => "textarea",
            Self::Select => "select",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
            Self::Image => "image",
        }
    }

    /// Returns whether submitted input is routed back into this control.
    pub fn repopulates(self) -> bool {
        match self {
            Self::Input(kind) => !matches!(
                kind,
                InputKind::Password | InputKind::File | InputKind::Hidden
            ),
            Self::Textarea | Self::Select | Self::Checkbox | Self::Radio => true,
            Self::Label | Self::Image => false,
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.method())
    }
}
