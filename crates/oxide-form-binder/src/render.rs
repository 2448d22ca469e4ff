//! The rendering collaborator and a plain HTML implementation of it.

use ironhtml::html;

use crate::attrs::Attributes;
use crate::error::{BinderError, Result};
use crate::field::{Arg, Field, SelectOption};
use crate::kind::InputKind;

/// Turns form calls into markup.
///
/// The binder hands decorated [`Field`]s to [`Renderer::render_field`] and
/// forwards every method it does not recognize to [`Renderer::render_other`]
/// with the caller's arguments as given. Errors from either method reach the
/// binder's caller unchanged.
pub trait Renderer {
    /// Renders a recognized form control.
    fn render_field(&self, field: &Field) -> Result<String>;

    /// Renders a helper the binder does not intercept (`open`, `submit`, ...).
    fn render_other(&self, method: &str, args: &[Arg]) -> Result<String>;
}

impl<R: Renderer + ?Sized> Renderer for &R {
    fn render_field(&self, field: &Field) -> Result<String> {
        (**self).render_field(field)
    }

    fn render_other(&self, method: &str, args: &[Arg]) -> Result<String> {
        (**self).render_other(method, args)
    }
}

/// HTML renderer for form controls.
///
/// With Bootstrap styling enabled, base classes (`form-control`,
/// `form-select`, `form-check-input`, `form-label`) are placed ahead of any
/// caller classes.
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    /// Whether to prepend Bootstrap 5 base classes.
    pub bootstrap: bool,
}

impl HtmlRenderer {
    /// Creates an unstyled renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a renderer that adds Bootstrap 5 base classes.
    pub fn bootstrap() -> Self {
        Self { bootstrap: true }
    }

    fn styled(&self, attributes: &Attributes, base: &str) -> Attributes {
        let mut attrs = attributes.clone();
        if self.bootstrap {
            let class = match attrs.get_str("class") {
                Some(extra) if !extra.is_empty() => format!("{base} {extra}"),
                _ => base.to_string(),
            };
            attrs.set("class", class);
        }
        attrs
    }

    fn render_label(&self, name: &str, text: Option<&str>, attributes: &Attributes) -> String {
        let for_id = name.to_string();
        let label_text = text.unwrap_or(name).to_string();
        let label = html! {
            label.for_(#for_id) { #label_text }
        }
        .render();
        // Caller attributes have runtime names, so they are spliced into the
        // opening tag rather than set through the typed builder.
        let attrs = self.styled(attributes, "form-label");
        label.replacen("<label", &format!("<label{}", extra_attrs(&attrs)), 1)
    }

    fn render_input(
        &self,
        kind: InputKind,
        name: &str,
        value: Option<&str>,
        attributes: &Attributes,
    ) -> String {
        let attrs = if kind == InputKind::Hidden {
            attributes.clone()
        } else {
            self.styled(attributes, "form-control")
        };
        let value_attr = value
            .map(|v| format!(r#" value="{}""#, html_escape(v)))
            .unwrap_or_default();
        format!(
            r#"<input type="{}" name="{}"{value_attr}{}>"#,
            kind.input_type(),
            html_escape(name),
            extra_attrs(&attrs)
        )
    }

    fn render_textarea(&self, name: &str, value: Option<&str>, attributes: &Attributes) -> String {
        let mut attrs = self.styled(attributes, "form-control");
        if attrs.get("rows").is_none() {
            attrs.set("rows", "4");
        }
        if attrs.get("cols").is_none() {
            attrs.set("cols", "40");
        }
        let content = value.map(html_escape).unwrap_or_default();
        format!(
            r#"<textarea name="{}"{}>{content}</textarea>"#,
            html_escape(name),
            extra_attrs(&attrs)
        )
    }

    fn render_select(
        &self,
        name: &str,
        options: &[SelectOption],
        selected: &[String],
        attributes: &Attributes,
    ) -> String {
        let attrs = self.styled(attributes, "form-select");
        let options: String = options
            .iter()
            .map(|opt| {
                let selected_attr = if selected.contains(&opt.value) {
                    " selected"
                } else {
                    ""
                };
                format!(
                    r#"<option value="{}"{selected_attr}>{}</option>"#,
                    html_escape(&opt.value),
                    html_escape(&opt.label)
                )
            })
            .collect();
        format!(
            r#"<select name="{}"{}>{options}</select>"#,
            html_escape(name),
            extra_attrs(&attrs)
        )
    }

    fn render_checkable(
        &self,
        input_type: &str,
        name: &str,
        value: &str,
        checked: bool,
        attributes: &Attributes,
    ) -> String {
        let attrs = self.styled(attributes, "form-check-input");
        let checked_attr = if checked { " checked" } else { "" };
        format!(
            r#"<input type="{input_type}" name="{}" value="{}"{checked_attr}{}>"#,
            html_escape(name),
            html_escape(value),
            extra_attrs(&attrs)
        )
    }

    fn render_image(&self, url: &str, name: Option<&str>, attributes: &Attributes) -> String {
        let name_attr = name
            .map(|n| format!(r#" name="{}""#, html_escape(n)))
            .unwrap_or_default();
        format!(
            r#"<input type="image" src="{}"{name_attr}{}>"#,
            html_escape(url),
            extra_attrs(attributes)
        )
    }
}

impl Renderer for HtmlRenderer {
    fn render_field(&self, field: &Field) -> Result<String> {
        let html = match field {
            Field::Label {
                name,
                text,
                attributes,
            } => self.render_label(name, text.as_deref(), attributes),
            Field::Input {
                kind,
                name,
                value,
                attributes,
            } => self.render_input(*kind, name, value.as_deref(), attributes),
            Field::Textarea {
                name,
                value,
                attributes,
            } => self.render_textarea(name, value.as_deref(), attributes),
            Field::Select {
                name,
                options,
                selected,
                attributes,
            } => self.render_select(name, options, selected, attributes),
            Field::Checkbox {
                name,
                value,
                checked,
                attributes,
            } => self.render_checkable("checkbox", name, value, *checked, attributes),
            Field::Radio {
                name,
                value,
                checked,
                attributes,
            } => self.render_checkable("radio", name, value, *checked, attributes),
            Field::Image {
                url,
                name,
                attributes,
            } => self.render_image(url, name.as_deref(), attributes),
        };
        Ok(html)
    }

    fn render_other(&self, method: &str, args: &[Arg]) -> Result<String> {
        let attrs = trailing_attributes(args);
        match method {
            "open" => {
                let action = text_arg(args, 0).unwrap_or("");
                let form_method = text_arg(args, 1).unwrap_or("POST").to_uppercase();
                Ok(format!(
                    r#"<form method="{}" action="{}" accept-charset="UTF-8"{}>"#,
                    html_escape(&form_method),
                    html_escape(action),
                    extra_attrs(&attrs)
                ))
            }
            "close" => Ok("</form>".to_string()),
            "token" => {
                let token = text_arg(args, 0).ok_or_else(|| {
                    BinderError::Render("token requires the CSRF token value".to_string())
                })?;
                Ok(format!(
                    r#"<input type="hidden" name="csrf_token" value="{}">"#,
                    html_escape(token)
                ))
            }
            "submit" => {
                let attrs = self.styled(&attrs, "btn btn-primary");
                let value = text_arg(args, 0).unwrap_or("Submit");
                Ok(format!(
                    r#"<input type="submit" value="{}"{}>"#,
                    html_escape(value),
                    extra_attrs(&attrs)
                ))
            }
            "button" => {
                let attrs = self.styled(&attrs, "btn");
                let text = text_arg(args, 0).unwrap_or("");
                Ok(format!(
                    r#"<button{}>{}</button>"#,
                    extra_attrs(&attrs),
                    html_escape(text)
                ))
            }
            other => Err(BinderError::UnknownMethod(other.to_string())),
        }
    }
}

fn text_arg(args: &[Arg], index: usize) -> Option<&str> {
    match args.get(index) {
        Some(Arg::Text(s)) => Some(s),
        _ => None,
    }
}

fn trailing_attributes(args: &[Arg]) -> Attributes {
    match args.last() {
        Some(Arg::Attributes(attrs)) => attrs.clone(),
        _ => Attributes::new(),
    }
}

fn extra_attrs(attrs: &Attributes) -> String {
    if attrs.is_empty() {
        String::new()
    } else {
        format!(" {}", attrs.to_html())
    }
}

/// Escapes HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
