//! # oxide-form-binder
//!
//! Binds form helpers to submitted input and validation state.
//!
//! This crate provides:
//! - A [`FormBinder`] that repopulates controls from prior input
//! - Error-class decoration for fields that failed validation
//! - Confirmation fields (`password_confirmation`) inheriting their base field's errors
//! - A [`Renderer`] seam with a plain HTML implementation
//!
//! ## Quick Start
//!
//! ```rust
//! use oxide_form_binder::{
//!     Attributes, FormBinder, HtmlRenderer, InputData, ValidationErrors,
//! };
//!
//! let input = InputData::new().with("name", "Something");
//! let errors = ValidationErrors::new().with("email", "Enter a valid email address.");
//!
//! let binder = FormBinder::new(input, HtmlRenderer::new()).with_validator(&errors);
//!
//! let name = binder.text("name", None, Attributes::new()).unwrap();
//! assert_eq!(name, r#"<input type="text" name="name" value="Something">"#);
//!
//! let email = binder
//!     .email("email", None, Attributes::new().with("class", "wide"))
//!     .unwrap();
//! assert!(email.contains(r#"class="wide form-error""#));
//! ```
//!
//! ## Calling Helpers by Name
//!
//! Views that dispatch on a method name use [`FormBinder::call`]. Recognized
//! field kinds are bound; anything else reaches the renderer unchanged.
//!
//! ```rust
//! use oxide_form_binder::{Arg, FormBinder, HtmlRenderer, NoInput};
//!
//! let binder = FormBinder::new(NoInput, HtmlRenderer::new());
//!
//! let open = binder
//!     .call("open", vec![Arg::from("/signup"), Arg::from("POST")])
//!     .unwrap();
//! assert!(open.starts_with("<form"));
//!
//! let checkbox = binder
//!     .call("checkbox", vec![Arg::from("agree"), Arg::from("yes"), Arg::from(true)])
//!     .unwrap();
//! assert!(checkbox.contains("checked"));
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use oxide_form_binder::BinderConfig;
//!
//! let config = BinderConfig::from_json(r#"{"error_class": "is-invalid"}"#).unwrap();
//! assert_eq!(config.error_class, "is-invalid");
//! assert_eq!(config.confirmation_suffix, "_confirmation");
//! ```

mod attrs;
mod binder;
mod config;
mod error;
mod field;
mod input;
mod kind;
pub mod render;

pub use attrs::{AttrValue, Attributes};
pub use binder::FormBinder;
pub use config::BinderConfig;
pub use error::{BinderError, ErrorSource, Result, ValidationErrors};
pub use field::{Arg, Field, SelectOption};
pub use input::{Input, InputData, InputValue, NoInput, OldInput};
pub use kind::{FieldKind, InputKind};
pub use render::{HtmlRenderer, Renderer};
