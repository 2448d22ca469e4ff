#![allow(dead_code)]

use std::cell::RefCell;

use oxide_form_binder::{Arg, BinderError, Field, Renderer, Result};

/// A call the renderer received.
#[derive(Debug, Clone, PartialEq)]
pub enum Recorded {
    Field(Field),
    Other { method: String, args: Vec<Arg> },
}

/// Renderer that records every call and renders nothing.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    calls: RefCell<Vec<Recorded>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<Recorded> {
        self.calls.borrow().clone()
    }

    pub fn last_field(&self) -> Field {
        match self.calls.borrow().last() {
            Some(Recorded::Field(field)) => field.clone(),
            other => panic!("Expected a field call, got {other:?}"),
        }
    }
}

impl Renderer for RecordingRenderer {
    fn render_field(&self, field: &Field) -> Result<String> {
        self.calls.borrow_mut().push(Recorded::Field(field.clone()));
        Ok(String::new())
    }

    fn render_other(&self, method: &str, args: &[Arg]) -> Result<String> {
        self.calls.borrow_mut().push(Recorded::Other {
            method: method.to_string(),
            args: args.to_vec(),
        });
        Ok(String::new())
    }
}

/// Renderer that always fails.
#[derive(Debug, Default)]
pub struct FailingRenderer;

impl Renderer for FailingRenderer {
    fn render_field(&self, field: &Field) -> Result<String> {
        Err(BinderError::Render(format!("cannot render {}", field.kind())))
    }

    fn render_other(&self, method: &str, _args: &[Arg]) -> Result<String> {
        Err(BinderError::Render(format!("cannot render {method}")))
    }
}
