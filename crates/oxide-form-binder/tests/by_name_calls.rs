//! Integration tests for helpers invoked by method name.

mod common;

use common::{Recorded, RecordingRenderer};
use oxide_form_binder::{
    Arg, Attributes, BinderError, Field, FormBinder, HtmlRenderer, InputData, InputKind,
    SelectOption, ValidationErrors,
};

#[test]
fn text_call_matches_typed_helper() {
    let renderer = RecordingRenderer::new();
    let input = InputData::new().with("name", "Something");
    let binder = FormBinder::new(input, &renderer);

    binder
        .call("text", vec![Arg::from("name"), Arg::Null, Arg::from(Attributes::new())])
        .unwrap();
    binder.text("name", None, Attributes::new()).unwrap();

    let calls = renderer.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0], calls[1]);
}

#[test]
fn every_field_kind_is_intercepted() {
    let renderer = RecordingRenderer::new();
    let binder = FormBinder::new(InputData::new(), &renderer);

    let calls: Vec<(&str, Vec<Arg>)> = vec![
        ("label", vec!["email".into()]),
        ("text", vec!["a".into()]),
        ("password", vec!["a".into()]),
        ("search", vec!["a".into()]),
        ("email", vec!["a".into()]),
        ("telephone", vec!["a".into()]),
        ("url", vec!["a".into()]),
        ("number", vec!["a".into()]),
        ("date", vec!["a".into()]),
        ("file", vec!["a".into()]),
        ("hidden", vec!["a".into()]),
        ("textarea", vec!["a".into()]),
        ("select", vec!["a".into()]),
        ("checkbox", vec!["a".into()]),
        ("radio", vec!["a".into()]),
        ("image", vec!["/a.png".into()]),
    ];
    for (method, args) in calls {
        binder.call(method, args).unwrap();
    }

    let recorded = renderer.calls();
    assert_eq!(recorded.len(), 16);
    assert!(recorded.iter().all(|c| matches!(c, Recorded::Field(_))));
}

#[test]
fn select_call_with_options() {
    let renderer = RecordingRenderer::new();
    let input = InputData::new().with("size", "l");
    let errors = ValidationErrors::new().with("size", "Pick one.");
    let binder = FormBinder::new(input, &renderer).with_validator(&errors);
    let options = vec![SelectOption::new("s", "Small"), SelectOption::new("l", "Large")];

    binder
        .call(
            "select",
            vec![
                Arg::from("size"),
                Arg::from(options.clone()),
                Arg::from("s"),
                Arg::from(Attributes::new().with("class", "narrow")),
            ],
        )
        .unwrap();

    assert_eq!(
        renderer.last_field(),
        Field::Select {
            name: "size".to_string(),
            options,
            selected: vec!["l".to_string()],
            attributes: Attributes::new().with("class", "narrow form-error"),
        }
    );
}

#[test]
fn image_looks_up_second_slot() {
    let renderer = RecordingRenderer::new();
    let errors = ValidationErrors::new().with("go", "Nope.");
    let binder = FormBinder::new(InputData::new(), &renderer).with_validator(&errors);

    binder
        .call("image", vec![Arg::from("/img/go.png"), Arg::from("go")])
        .unwrap();

    assert!(renderer.last_field().attributes().has_class("form-error"));
}

#[test]
fn malformed_arguments_are_rejected_before_rendering() {
    let renderer = RecordingRenderer::new();
    let binder = FormBinder::new(InputData::new(), &renderer);

    let err = binder.call("text", vec![Arg::from(true)]).unwrap_err();
    assert!(matches!(err, BinderError::InvalidArguments { ref method, .. } if method == "text"));
    assert!(renderer.calls().is_empty());
}

#[test]
fn html_form_end_to_end() {
    let input = InputData::new()
        .with("name", "Something")
        .with("email", "not-an-email")
        .with("plan", "pro")
        .with("agree", "1");
    let errors = ValidationErrors::new()
        .with("email", "Enter a valid email address.")
        .with("password", "Too short.");
    let binder = FormBinder::new(input, HtmlRenderer::new()).with_validator(&errors);

    let mut html = String::new();
    html.push_str(&binder.call("open", vec!["/signup".into()]).unwrap());
    html.push_str(&binder.text("name", None, Attributes::new()).unwrap());
    html.push_str(&binder.email("email", None, Attributes::new()).unwrap());
    html.push_str(&binder.password("password", Attributes::new()).unwrap());
    html.push_str(
        &binder
            .password("password_confirmation", Attributes::new())
            .unwrap(),
    );
    html.push_str(&binder.radio("plan", "free", true, Attributes::new()).unwrap());
    html.push_str(&binder.radio("plan", "pro", false, Attributes::new()).unwrap());
    html.push_str(&binder.checkbox("agree", "1", false, Attributes::new()).unwrap());
    html.push_str(&binder.call("close", Vec::new()).unwrap());

    assert!(html.starts_with(r#"<form method="POST" action="/signup""#));
    assert!(html.contains(r#"<input type="text" name="name" value="Something">"#));
    assert!(html.contains(r#"<input type="email" name="email" value="not-an-email" class="form-error">"#));
    assert!(html.contains(r#"<input type="password" name="password" class="form-error">"#));
    assert!(html.contains(
        r#"<input type="password" name="password_confirmation" class="form-error">"#
    ));
    assert!(html.contains(r#"<input type="radio" name="plan" value="free">"#));
    assert!(html.contains(r#"<input type="radio" name="plan" value="pro" checked>"#));
    assert!(html.contains(r#"<input type="checkbox" name="agree" value="1" checked>"#));
    assert!(html.ends_with("</form>"));
}

#[test]
fn hidden_call_keeps_server_value() {
    let renderer = RecordingRenderer::new();
    let binder = FormBinder::new(InputData::new().with("id", 7), &renderer);

    binder.call("hidden", vec!["id".into(), "1".into()]).unwrap();

    assert_eq!(
        renderer.last_field(),
        Field::Input {
            kind: InputKind::Hidden,
            name: "id".to_string(),
            value: Some("1".to_string()),
            attributes: Attributes::new(),
        }
    );
}
