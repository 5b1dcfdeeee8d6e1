//! Request sequencing and response bodies

use serde_json::json;

use crate::common::TestGateway;
use graphscript::{RawRequest, Status};

#[test]
fn inline_script_echoes() {
    let t = TestGateway::new();
    let response = t.run(&RawRequest::script("1 + 1"));
    assert_eq!(response.to_json(), json!({"success": true, "results": "1 + 1"}));
}

#[test]
fn library_defines_variables_for_inline_script() {
    let t = TestGateway::new();
    t.script("a", "let a 2");
    t.script("b", "let b 3");

    let response = t.run(&RawRequest::script("sum a b").with_load("a,b"));
    assert_eq!(response.body.results, Some(json!(5)));
}

#[test]
fn params_are_bound_as_variables() {
    let t = TestGateway::new();
    t.script("addone", "let one 1");

    let raw = RawRequest::script("sum x one")
        .with_load("addone")
        .with_params(r#"{"x": 41}"#);
    assert_eq!(t.run(&raw).body.results, Some(json!(42)));
}

#[test]
fn float_param_is_not_an_integer() {
    let t = TestGateway::new();
    let raw = RawRequest::script("sum x x").with_params(r#"{"x": 1.5}"#);
    let response = t.run(&raw);
    assert_eq!(response.status, Status::BadRequest);
    assert_eq!(
        response.body.error_message.as_deref(),
        Some("no such variable: x")
    );
}

#[test]
fn params_must_be_an_object() {
    let t = TestGateway::new();
    let response = t.run(&RawRequest::script("1").with_params("[1,2,3]"));
    assert_eq!(response.status, Status::BadRequest);
    assert!(!response.body.success);
}

#[test]
fn empty_request_succeeds_without_results() {
    let t = TestGateway::new();
    let response = t.run(&RawRequest::default());
    assert_eq!(response.to_bytes(), br#"{"success":true}"#.to_vec());
}

#[test]
fn evaluation_error_is_reported_verbatim() {
    let t = TestGateway::new();
    let response = t.run(&RawRequest::script("fail"));
    assert_eq!(
        response.to_json(),
        json!({"success": false, "errormessage": "No such property: bogus"})
    );
}

#[test]
fn traversal_of_vertices() {
    let t = TestGateway::new();
    t.run(&RawRequest::script("addV person marko"));
    t.run(&RawRequest::script("addV software lop"));

    let response = t.run(&RawRequest::script("g.V()"));
    assert_eq!(
        response.body.results,
        Some(json!([
            {"id": 1, "label": "person", "type": "vertex", "properties": {"name": "marko"}},
            {"id": 2, "label": "software", "type": "vertex", "properties": {"name": "lop"}}
        ]))
    );
}

#[test]
fn missing_library_names_the_file() {
    let t = TestGateway::new();
    let response = t.run(&RawRequest::default().with_load("nope"));
    assert_eq!(response.status.code(), 400);
    assert!(response
        .body
        .error_message
        .unwrap()
        .contains("nope.gremlin"));
}

#[test]
fn custom_extension_is_used() {
    let t = TestGateway::with_config(|mut c| {
        c.script_extension = "groovy".to_string();
        c
    });
    std::fs::write(t.dir.path().join("lib.groovy"), "let v 7").unwrap();

    let response = t.run(&RawRequest::script("v").with_load("lib"));
    assert_eq!(response.body.results, Some(json!(7)));
}
