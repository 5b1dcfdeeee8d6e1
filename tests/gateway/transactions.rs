//! Per-request transaction outcome

use std::sync::atomic::Ordering;

use serde_json::json;

use crate::common::TestGateway;
use graphscript::RawRequest;

#[test]
fn successful_request_commits_writes() {
    let t = TestGateway::new();
    let response = t.run(&RawRequest::script("addV person marko"));

    assert!(response.is_success());
    assert_eq!(t.graph.vertices().len(), 1);
    assert_eq!(t.graph.0.commits.load(Ordering::SeqCst), 1);
}

#[test]
fn failed_request_rolls_back_writes() {
    let t = TestGateway::new();
    t.script("writes", "addV person vadas");

    let response = t.run(&RawRequest::script("fail").with_load("writes"));
    assert!(!response.is_success());
    assert!(t.graph.vertices().is_empty());
    assert_eq!(t.graph.0.rollbacks.load(Ordering::SeqCst), 1);
    assert_eq!(t.graph.0.commits.load(Ordering::SeqCst), 0);
}

#[test]
fn writes_visible_within_request() {
    let t = TestGateway::new();
    t.script("seed", "addV person josh");

    let response = t.run(&RawRequest::script("count").with_load("seed"));
    assert_eq!(response.body.results, Some(json!(1)));
}

#[test]
fn invalid_params_never_touch_the_graph() {
    let t = TestGateway::new();
    let response = t.run(&RawRequest::script("addV person peter").with_params("{"));

    assert!(!response.is_success());
    assert!(t.graph.vertices().is_empty());
    assert_eq!(t.graph.0.rollbacks.load(Ordering::SeqCst), 1);
}
