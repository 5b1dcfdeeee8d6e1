//! Concurrent requests through one gateway

use std::sync::{Arc, Barrier};
use std::thread;

use serde_json::json;

use crate::common::TestGateway;
use graphscript::RawRequest;
use graphscript_engine::ScriptCache;

const THREADS: usize = 8;

#[test]
fn concurrent_writers_all_commit() {
    let t = Arc::new(TestGateway::new());
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let t = Arc::clone(&t);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                t.run(&RawRequest::script(format!("addV person p{i}")))
            })
        })
        .collect();

    for h in handles {
        assert!(h.join().unwrap().is_success());
    }
    assert_eq!(t.graph.vertices().len(), THREADS);
}

#[test]
fn failing_requests_do_not_disturb_neighbours() {
    let t = Arc::new(TestGateway::new());
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let t = Arc::clone(&t);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let script = if i % 2 == 0 {
                    "fail".to_string()
                } else {
                    format!("addV person p{i}")
                };
                (i, t.run(&RawRequest::script(script)))
            })
        })
        .collect();

    for h in handles {
        let (i, response) = h.join().unwrap();
        assert_eq!(response.is_success(), i % 2 == 1);
    }
    assert_eq!(t.graph.vertices().len(), THREADS / 2);
}

#[test]
fn concurrent_library_loads_across_reset() {
    let t = Arc::new(TestGateway::with_config(|c| c.with_cache_reset_threshold(4)));
    t.script("shared", "let base 10");
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let t = Arc::clone(&t);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let mut results = Vec::new();
                for j in 0..10 {
                    // Distinct inline scripts push the cache past the threshold
                    let raw = RawRequest::script(format!("sum base base {i} {j}"))
                        .with_load("shared");
                    results.push(t.run(&RawRequest::script("sum base base").with_load("shared")));
                    t.run(&raw);
                }
                results
            })
        })
        .collect();

    for h in handles {
        for response in h.join().unwrap() {
            assert_eq!(response.body.results, Some(json!(20)));
        }
    }
    assert!(t.gateway.state().evaluators().generation() > 1);

    // Any reset happens before loading, so the entry is cached afterwards
    t.run(&RawRequest::default().with_load("shared"));
    let cache: &ScriptCache = t.gateway.state().cache();
    let key = t.gateway.state().library().resolve("shared");
    assert_eq!(cache.get(&key.to_string_lossy()).as_deref(), Some("let base 10"));
}
