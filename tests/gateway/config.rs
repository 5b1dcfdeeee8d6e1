//! Configuration loading and the process-global gateway

use serde_json::json;

use crate::common::{mini_factory, MemGraph};
use graphscript::{Error, Gateway, GatewayConfig, GraphDatabase, RawRequest, CONFIG_FILE_NAME};
use graphscript_engine::DEFAULT_CACHE_RESET_THRESHOLD;
use std::sync::Arc;
use tempfile::TempDir;

#[test]
fn open_writes_default_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);

    let gateway = Gateway::open(&path, mini_factory()).unwrap();
    assert!(path.exists());
    assert_eq!(
        gateway.state().config().cache_reset_threshold,
        DEFAULT_CACHE_RESET_THRESHOLD
    );
    assert_eq!(gateway.state().evaluators().threshold(), 500);
}

#[test]
fn open_reads_existing_config() {
    let dir = TempDir::new().unwrap();
    let scripts = dir.path().join("lib");
    std::fs::create_dir(&scripts).unwrap();
    std::fs::write(scripts.join("init.gremlin"), "let ready 1").unwrap();

    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(
        &path,
        format!(
            "script_dir = {:?}\ncache_reset_threshold = 25\n",
            scripts.display().to_string()
        ),
    )
    .unwrap();

    let gateway = Gateway::open(&path, mini_factory()).unwrap();
    assert_eq!(gateway.state().evaluators().threshold(), 25);

    let db: Arc<dyn GraphDatabase> = Arc::new(MemGraph::new());
    let response = gateway.execute(&db, &RawRequest::script("ready").with_load("init"));
    assert_eq!(response.body.results, Some(json!(1)));
}

#[test]
fn open_rejects_invalid_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "script_extension = \"\"\n").unwrap();

    assert!(matches!(
        Gateway::open(&path, mini_factory()),
        Err(Error::Config(_))
    ));
}

#[test]
fn global_gateway_installs_once() {
    let dir = TempDir::new().unwrap();
    let config = GatewayConfig::default().with_script_dir(dir.path());

    let installed = Gateway::install(config.clone(), mini_factory()).unwrap();
    assert!(std::ptr::eq(installed, Gateway::global().unwrap()));

    assert!(matches!(
        Gateway::install(config, mini_factory()),
        Err(Error::Config(_))
    ));

    let db: Arc<dyn GraphDatabase> = Arc::new(MemGraph::new());
    let response = Gateway::global()
        .unwrap()
        .execute(&db, &RawRequest::script("hi"));
    assert!(response.is_success());
}
