use std::sync::Arc;

use websearch_sql::{Db, FixedRegistry, Registry, WebSearchConfig, install, install_with};

#[test]
fn install_logs_registered_operations() {
    let trace = TestTracing::new();
    let _guard = trace.install();

    install(Db::with_registry(Arc::new(Registry::new("logged"))));

    let out = trace.output();
    assert!(out.contains("websearch_install"));
    assert!(out.contains("registry=\"logged\"") || out.contains("registry=logged"));
    assert!(out.contains("registered query builder operation"));
    assert!(out.contains("operation=whereWebSearch"));
    assert!(out.contains("operation=selectWebSearchRank"));
    assert!(!out.contains("WARN"));
}

#[test]
fn unexpected_failure_is_logged_as_warning() {
    let trace = TestTracing::new();
    let _guard = trace.install();

    install(Db::with_registry(Arc::new(RecordingRegistry::new(
        ExtendBehavior::Break,
    ))));

    let out = trace.output();
    assert!(out.contains("WARN"));
    assert!(out.contains("error extending query builder registry"));
    assert!(out.contains("registry is poisoned"));
}

#[test]
fn unsupported_extension_is_silent() {
    let trace = TestTracing::new();
    let _guard = trace.install();

    install(Db::with_registry(Arc::new(FixedRegistry::new())));
    install(Db::with_registry(Arc::new(RecordingRegistry::new(
        ExtendBehavior::RefuseUnsupported,
    ))));

    let out = trace.output();
    assert!(!out.contains("WARN"));
    assert!(out.contains("registry has no extension point"));
    assert!(out.contains("registry refused extension"));
}

#[test]
fn invalid_config_is_logged() {
    let trace = TestTracing::new();
    let _guard = trace.install();

    let config = WebSearchConfig {
        text_search_config: "simple; drop".into(),
        ..Default::default()
    };
    install_with(Db::with_registry(Arc::new(Registry::new("cfg"))), &config);

    let out = trace.output();
    assert!(out.contains("WARN"));
    assert!(out.contains("invalid web search config"));
}

mod util;
use util::{ExtendBehavior, RecordingRegistry, TestTracing};
