//! Tests for logger construction, gating, and scoping.

use scopelog::{Level, Logger, MemorySink, NoopResolver};
use serde_json::json;

#[test]
fn builder_default() {
    let logger = Logger::builder().build().unwrap();
    assert_eq!(logger.min_level(), Level::Info);
    assert_eq!(logger.module_name(), "unknown");
    assert!(!logger.is_initialized());
}

#[test]
fn gate_activates_threshold_and_above() {
    for threshold in Level::all() {
        let logger = Logger::builder()
            .level(threshold)
            .sink(MemorySink::new())
            .build()
            .unwrap();
        for level in Level::all() {
            assert_eq!(
                logger.level_enabled(level),
                level >= threshold,
                "threshold {threshold}, level {level}"
            );
        }
    }
}

#[test]
fn master_switch_disables_everything() {
    let logger = Logger::builder()
        .enabled(false)
        .level(Level::Debug)
        .sink(MemorySink::new())
        .build()
        .unwrap();
    for level in Level::all() {
        assert!(!logger.level_enabled(level));
        assert_eq!(logger.log(level, &[json!("x")]), None);
    }
}

#[test]
fn disabled_level_returns_none() {
    let logger = Logger::builder()
        .level(Level::Warn)
        .sink(MemorySink::new())
        .build()
        .unwrap();
    assert_eq!(logger.debug(&[json!("x")]), None);
    assert_eq!(logger.info(&[json!("x")]), None);
    assert!(logger.warn(&[json!("x")]).is_some());
}

#[test]
fn scope_creates_independent_child() {
    let logger = Logger::builder().sink(MemorySink::new()).build().unwrap();
    let billing = logger.scope("billing");

    assert_eq!(billing.module_name(), "billing");
    assert!(billing.is_initialized());
    assert_eq!(logger.module_name(), "unknown");
    assert!(!logger.is_initialized());
}

#[test]
fn scope_inherits_gate() {
    let logger = Logger::builder()
        .level(Level::Error)
        .sink(MemorySink::new())
        .build()
        .unwrap();
    let child = logger.scope("net");
    assert!(!child.level_enabled(Level::Warn));
    assert!(child.level_enabled(Level::Error));
    assert!(child.level_enabled(Level::Fatal));
}

#[test]
fn scoped_method_name_override_is_used() {
    let sink = MemorySink::new();
    let logger = Logger::builder()
        .show_method_name(true)
        .resolver(NoopResolver)
        .sink(sink.clone())
        .build()
        .unwrap();

    let auth = logger.scope("auth");
    auth.set_method_name("login");
    let line = auth.info(&[json!("ok")]).unwrap();
    assert_eq!(line, "auth | login | ok");
}

#[test]
fn root_instance_ignores_method_name_override() {
    // The override only applies to instances created via scope().
    let logger = Logger::builder()
        .show_method_name(true)
        .resolver(NoopResolver)
        .sink(MemorySink::new())
        .build()
        .unwrap();

    logger.set_method_name("login");
    let line = logger.info(&[json!("ok")]).unwrap();
    assert_eq!(line, "unknown |  | ok");
}

#[test]
fn sibling_scopes_do_not_share_overrides() {
    let logger = Logger::builder()
        .show_method_name(true)
        .resolver(NoopResolver)
        .sink(MemorySink::new())
        .build()
        .unwrap();

    let a = logger.scope("a");
    let b = logger.scope("b");
    a.set_method_name("handler_a");

    assert_eq!(a.info(&[json!("x")]).unwrap(), "a | handler_a | x");
    assert_eq!(b.info(&[json!("x")]).unwrap(), "b |  | x");
}
