//! End-to-end coverage of the configuration store: defaults, file overrides,
//! and the process-wide instance.

use config::{Config, ConfigLoadError, ConfigValueError, DEFAULT_CONFIG, config};
use serial_test::serial;
use std::fs;
use tempfile::NamedTempFile;

#[test]
fn fresh_store_serves_every_default() {
    let store = Config::new();

    assert_eq!(store.get("SERVER_PORT"), "17001");
    assert_eq!(store.get("LOG_FILE"), "opencog_server.log");
    assert_eq!(store.get("LOG_LEVEL"), "info");
    assert_eq!(store.get("LOG_TO_STDOUT"), "true");
    assert_eq!(store.get("SERVER_CYCLE_DURATION"), "100");
    assert_eq!(store.get("IDLE_CYCLES_PER_TICK"), "3");
    assert_eq!(store.get("STARTING_STI_FUNDS"), "10000");
    assert_eq!(store.get("STARTING_LTI_FUNDS"), "10000");
    assert_eq!(store.get("STI_FUNDS_BUFFER"), "10000");
    assert_eq!(store.get("LTI_FUNDS_BUFFER"), "10000");
    assert_eq!(store.get("MIN_STI"), "-400");
    assert_eq!(DEFAULT_CONFIG.len(), 11);
}

#[test]
fn load_then_read_typed_values() {
    let file = NamedTempFile::new().unwrap();
    let content = r#"
# server tuning
SERVER_PORT = 18000
SERVER_CYCLE_DURATION = 250
LOG_TO_STDOUT = false
LOG_FILE = "cogserver.log"
"#;
    fs::write(file.path(), content).unwrap();

    let mut store = Config::new();
    store.load(file.path()).unwrap();

    assert_eq!(store.get_int("SERVER_PORT").unwrap(), 18000);
    assert_eq!(store.get_int("SERVER_CYCLE_DURATION").unwrap(), 250);
    assert!(!store.get_bool("LOG_TO_STDOUT").unwrap());
    assert_eq!(store.get("LOG_FILE"), "cogserver.log");
    // untouched parameters keep their defaults
    assert_eq!(store.get_int("IDLE_CYCLES_PER_TICK").unwrap(), 3);
}

#[test]
fn malformed_file_reports_line_and_path() {
    let file = NamedTempFile::new().unwrap();
    fs::write(file.path(), "LOG_LEVEL = debug\n\nmalformed line no equals\n").unwrap();

    let mut store = Config::new();
    let err = store.load(file.path()).unwrap_err();

    match err {
        ConfigLoadError::MissingSeparator { path, line } => {
            assert_eq!(line, 3);
            assert!(path.contains(file.path().file_name().unwrap().to_str().unwrap()));
        }
        other => panic!("expected MissingSeparator, got {other}"),
    }
}

#[test]
fn typed_accessor_failures_name_the_parameter() {
    let store = Config::new();

    let err = store.get_int("LOG_LEVEL").unwrap_err();
    assert!(err.to_string().contains("LOG_LEVEL"));
    assert!(matches!(err, ConfigValueError::TypeError { .. }));

    let err = store.get_double("LOG_FILE").unwrap_err();
    assert!(matches!(err, ConfigValueError::TypeError { .. }));

    let err = store.get_bool("NO_SUCH_PARAMETER").unwrap_err();
    assert!(matches!(err, ConfigValueError::KeyNotFound { .. }));
}

#[test]
#[serial]
fn global_instance_is_shared_and_seeded() {
    assert_eq!(config().read().get_int("SERVER_PORT").unwrap(), 17001);

    let first = std::ptr::from_ref(config());
    let second = std::ptr::from_ref(config());
    assert_eq!(first, second);
}

#[test]
#[serial]
fn global_instance_survives_load_and_reset() {
    let file = NamedTempFile::new().unwrap();
    fs::write(file.path(), "SERVER_PORT = 21000\n").unwrap();

    config().write().load(file.path()).unwrap();
    assert_eq!(config().read().get("SERVER_PORT"), "21000");

    config().write().reset();
    assert_eq!(config().read().get("SERVER_PORT"), "17001");
}
