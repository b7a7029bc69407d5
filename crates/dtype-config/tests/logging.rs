//! The global subscriber can only be installed once per process, so this
//! binary holds a single test.

use dtype_config::{ConfigError, LogConfig, init_tracing};

#[test]
fn init_tracing_installs_once() {
    let config = LogConfig {
        filter: "dtype_core=debug".into(),
    };

    init_tracing(&config).expect("first install succeeds");
    tracing::debug!("subscriber installed");

    let err = init_tracing(&config).unwrap_err();
    assert!(matches!(err, ConfigError::Logging(_)), "got {err}");
}
