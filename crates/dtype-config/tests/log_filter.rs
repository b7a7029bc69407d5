//! Filter selection between `DTYPE_LOG` and the `[log]` section.

use dtype_config::{ConfigError, LogConfig, resolve_filter};
use figment::Jail;
use pretty_assertions::assert_eq;
use tracing_subscriber::filter::LevelFilter;

fn config(filter: &str) -> LogConfig {
    LogConfig {
        filter: filter.into(),
    }
}

#[test]
fn config_filter_applies_without_env() {
    Jail::expect_with(|_jail| {
        let filter = resolve_filter(&config("error")).expect("filter resolves");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::ERROR));
        Ok(())
    });
}

#[test]
fn env_filter_beats_config() {
    Jail::expect_with(|jail| {
        jail.set_env("DTYPE_LOG", "trace");

        let filter = resolve_filter(&config("error")).expect("filter resolves");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
        Ok(())
    });
}

#[test]
fn blank_env_filter_falls_back_to_config() {
    Jail::expect_with(|jail| {
        jail.set_env("DTYPE_LOG", "   ");

        let filter = resolve_filter(&config("warn")).expect("filter resolves");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
        Ok(())
    });
}

#[test]
fn malformed_env_filter_is_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("DTYPE_LOG", "dtype_core=notalevel");

        let err = resolve_filter(&config("warn")).unwrap_err();
        match err {
            ConfigError::InvalidValue { field, .. } => assert_eq!(field, "DTYPE_LOG"),
            other => panic!("expected InvalidValue, got {other}"),
        }
        Ok(())
    });
}

#[test]
fn invalid_config_filter_is_rejected_even_with_env() {
    Jail::expect_with(|jail| {
        jail.set_env("DTYPE_LOG", "info");

        let err = resolve_filter(&config("")).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "log.filter"));
        Ok(())
    });
}
