//! Config read from the process environment.
//!
//! Environment variables are process-global, so these run serially.

use std::time::Duration;

use fetch_dogs::config::{
    Config, API_URL_ENV, DATA_DIR_ENV, DEFAULT_TIMEOUT_SECS, LOG_ENV, TIMEOUT_ENV,
};
use serial_test::serial;

fn clear_env() {
    for key in [API_URL_ENV, DATA_DIR_ENV, TIMEOUT_ENV, LOG_ENV] {
        std::env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_defaults_without_env() {
    clear_env();
    let config = Config::from_env();
    assert_eq!(config, Config::default());
    assert_eq!(config.api_url, "https://frontend-take-home-service.fetch.com");
    assert_eq!(
        config.request_timeout,
        Duration::from_secs(DEFAULT_TIMEOUT_SECS)
    );
}

#[test]
#[serial]
fn test_env_overrides() {
    clear_env();
    let dir = tempfile::TempDir::new().unwrap();
    std::env::set_var(API_URL_ENV, "http://localhost:9999");
    std::env::set_var(DATA_DIR_ENV, dir.path());
    std::env::set_var(TIMEOUT_ENV, "7");
    std::env::set_var(LOG_ENV, "fetch_dogs=trace");

    let config = Config::from_env();
    clear_env();

    assert_eq!(config.api_url, "http://localhost:9999");
    assert_eq!(config.data_dir(), dir.path());
    assert_eq!(config.storage_path(), dir.path().join("storage.json"));
    assert_eq!(config.request_timeout, Duration::from_secs(7));
    assert_eq!(config.log_filter, "fetch_dogs=trace");
}

#[test]
#[serial]
fn test_bad_timeout_keeps_default() {
    clear_env();
    std::env::set_var(TIMEOUT_ENV, "soon");
    let config = Config::from_env();
    std::env::set_var(TIMEOUT_ENV, "0");
    let zero = Config::from_env();
    clear_env();

    assert_eq!(config.request_timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    assert_eq!(zero.request_timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
}
