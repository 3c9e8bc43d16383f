//! Runtime configuration.
//!
//! Defaults can be overridden through the environment:
//!
//! | Variable | Default |
//! |----------|---------|
//! | `FETCH_DOGS_API_URL` | `https://frontend-take-home-service.fetch.com` |
//! | `FETCH_DOGS_DATA_DIR` | `~/.fetch-dogs` |
//! | `FETCH_DOGS_TIMEOUT_SECS` | `30` |
//! | `FETCH_DOGS_LOG` | `fetch_dogs=info` |

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::adapters::file_storage::STORAGE_FILE;
use crate::api::DEFAULT_API_URL;

pub const API_URL_ENV: &str = "FETCH_DOGS_API_URL";
pub const DATA_DIR_ENV: &str = "FETCH_DOGS_DATA_DIR";
pub const TIMEOUT_ENV: &str = "FETCH_DOGS_TIMEOUT_SECS";
pub const LOG_ENV: &str = "FETCH_DOGS_LOG";

/// Data directory name under the home directory.
const DATA_DIR: &str = ".fetch-dogs";
const LOG_FILE: &str = "fetch-dogs.log";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_LOG_FILTER: &str = "fetch_dogs=info";

/// Application configuration.
///
/// ```ignore
/// let config = Config::from_env()
///     .with_api_url("http://localhost:8080")
///     .with_request_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// API base URL
    pub api_url: String,
    /// Holds `storage.json` and the log file
    pub data_dir: PathBuf,
    /// Per-request timeout
    pub request_timeout: Duration,
    /// `tracing` filter directive
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            data_dir: default_data_dir(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(DATA_DIR))
        .unwrap_or_else(|| PathBuf::from(DATA_DIR))
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Defaults overridden by `FETCH_DOGS_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns.
    ///
    /// Empty values are ignored, as is a timeout that is not a positive
    /// number of seconds.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(url) = get(API_URL_ENV) {
            config = config.with_api_url(url.trim());
        }
        if let Some(dir) = get(DATA_DIR_ENV) {
            config = config.with_data_dir(dir);
        }
        if let Some(secs) = get(TIMEOUT_ENV).and_then(|raw| raw.trim().parse::<u64>().ok()) {
            if secs > 0 {
                config = config.with_request_timeout(Duration::from_secs(secs));
            }
        }
        if let Some(filter) = get(LOG_ENV) {
            config = config.with_log_filter(filter);
        }
        config
    }

    pub fn storage_path(&self) -> PathBuf {
        self.data_dir.join(STORAGE_FILE)
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
