//! Configuration for medtag-core.
//!
//! Loaded with figment from defaults, an optional TOML file, and
//! `MEDTAG_`-prefixed environment variables. The two remote-store values
//! are the only switch between remote-first and local-only operation:
//! if either is missing the gateway never attempts the network.

use std::path::PathBuf;
use std::time::Duration;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::StoreResult;
use crate::store::local::RECORDS_FILE_NAME;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default data directory name.
const DATA_DIR_NAME: &str = "medtag";

/// Default remote request timeout in seconds.
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Application configuration.
///
/// Sources, later overriding earlier:
/// 1. Default values
/// 2. TOML config file at `~/.config/medtag/config.toml`
/// 3. Environment variables prefixed with `MEDTAG_`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Remote store endpoint. Both this and `remote_api_key` must be set
    /// for remote mode; otherwise records stay local.
    pub remote_url: Option<String>,
    /// Remote store API key.
    pub remote_api_key: Option<String>,
    /// Directory holding the local record blob.
    /// Defaults to `~/.local/share/medtag`.
    pub data_dir: Option<PathBuf>,
    /// Base URL of the public profile views embedded in scannable codes.
    pub public_base_url: String,
    /// Bounded timeout for remote store requests.
    pub request_timeout_secs: u64,
}

/// The two values a configured remote store requires.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteConfig {
    pub url: String,
    pub api_key: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            remote_url: None,
            remote_api_key: None,
            data_dir: None,
            public_base_url: "http://localhost:5173".to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    pub fn load() -> StoreResult<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config file path.
    pub fn load_from(config_path: Option<PathBuf>) -> StoreResult<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed("MEDTAG_"));

        Ok(figment.extract()?)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(DATA_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Get the default data directory path.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from(".local/share"))
            .join(DATA_DIR_NAME)
    }

    /// Remote configuration, present only when both values are set and
    /// non-empty.
    #[must_use]
    pub fn remote(&self) -> Option<RemoteConfig> {
        match (&self.remote_url, &self.remote_api_key) {
            (Some(url), Some(api_key)) if !url.is_empty() && !api_key.is_empty() => {
                Some(RemoteConfig {
                    url: url.clone(),
                    api_key: api_key.clone(),
                })
            }
            _ => None,
        }
    }

    /// Path of the local record blob, resolving defaults if not set.
    #[must_use]
    pub fn records_path(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(Self::default_data_dir)
            .join(RECORDS_FILE_NAME)
    }

    /// Remote request timeout as a Duration.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.remote_url.is_none());
        assert!(config.remote_api_key.is_none());
        assert!(config.data_dir.is_none());
        assert_eq!(config.request_timeout_secs, 10);
    }

    #[test]
    fn test_remote_absent_by_default() {
        assert!(Config::default().remote().is_none());
    }

    #[test]
    fn test_remote_requires_both_values() {
        let mut config = Config::default();
        config.remote_url = Some("https://example.supabase.co".into());
        assert!(config.remote().is_none());

        config.remote_api_key = Some("anon-key".into());
        let remote = config.remote().unwrap();
        assert_eq!(remote.url, "https://example.supabase.co");
        assert_eq!(remote.api_key, "anon-key");
    }

    #[test]
    fn test_empty_value_counts_as_absent() {
        let mut config = Config::default();
        config.remote_url = Some("https://example.supabase.co".into());
        config.remote_api_key = Some(String::new());
        assert!(config.remote().is_none());
    }

    #[test]
    fn test_records_path_default() {
        let config = Config::default();
        let path = config.records_path();
        assert!(path.to_string_lossy().contains("medtag"));
        assert!(path.to_string_lossy().ends_with("records.json"));
    }

    #[test]
    fn test_records_path_custom() {
        let mut config = Config::default();
        config.data_dir = Some(PathBuf::from("/tmp/medtag-test"));
        assert_eq!(
            config.records_path(),
            PathBuf::from("/tmp/medtag-test/records.json")
        );
    }

    #[test]
    fn test_request_timeout() {
        let mut config = Config::default();
        config.request_timeout_secs = 3;
        assert_eq!(config.request_timeout(), Duration::from_secs(3));
    }

    #[test]
    fn test_load_nonexistent_config_uses_defaults() {
        let config = Config::load_from(Some(PathBuf::from("/nonexistent/config.toml"))).unwrap();
        assert_eq!(config.public_base_url, Config::default().public_base_url);
    }

    #[test]
    fn test_load_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
remote_url = "https://example.supabase.co"
remote_api_key = "anon-key"
request_timeout_secs = 5
"#,
        )
        .unwrap();

        let config = Config::load_from(Some(path)).unwrap();
        assert!(config.remote().is_some());
        assert_eq!(config.request_timeout_secs, 5);
    }
}
