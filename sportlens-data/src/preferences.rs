//! User preferences for the classifier endpoint.
//!
//! Layers, lowest to highest priority:
//!
//!   1. built-in default (`http://localhost:5000/predict`)
//!   2. `~/.sportlens/preferences.json`
//!   3. the `SPORTLENS_ENDPOINT` environment variable
//!
//! A layer holding an unusable URL is logged and skipped.

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

use crate::classifier_client::ClassifierConfig;

/// Local development endpoint of the classification service.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/predict";

/// Environment variable that overrides the endpoint from the preferences file.
pub const ENDPOINT_ENV_VAR: &str = "SPORTLENS_ENDPOINT";

const PREFERENCES_DIR: &str = ".sportlens";
const PREFERENCES_FILENAME: &str = "preferences.json";

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

/// Persisted user preferences
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Preferences {
    /// Full URL the image is POSTed to
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Optional whole-request timeout. `None` waits indefinitely.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            request_timeout_secs: None,
        }
    }
}

impl Preferences {
    /// Load preferences from disk and apply the environment override.
    pub fn load() -> Self {
        let mut preferences = Self::load_from(&Self::preferences_path());
        preferences.apply_endpoint_override(std::env::var(ENDPOINT_ENV_VAR).ok());
        preferences
    }

    /// Load preferences from `path`, writing defaults there if the file is missing.
    ///
    /// A file that exists but cannot be read or parsed is left untouched and
    /// defaults are used.
    pub fn load_from(path: &Path) -> Self {
        log::debug!("Loading preferences from {:?}", path);

        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str::<Preferences>(&contents) {
                Ok(preferences) => {
                    log::info!("Loaded preferences, endpoint={}", preferences.endpoint);
                    preferences
                }
                Err(e) => {
                    log::error!("Failed to parse preferences {:?}: {}", path, e);
                    Self::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No preferences found, using defaults");
                let preferences = Self::default();
                if let Err(e) = preferences.save_to(path) {
                    log::warn!("{:#}", e);
                }
                preferences
            }
            Err(e) => {
                log::error!("Failed to read preferences {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create preferences directory {:?}", parent))?;
        }
        let json = serde_json::to_string_pretty(self).context("Failed to serialize preferences")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write preferences to {:?}", path))?;
        log::info!("Saved preferences to {:?}", path);
        Ok(())
    }

    /// Replace the endpoint with `value` if it is a usable URL.
    pub fn apply_endpoint_override(&mut self, value: Option<String>) {
        let Some(value) = value else { return };
        match parse_endpoint(&value) {
            Ok(url) => {
                log::info!("{} set, using endpoint {}", ENDPOINT_ENV_VAR, url);
                self.endpoint = url.to_string();
            }
            Err(e) => {
                log::warn!("Ignoring {}: {:#}", ENDPOINT_ENV_VAR, e);
            }
        }
    }

    /// The configured endpoint, or the default one if the stored value is unusable.
    pub fn endpoint_url(&self) -> Url {
        parse_endpoint(&self.endpoint).unwrap_or_else(|e| {
            log::warn!("Invalid endpoint in preferences, using {}: {:#}", DEFAULT_ENDPOINT, e);
            Url::parse(DEFAULT_ENDPOINT).expect("DEFAULT_ENDPOINT is a valid URL")
        })
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    pub fn classifier_config(&self) -> ClassifierConfig {
        ClassifierConfig {
            endpoint: self.endpoint_url(),
            timeout: self.request_timeout(),
        }
    }

    fn preferences_path() -> PathBuf {
        if let Some(home) = dirs::home_dir() {
            home.join(PREFERENCES_DIR).join(PREFERENCES_FILENAME)
        } else {
            PathBuf::from(PREFERENCES_DIR).join(PREFERENCES_FILENAME)
        }
    }
}

/// Parse an endpoint URL, accepting only http and https.
pub fn parse_endpoint(raw: &str) -> anyhow::Result<Url> {
    let url = Url::parse(raw.trim()).with_context(|| format!("'{}' is not a URL", raw.trim()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => bail!("unsupported scheme '{}' in '{}'", other, url),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let preferences = Preferences::default();
        assert_eq!(preferences.endpoint_url().as_str(), DEFAULT_ENDPOINT);
        assert_eq!(preferences.request_timeout(), None);
    }

    #[test]
    fn test_missing_file_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(PREFERENCES_FILENAME);

        let preferences = Preferences::load_from(&path);
        assert_eq!(preferences, Preferences::default());
        assert!(path.exists());

        let written: Preferences =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, preferences);
    }

    #[test]
    fn test_file_values_are_used() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PREFERENCES_FILENAME);
        std::fs::write(
            &path,
            r#"{ "endpoint": "https://classify.example.com/predict", "request_timeout_secs": 30 }"#,
        )
        .unwrap();

        let config = Preferences::load_from(&path).classifier_config();
        assert_eq!(config.endpoint.as_str(), "https://classify.example.com/predict");
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_broken_file_is_not_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PREFERENCES_FILENAME);
        std::fs::write(&path, "{ not json").unwrap();

        let preferences = Preferences::load_from(&path);
        assert_eq!(preferences, Preferences::default());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[test]
    fn test_unreadable_file_is_not_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PREFERENCES_FILENAME);
        let original = b"{ \"endpoint\": \"https://x.example.com/predict\" \xff }".to_vec();
        std::fs::write(&path, &original).unwrap();

        let preferences = Preferences::load_from(&path);
        assert_eq!(preferences, Preferences::default());
        assert_eq!(std::fs::read(&path).unwrap(), original);
    }

    #[test]
    fn test_env_override() {
        let mut preferences = Preferences::default();
        preferences.apply_endpoint_override(Some(" https://deployed.example.com/predict ".into()));
        assert_eq!(preferences.endpoint, "https://deployed.example.com/predict");

        // Unusable overrides keep the previous layer
        preferences.apply_endpoint_override(Some("localhost:5000/predict".into()));
        preferences.apply_endpoint_override(Some("not a url".into()));
        preferences.apply_endpoint_override(None);
        assert_eq!(preferences.endpoint, "https://deployed.example.com/predict");
    }

    #[test]
    fn test_invalid_stored_endpoint_falls_back() {
        let preferences = Preferences {
            endpoint: "ftp://example.com/predict".into(),
            request_timeout_secs: Some(0),
        };
        assert_eq!(preferences.endpoint_url().as_str(), DEFAULT_ENDPOINT);
        assert_eq!(preferences.request_timeout(), None);
    }
}
