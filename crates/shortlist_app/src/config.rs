//! RON configuration for the shortlist app.

use std::fs;
use std::path::Path;
use std::time::Duration;

use client_logging::client_warn;
use serde::{Deserialize, Serialize};
use shortlist_client::ApiSettings;
use shortlist_core::DEFAULT_PAGE_SIZE;

const CONFIG_FILENAME: &str = "shortlist.ron";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    pub page_size: usize,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub log_to_file: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            connect_timeout_secs: 10,
            request_timeout_secs: 30,
            log_to_file: true,
        }
    }
}

impl AppConfig {
    pub fn api_settings(&self) -> ApiSettings {
        ApiSettings {
            base_url: self.base_url.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }
}

/// Reads `shortlist.ron` from `dir`, falling back to defaults when the file
/// is missing or unreadable.
pub fn load(dir: &Path) -> AppConfig {
    let path = dir.join(CONFIG_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return AppConfig::default();
        }
        Err(err) => {
            client_warn!("Failed to read config from {:?}: {}", path, err);
            return AppConfig::default();
        }
    };

    match ron::from_str(&content) {
        Ok(config) => config,
        Err(err) => {
            client_warn!("Failed to parse config from {:?}: {}", path, err);
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");

        assert_eq!(load(dir.path()), AppConfig::default());
    }

    #[test]
    fn config_file_overrides_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            "(base_url: \"http://backend:9000\", page_size: 10)",
        )
        .expect("write config");

        let config = load(dir.path());

        assert_eq!(config.base_url, "http://backend:9000");
        assert_eq!(config.page_size, 10);
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join(CONFIG_FILENAME), "not ron at all").expect("write config");

        assert_eq!(load(dir.path()), AppConfig::default());
    }
}
