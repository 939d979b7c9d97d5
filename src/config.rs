use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::apod::dates::format_iso;
use crate::history::storage::KeyValueStore;

pub const SETTINGS_KEY: &str = "apod.settings";
pub const DEFAULT_API_BASE: &str = "https://api.nasa.gov/planetary/apod";

/// Key baked in at build time, or NASA's rate-limited shared key.
pub fn default_api_key() -> String {
    option_env!("APOD_API_KEY").unwrap_or("DEMO_KEY").to_string()
}

/// User-adjustable settings, persisted as JSON next to the history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApodConfig {
    pub api_base: String,
    pub api_key: String,
    pub log_level: String,
}

impl Default for ApodConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            api_key: default_api_key(),
            log_level: "info".to_string(),
        }
    }
}

impl ApodConfig {
    /// Read settings, falling back to defaults when absent or unreadable.
    pub fn load<S: KeyValueStore>(storage: &S) -> Self {
        match storage.get_raw(SETTINGS_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("Ignoring malformed settings: {}", e);
                Self::default()
            }),
            Ok(None) => Self::default(),
            Err(e) => {
                warn!("Failed to read settings: {}", e);
                Self::default()
            }
        }
    }

    pub fn save<S: KeyValueStore>(&self, storage: &S) -> Result<(), String> {
        let raw = serde_json::to_string(self).map_err(|e| e.to_string())?;
        storage
            .set_raw(SETTINGS_KEY, &raw)
            .map_err(|e| e.to_string())?;
        info!("Saved settings (endpoint {})", self.api_base);
        Ok(())
    }

    /// Replace the API key. Blank keys are rejected.
    pub fn with_api_key(mut self, key: &str) -> Result<Self, String> {
        let key = key.trim();
        if key.is_empty() {
            return Err("Please enter an API key".to_string());
        }
        self.api_key = key.to_string();
        Ok(self)
    }

    pub fn uses_default_key(&self) -> bool {
        self.api_key == default_api_key()
    }

    /// Level filter for the console logger; unknown names mean `info`.
    pub fn max_level(&self) -> tracing::Level {
        self.log_level
            .parse()
            .unwrap_or(tracing::Level::INFO)
    }

    /// Single-day query: the same date is sent as start and end.
    pub fn request_url(&self, date: NaiveDate) -> String {
        let day = format_iso(date);
        format!(
            "{}?api_key={}&start_date={}&end_date={}",
            self.api_base.trim_end_matches('/'),
            urlencoding::encode(&self.api_key),
            day,
            day
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::storage::MemoryStorage;

    #[test]
    fn test_load_defaults_when_absent() {
        let storage = MemoryStorage::new();
        assert_eq!(ApodConfig::load(&storage), ApodConfig::default());
    }

    #[test]
    fn test_load_fills_missing_fields() {
        let storage = MemoryStorage::new();
        storage
            .set_raw(SETTINGS_KEY, r#"{"api_key":"abc"}"#)
            .unwrap();
        let config = ApodConfig::load(&storage);
        assert_eq!(config.api_key, "abc");
        assert_eq!(config.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn test_load_malformed_uses_defaults() {
        let storage = MemoryStorage::new();
        storage.set_raw(SETTINGS_KEY, "{not json").unwrap();
        assert_eq!(ApodConfig::load(&storage), ApodConfig::default());
    }

    #[test]
    fn test_save_and_reload() {
        let storage = MemoryStorage::new();
        let config = ApodConfig::default().with_api_key(" my-key ").unwrap();
        config.save(&storage).unwrap();
        assert_eq!(ApodConfig::load(&storage).api_key, "my-key");
    }

    #[test]
    fn test_blank_key_rejected() {
        assert!(ApodConfig::default().with_api_key("   ").is_err());
    }

    #[test]
    fn test_request_url() {
        let config = ApodConfig {
            api_base: "https://example.test/apod/".to_string(),
            api_key: "k y".to_string(),
            log_level: "debug".to_string(),
        };
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(
            config.request_url(date),
            "https://example.test/apod?api_key=k%20y&start_date=2024-01-01&end_date=2024-01-01"
        );
    }

    #[test]
    fn test_max_level() {
        let mut config = ApodConfig::default();
        assert_eq!(config.max_level(), tracing::Level::INFO);
        config.log_level = "debug".to_string();
        assert_eq!(config.max_level(), tracing::Level::DEBUG);
        config.log_level = "chatty".to_string();
        assert_eq!(config.max_level(), tracing::Level::INFO);
    }
}
