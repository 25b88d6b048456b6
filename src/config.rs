use anyhow::{Context, Result};
use std::collections::HashMap;
use std::env;
use std::path::Path;

use crate::api_connection::endpoints::{DEFAULT_API_BASE, DEFAULT_MODEL};

pub const API_KEY_ENV_VAR: &str = "API_KEY";
pub const FALLBACK_API_KEY_ENV_VAR: &str = "GEMINI_API_KEY";
pub const MODEL_ENV_VAR: &str = "HEALTHY_BITES_MODEL";
pub const API_BASE_ENV_VAR: &str = "HEALTHY_BITES_API_BASE";

#[derive(Debug, Clone, PartialEq)]
pub struct GatewayConfig {
    pub api_key: String,
    pub model: String,
    pub api_base: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

impl GatewayConfig {
    /// Reads the process environment after loading an optional `.env` file.
    ///
    /// A missing key is not an error here: requests go out with an empty key
    /// and fail authentication at the remote endpoint.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Parses a dotenv-format file without touching the process environment.
    #[allow(deprecated)]
    pub fn from_env_file(path: &Path) -> Result<Self> {
        let iter = dotenv::from_path_iter(path)
            .with_context(|| format!("Failed to open env file '{}'", path.display()))?;
        let mut values = HashMap::new();
        for item in iter {
            let (key, value) = item
                .with_context(|| format!("Failed to parse env file '{}'", path.display()))?;
            values.insert(key, value);
        }
        Ok(Self::from_lookup(|key| values.get(key).cloned()))
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = non_empty(API_KEY_ENV_VAR)
            .or_else(|| non_empty(FALLBACK_API_KEY_ENV_VAR))
            .unwrap_or_default();
        let config = Self {
            api_key,
            model: non_empty(MODEL_ENV_VAR).unwrap_or(defaults.model),
            api_base: non_empty(API_BASE_ENV_VAR).unwrap_or(defaults.api_base),
        };
        if !config.has_api_key() {
            tracing::warn!(
                "{} is not set; requests will be sent without a credential",
                API_KEY_ENV_VAR
            );
        }
        config
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = GatewayConfig::from_lookup(|_| None);
        assert!(!config.has_api_key());
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn test_blank_key_counts_as_missing() {
        let config = GatewayConfig::from_lookup(|key| match key {
            API_KEY_ENV_VAR => Some("   ".to_string()),
            _ => None,
        });
        assert!(!config.has_api_key());
        assert_eq!(config.api_key, "");
    }

    #[test]
    fn test_fallback_key_is_used() {
        let config = GatewayConfig::from_lookup(|key| match key {
            FALLBACK_API_KEY_ENV_VAR => Some("fallback".to_string()),
            _ => None,
        });
        assert_eq!(config.api_key, "fallback");
    }

    #[test]
    fn test_primary_key_wins_and_blank_values_are_ignored() {
        let config = GatewayConfig::from_lookup(|key| match key {
            API_KEY_ENV_VAR => Some("primary".to_string()),
            FALLBACK_API_KEY_ENV_VAR => Some("fallback".to_string()),
            MODEL_ENV_VAR => Some("   ".to_string()),
            _ => None,
        });
        assert_eq!(config.api_key, "primary");
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_from_env_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "API_KEY=from-file").unwrap();
        writeln!(file, "HEALTHY_BITES_MODEL=gemini-custom").unwrap();
        writeln!(file, "HEALTHY_BITES_API_BASE=http://127.0.0.1:8080").unwrap();

        let config = GatewayConfig::from_env_file(file.path()).unwrap();
        assert_eq!(config.api_key, "from-file");
        assert_eq!(config.model, "gemini-custom");
        assert_eq!(config.api_base, "http://127.0.0.1:8080");
    }

    #[test]
    fn test_from_env_file_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let result = GatewayConfig::from_env_file(&dir.path().join("absent.env"));
        assert!(result.is_err());
    }
}
