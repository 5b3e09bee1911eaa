// src/config/mod.rs
// Environment-based configuration for the Semrush API client

use crate::error::{Result, SemrushError};
use std::path::PathBuf;
use tracing::debug;

/// Default Semrush API root
pub const DEFAULT_BASE_URL: &str = "https://api.semrush.com";

/// Environment variable holding the API credential
pub const API_KEY_VAR: &str = "SEMRUSH_API_KEY";

/// Environment variable overriding the API root
pub const BASE_URL_VAR: &str = "SEMRUSH_API_URL";

/// Settings handed to the invoker at construction time.
///
/// Read once at startup; never mutated afterwards.
#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Config {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: normalize_base_url(&base_url.into()),
        }
    }

    /// Load configuration from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// A missing or blank `SEMRUSH_API_KEY` is an error; the API root falls
    /// back to [`DEFAULT_BASE_URL`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                SemrushError::Config(format!("{API_KEY_VAR} environment variable is required"))
            })?;

        let base_url = lookup(BASE_URL_VAR)
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let config = Self::new(api_key, base_url);
        debug!(base_url = %config.base_url, "Semrush configuration loaded");
        Ok(config)
    }
}

/// `.env` files in load order: the per-user file, then the working directory.
///
/// dotenvy never overrides a variable that is already set, so the process
/// environment wins over both and the user file wins over the project file.
pub fn env_files() -> Vec<PathBuf> {
    let mut files = Vec::with_capacity(2);
    if let Some(home) = dirs::home_dir() {
        files.push(home.join(".semrush-mcp").join(".env"));
    }
    files.push(PathBuf::from(".env"));
    files
}

/// Load every existing `.env` file from [`env_files`]
pub fn load_env_files() {
    for path in env_files() {
        let _ = dotenvy::from_path(&path);
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_missing_key_is_config_error() {
        let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, SemrushError::Config(_)));
        assert!(err.to_string().contains(API_KEY_VAR));
    }

    #[test]
    fn test_blank_key_is_config_error() {
        let err = Config::from_lookup(lookup_from(&[(API_KEY_VAR, "   ")])).unwrap_err();
        assert!(matches!(err, SemrushError::Config(_)));
    }

    #[test]
    fn test_default_base_url() {
        let config = Config::from_lookup(lookup_from(&[(API_KEY_VAR, " abc123 ")])).unwrap();
        assert_eq!(config.api_key, "abc123");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_base_url_override_strips_trailing_slash() {
        let config = Config::from_lookup(lookup_from(&[
            (API_KEY_VAR, "abc123"),
            (BASE_URL_VAR, "http://127.0.0.1:9999/"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:9999");
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = Config::new("secret-key", DEFAULT_BASE_URL);
        let debug = format!("{:?}", config);
        assert!(!debug.contains("secret-key"));
        assert!(debug.contains("redacted"));
    }

    #[test]
    fn test_user_env_file_loads_before_project_file() {
        let files = env_files();
        assert_eq!(files.last(), Some(&PathBuf::from(".env")));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(files.len(), 2);
            assert_eq!(files[0], home.join(".semrush-mcp").join(".env"));
        }
    }
}
