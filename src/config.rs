//! Application configuration loaded from environment variables.

use std::env;

const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the backend API (no trailing slash)
    pub api_base_url: String,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `API_BASE_URL` falls back to `http://localhost:8080` when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let api_base_url =
            env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        let api_base_url = api_base_url.trim().trim_end_matches('/').to_string();
        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            return Err(ConfigError::Invalid("API_BASE_URL", api_base_url));
        }

        Ok(Self { api_base_url })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test: these cases share the API_BASE_URL env var and must
    // not run concurrently.
    #[test]
    fn test_config_from_env() {
        env::remove_var("API_BASE_URL");
        let config = Config::from_env().expect("Config should load");
        assert_eq!(config.api_base_url, "http://localhost:8080");

        env::set_var("API_BASE_URL", "https://api.example.com/");
        let config = Config::from_env().expect("Config should load");
        assert_eq!(config.api_base_url, "https://api.example.com");

        env::set_var("API_BASE_URL", "ftp://api.example.com");
        let result = Config::from_env();
        assert!(matches!(result, Err(ConfigError::Invalid("API_BASE_URL", _))));

        env::remove_var("API_BASE_URL");
    }
}
