// src/config.rs
// Explicit runtime configuration, built once at startup and passed into the
// client - no ambient globals

use crate::error::{CoachError, Result};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

const API_KEY_ENV: &str = "GENAI_API_KEY";

#[derive(Debug, Clone)]
pub struct CoachConfig {
    pub api_key: String,
    pub base_url: String,
}

impl CoachConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the client somewhere else, e.g. a mock server in tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Read the API key from the environment (`.env` files are honored when
    /// the caller loaded them beforehand).
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV).map_err(|_| CoachError::Config {
            message: format!("{} is not set; configure your API key first", API_KEY_ENV),
        })?;
        if api_key.trim().is_empty() {
            return Err(CoachError::Config {
                message: format!("{} is set but empty", API_KEY_ENV),
            });
        }
        Ok(Self::new(api_key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_hosted_endpoint() {
        let config = CoachConfig::new("k");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_base_url_override() {
        let config = CoachConfig::new("k").with_base_url("http://127.0.0.1:8080");
        assert_eq!(config.base_url, "http://127.0.0.1:8080");
    }
}
