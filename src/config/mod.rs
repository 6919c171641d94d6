//! Configuration module
//!
//! Holds the resolved application settings. Defaults may be overridden by
//! environment variables and then by command-line flags.

mod env;

pub use env::EnvConfig;

use serde::{Deserialize, Serialize};

/// Default Ollama server URL
pub const DEFAULT_HOST: &str = "http://localhost:11434";

/// Default model identifier
pub const DEFAULT_MODEL: &str = "phi4-mini";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the Ollama server
    pub host: String,

    /// Model identifier to query
    pub model: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl AppConfig {
    /// Build a configuration from environment overrides on top of defaults
    pub fn from_env(env: &EnvConfig) -> Self {
        Self {
            host: env.host_or(DEFAULT_HOST),
            model: env.model_or(DEFAULT_MODEL),
            timeout_secs: env.timeout_or(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.host, "http://localhost:11434");
        assert_eq!(config.model, "phi4-mini");
        assert_eq!(config.timeout_secs, 60);
    }

    #[test]
    fn test_env_overrides_defaults() {
        let env = EnvConfig {
            host: Some("http://10.0.0.5:11434".to_string()),
            timeout: Some(120),
            ..Default::default()
        };

        let config = AppConfig::from_env(&env);
        assert_eq!(config.host, "http://10.0.0.5:11434");
        assert_eq!(config.model, "phi4-mini");
        assert_eq!(config.timeout_secs, 120);
    }

    #[test]
    fn test_builder_overrides() {
        let config = AppConfig::default()
            .with_model("llama3.2")
            .with_timeout(10);

        assert_eq!(config.model, "llama3.2");
        assert_eq!(config.timeout_secs, 10);
    }
}
