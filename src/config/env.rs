//! Environment variable configuration
//!
//! Provides environment variable overrides for configuration.

use std::env;

/// Environment variable prefix
const ENV_PREFIX: &str = "OLLAMA_EVAL";

/// Configuration read from environment variables
#[derive(Clone, Debug, Default)]
pub struct EnvConfig {
    /// Server URL from OLLAMA_EVAL_HOST
    pub host: Option<String>,
    /// Model identifier from OLLAMA_EVAL_MODEL
    pub model: Option<String>,
    /// Timeout from OLLAMA_EVAL_TIMEOUT
    pub timeout: Option<u64>,
    /// Output format from OLLAMA_EVAL_FORMAT
    pub format: Option<String>,
    /// Verbose from OLLAMA_EVAL_VERBOSE
    pub verbose: Option<bool>,
    /// Conventional OLLAMA_HOST, used as a host fallback
    pub ollama_host: Option<String>,
}

impl EnvConfig {
    /// Load configuration from environment variables
    pub fn load() -> Self {
        Self {
            host: get_env("HOST"),
            model: get_env("MODEL"),
            timeout: get_env_parse("TIMEOUT"),
            format: get_env("FORMAT"),
            verbose: get_env_bool("VERBOSE"),
            ollama_host: env::var("OLLAMA_HOST").ok(),
        }
    }

    /// Get the server URL, falling back to OLLAMA_HOST and then the default
    pub fn host_or(&self, default: &str) -> String {
        self.host
            .clone()
            .or_else(|| self.ollama_host.clone())
            .unwrap_or_else(|| default.to_string())
    }

    /// Get the model with fallback
    pub fn model_or(&self, default: &str) -> String {
        self.model.clone().unwrap_or_else(|| default.to_string())
    }

    /// Get the timeout with fallback
    pub fn timeout_or(&self, default: u64) -> u64 {
        self.timeout.unwrap_or(default)
    }
}

/// Get environment variable with prefix
fn get_env(name: &str) -> Option<String> {
    env::var(format!("{ENV_PREFIX}_{name}")).ok()
}

/// Get environment variable and parse to type
fn get_env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    get_env(name).and_then(|v| v.parse().ok())
}

/// Get environment variable as boolean
fn get_env_bool(name: &str) -> Option<bool> {
    get_env(name).map(|v| {
        matches!(
            v.to_lowercase().as_str(),
            "1" | "true" | "yes" | "on" | "enabled"
        )
    })
}

/// Builder for setting environment variables (useful for testing)
#[cfg(test)]
pub struct EnvBuilder {
    vars: Vec<(String, String)>,
}

#[cfg(test)]
impl EnvBuilder {
    pub fn new() -> Self {
        Self { vars: Vec::new() }
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.vars.push((format!("{ENV_PREFIX}_HOST"), host.into()));
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.vars.push((format!("{ENV_PREFIX}_MODEL"), model.into()));
        self
    }

    pub fn timeout(mut self, timeout: u64) -> Self {
        self.vars
            .push((format!("{ENV_PREFIX}_TIMEOUT"), timeout.to_string()));
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.vars
            .push((format!("{ENV_PREFIX}_VERBOSE"), verbose.to_string()));
        self
    }

    /// Apply and return a guard that restores the previous values on drop
    pub fn apply_scoped(self) -> EnvGuard {
        let previous: Vec<_> = self
            .vars
            .iter()
            .map(|(k, _)| (k.clone(), env::var(k).ok()))
            .collect();

        for (key, value) in &self.vars {
            env::set_var(key, value);
        }

        EnvGuard { previous }
    }
}

/// Guard that restores environment variables on drop
#[cfg(test)]
pub struct EnvGuard {
    previous: Vec<(String, Option<String>)>,
}

#[cfg(test)]
impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in &self.previous {
            match value {
                Some(v) => env::set_var(key, v),
                None => env::remove_var(key),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_config_default() {
        let config = EnvConfig::default();
        assert!(config.host.is_none());
        assert!(config.model.is_none());
    }

    #[test]
    fn test_env_config_fallback() {
        let config = EnvConfig::default();
        assert_eq!(config.host_or("http://localhost:11434"), "http://localhost:11434");
        assert_eq!(config.model_or("phi4-mini"), "phi4-mini");
        assert_eq!(config.timeout_or(60), 60);
    }

    #[test]
    fn test_ollama_host_fallback_order() {
        let config = EnvConfig {
            ollama_host: Some("http://fallback:11434".to_string()),
            ..Default::default()
        };
        assert_eq!(config.host_or("http://default"), "http://fallback:11434");

        let config = EnvConfig {
            host: Some("http://primary:11434".to_string()),
            ollama_host: Some("http://fallback:11434".to_string()),
            ..Default::default()
        };
        assert_eq!(config.host_or("http://default"), "http://primary:11434");
    }

    #[test]
    fn test_env_builder() {
        let _guard = EnvBuilder::new()
            .host("http://10.0.0.1:11434")
            .model("llama3.2")
            .timeout(30)
            .verbose(true)
            .apply_scoped();

        let config = EnvConfig::load();
        assert_eq!(config.host, Some("http://10.0.0.1:11434".to_string()));
        assert_eq!(config.model, Some("llama3.2".to_string()));
        assert_eq!(config.timeout, Some(30));
        assert_eq!(config.verbose, Some(true));
    }
}
