use std::env;
use std::fmt;

use tracing::{info, warn};

/// Settings for the completion API.
///
/// The API key is injected from the environment and never logged.
#[derive(Clone)]
pub struct RelayConfig {
    /// Bearer credential for the completion API
    pub api_key: Option<String>,
    /// Base URL of the OpenAI-compatible API, without a trailing slash
    pub base_url: String,
    /// Model identifier
    pub model: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Reply length cap
    pub max_tokens: u32,
    /// Optional request timeout; no timeout when unset
    pub timeout_secs: Option<u64>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.groq.com/openai/v1".to_string(),
            model: "llama3-8b-8192".to_string(),
            temperature: 0.1,
            max_tokens: 300,
            timeout_secs: None,
        }
    }
}

impl fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelayConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl RelayConfig {
    /// Create a relay configuration from environment variables
    pub fn from_env() -> Self {
        let config = Self::from_lookup(|key| env::var(key).ok());

        if config.api_key.is_none() {
            warn!("GROQ_API_KEY is not set; relay functions will answer with fallbacks");
        }
        info!(
            "Relay configuration: base_url={}, model={}, temperature={}, max_tokens={}, timeout={:?}",
            config.base_url, config.model, config.temperature, config.max_tokens, config.timeout_secs
        );

        config
    }

    /// Build a configuration from any key lookup, ignoring unparseable values
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            api_key: lookup("GROQ_API_KEY").filter(|key| !key.trim().is_empty()),
            base_url: lookup("GROQ_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            model: lookup("GROQ_MODEL").unwrap_or(defaults.model),
            temperature: lookup("RELAY_TEMPERATURE")
                .and_then(|t| t.parse().ok())
                .unwrap_or(defaults.temperature),
            max_tokens: lookup("RELAY_MAX_TOKENS")
                .and_then(|t| t.parse().ok())
                .unwrap_or(defaults.max_tokens),
            timeout_secs: lookup("RELAY_TIMEOUT_SECS").and_then(|t| t.parse().ok()),
        }
    }

    /// Full URL of the chat-completions endpoint
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
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
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = RelayConfig::from_lookup(|_| None);
        assert!(config.api_key.is_none());
        assert_eq!(config.completions_url(), "https://api.groq.com/openai/v1/chat/completions");
        assert_eq!(config.model, "llama3-8b-8192");
        assert_eq!(config.max_tokens, 300);
        assert!(config.timeout_secs.is_none());
    }

    #[test]
    fn test_overrides_and_bad_values() {
        let config = RelayConfig::from_lookup(lookup_from(&[
            ("GROQ_API_KEY", "secret"),
            ("GROQ_API_URL", "http://localhost:8080/v1/"),
            ("RELAY_MAX_TOKENS", "not-a-number"),
            ("RELAY_TIMEOUT_SECS", "5"),
        ]));
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.completions_url(), "http://localhost:8080/v1/chat/completions");
        assert_eq!(config.max_tokens, 300);
        assert_eq!(config.timeout_secs, Some(5));
    }

    #[test]
    fn test_blank_key_counts_as_missing() {
        let config = RelayConfig::from_lookup(lookup_from(&[("GROQ_API_KEY", "  ")]));
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = RelayConfig {
            api_key: Some("super-secret".to_string()),
            ..Default::default()
        };
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
