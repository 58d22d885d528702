//! Text-generation provider configuration
//!
//! The provider is optional. Without a usable key the deterministic
//! security scorer is used.

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Keys shorter than this are treated as placeholders.
const MIN_KEY_LEN: usize = 21;

/// AI provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// OpenAI API key
    pub openai_api_key: Option<Secret<String>>,

    /// Chat completion model
    #[serde(default = "default_model")]
    pub model: String,

    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Maximum retries on failure
    #[serde(default = "default_retries")]
    pub max_retries: u32,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// True when the key looks like a real OpenAI key rather than a
    /// placeholder.
    pub fn has_openai(&self) -> bool {
        self.openai_api_key.as_ref().is_some_and(|k| {
            let key = k.expose_secret();
            key.starts_with("sk-") && key.len() >= MIN_KEY_LEN
        })
    }

    /// Validate AI configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.base_url.starts_with("https://") || self.base_url.starts_with("http://")) {
            return Err(ValidationError::InvalidBaseUrl);
        }
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidAiTimeout);
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            max_retries: default_retries(),
        }
    }
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_retries() -> u32 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_key(key: &str) -> AiConfig {
        AiConfig {
            openai_api_key: Some(Secret::new(key.to_string())),
            ..Default::default()
        }
    }

    #[test]
    fn test_ai_config_defaults() {
        let config = AiConfig::default();
        assert_eq!(config.model, "gpt-3.5-turbo");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.max_retries, 1);
        assert!(!config.has_openai());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_timeout_duration() {
        let config = AiConfig {
            timeout_secs: 60,
            ..Default::default()
        };
        assert_eq!(config.timeout(), Duration::from_secs(60));
    }

    #[test]
    fn test_placeholder_keys_are_not_usable() {
        assert!(!with_key("sk-xxx").has_openai());
        assert!(!with_key("your-openai-api-key-goes-here").has_openai());
        assert!(with_key("sk-abcdefghijklmnopqrstuvwxyz").has_openai());
    }

    #[test]
    fn test_key_is_not_printed() {
        let config = with_key("sk-abcdefghijklmnopqrstuvwxyz");
        assert!(!format!("{:?}", config).contains("abcdefghij"));
    }

    #[test]
    fn test_validation_bad_base_url() {
        let config = AiConfig {
            base_url: "api.openai.com".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidBaseUrl));
    }

    #[test]
    fn test_validation_bad_timeout() {
        let config = AiConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidAiTimeout));
    }
}
