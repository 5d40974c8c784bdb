//! AI adapter settings, read from the environment.
//!
//! | variable                 | default                          |
//! |--------------------------|----------------------------------|
//! | `SQG_AI_API_KEY`         | falls back to `GROQ_API_KEY`     |
//! | `SQG_AI_BASE_URL`        | `https://api.groq.com/openai/v1` |
//! | `SQG_AI_MODEL`           | `llama-3.3-70b-versatile`        |
//! | `SQG_AI_TIMEOUT_SECONDS` | 30                               |

use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const TEMPERATURE: f32 = 0.3;
pub const TOP_P: f32 = 0.9;
pub const MAX_TOKENS: u32 = 500;

#[derive(Debug, Clone, PartialEq)]
pub struct AiConfig {
    /// Trimmed, non-empty key, if any.
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
    pub temperature: f32,
    pub top_p: f32,
    pub max_tokens: u32,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            temperature: TEMPERATURE,
            top_p: TOP_P,
            max_tokens: MAX_TOKENS,
        }
    }
}

impl AiConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any variable lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let defaults = Self::default();
        Self {
            api_key: get("SQG_AI_API_KEY").or_else(|| get("GROQ_API_KEY")),
            base_url: get("SQG_AI_BASE_URL").unwrap_or(defaults.base_url),
            model: get("SQG_AI_MODEL").unwrap_or(defaults.model),
            timeout: get("SQG_AI_TIMEOUT_SECONDS")
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            ..defaults
        }
    }

    /// Whether a credential is present.
    pub fn is_available(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
