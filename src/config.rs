/// Process-wide configuration
///
/// The only external configuration is the Gemini credential and an optional
/// model override, both read from the environment at startup. A missing API
/// key is a fatal configuration error: the window never opens without it.

use thiserror::Error;

/// Default model identifier for the generateContent endpoint
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Environment variable holding the API credential
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Environment variable overriding the model identifier (optional)
pub const MODEL_VAR: &str = "GEMINI_MODEL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing API credential: set the {API_KEY_VAR} environment variable")]
    MissingApiKey,
}

/// Startup configuration for the analysis client
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
}

impl Config {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through an arbitrary lookup function
    ///
    /// Kept separate from `from_env` so tests don't have to mutate the
    /// process environment.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = lookup(API_KEY_VAR)
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let model = lookup(MODEL_VAR)
            .filter(|model| !model.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        Ok(Config { api_key, model })
    }
}
