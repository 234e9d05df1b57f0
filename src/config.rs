use std::env;

use thiserror::Error;

/// A required environment variable was absent. Fatal: the entry point
/// reports the Display form on stderr and exits with code 1.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} not found.")]
    MissingVar(&'static str),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub openai_api_key: String,
    pub release_notes: String,
    pub openai_org_id: Option<String>,
    pub openai_model: Option<String>,
}

impl AppConfig {
    /// Reads the process environment once at startup. `OPENAI_API_KEY` is
    /// checked before `RELEASE_NOTES`; an empty value counts as absent.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            openai_api_key: require_var("OPENAI_API_KEY")?,
            release_notes: require_var("RELEASE_NOTES")?,
            openai_org_id: env::var("OPENAI_ORG_ID").ok(),
            openai_model: env::var("OPENAI_MODEL").ok(),
        })
    }
}

fn require_var(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(name)),
    }
}
