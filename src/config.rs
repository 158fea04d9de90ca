//! Process configuration.
//!
//! The credential is resolved exactly once at startup and handed to the
//! client explicitly; nothing reads it from ambient global state afterwards.
//! Both binaries treat a missing credential as fatal before serving any
//! request.

use crate::cli::Args;
use anyhow::{anyhow, Result};
use secrecy::SecretString;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Environment variable holding the API credential.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Environment overrides used by the web binary.
pub const BASE_URL_ENV: &str = "ASKEXPERT_BASE_URL";
pub const MODEL_ENV: &str = "ASKEXPERT_MODEL";

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub model: String,
    api_key: Option<SecretString>,
}

impl Config {
    pub fn new(
        base_url: Option<String>,
        model: Option<String>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_key: api_key.map(SecretString::from),
        }
    }

    /// Build configuration from parsed CLI arguments.
    pub fn from_args(args: &Args) -> Self {
        Self::new(
            args.base_url.clone(),
            args.model.clone(),
            args.api_key.clone(),
        )
    }

    /// Build configuration from environment variables only.
    pub fn from_env() -> Self {
        Self::new(
            std::env::var(BASE_URL_ENV).ok(),
            std::env::var(MODEL_ENV).ok(),
            None,
        )
    }

    /// Resolve the API credential: an explicitly configured key wins,
    /// otherwise fall back to the environment.
    pub fn resolve_api_key(&self) -> Result<SecretString> {
        if let Some(key) = &self.api_key {
            return Ok(key.clone());
        }

        match std::env::var(API_KEY_ENV) {
            Ok(value) if !value.is_empty() => Ok(SecretString::from(value)),
            _ => Err(anyhow!(
                "No API key configured. Set {} or pass --api-key.",
                API_KEY_ENV
            )),
        }
    }
}
