use anyhow::{bail, Context, Result};

use crate::llm_client::{CompletionSettings, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TEMPERATURE};

/// Application configuration loaded from environment variables.
/// Only malformed values fail startup; a missing API key surfaces on the first completion call.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub completion: CompletionSettings,
    pub llm_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let temperature = optional_env("OPENAI_TEMPERATURE")
            .map(|raw| parse_temperature(&raw))
            .transpose()?
            .unwrap_or(DEFAULT_TEMPERATURE);

        Ok(Config {
            openai_api_key: std::env::var("OPENAI_API_KEY").unwrap_or_default(),
            openai_base_url: optional_env("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            completion: CompletionSettings {
                model: optional_env("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                temperature,
            },
            llm_timeout_secs: parse_timeout_secs(
                &std::env::var("LLM_TIMEOUT_SECS").unwrap_or_else(|_| "120".to_string()),
            )
            .context("LLM_TIMEOUT_SECS must be a positive whole number of seconds")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Reads a variable, treating an empty value the same as an unset one.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Parses a sampling temperature. The completion API accepts 0.0 through 2.0.
pub fn parse_temperature(raw: &str) -> Result<f32> {
    let value = raw
        .trim()
        .parse::<f32>()
        .with_context(|| format!("temperature '{raw}' is not a number"))?;
    if !(0.0..=2.0).contains(&value) {
        bail!("temperature {value} is outside the supported range 0.0..=2.0");
    }
    Ok(value)
}

/// Parses the HTTP client timeout. Zero would fail every request immediately.
pub fn parse_timeout_secs(raw: &str) -> Result<u64> {
    let secs = raw
        .trim()
        .parse::<u64>()
        .with_context(|| format!("timeout '{raw}' is not a whole number"))?;
    if secs == 0 {
        bail!("timeout must be at least one second");
    }
    Ok(secs)
}
