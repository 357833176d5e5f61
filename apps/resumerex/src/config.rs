use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash-lite";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_SERPAPI_BASE_URL: &str = "https://serpapi.com";

/// Application configuration loaded from environment variables.
///
/// API keys are optional at startup. A missing key surfaces as a service error
/// the first time the corresponding client is used, so the rest of the
/// pipeline stays usable.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub serpapi_api_key: Option<String>,
    pub serpapi_base_url: String,
    pub port: u16,
    pub rust_log: String,
    /// Default number of keywords requested from the model.
    pub keyword_count: usize,
    /// Character budget for job descriptions in results and exports.
    pub description_max_chars: usize,
    /// Courtesy pause after every job-search call.
    pub search_pause: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            gemini_model: optional_env("GEMINI_MODEL")
                .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            gemini_base_url: optional_env("GEMINI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
            serpapi_api_key: optional_env("SERPAPI_API_KEY"),
            serpapi_base_url: optional_env("SERPAPI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_SERPAPI_BASE_URL.to_string()),
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            keyword_count: parse_env("KEYWORD_COUNT", 10)?,
            description_max_chars: parse_env("DESCRIPTION_MAX_CHARS", 300)?,
            search_pause: Duration::from_millis(parse_env("SEARCH_PAUSE_MS", 500)?),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            gemini_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            serpapi_api_key: None,
            serpapi_base_url: DEFAULT_SERPAPI_BASE_URL.to_string(),
            port: 8080,
            rust_log: "info".to_string(),
            keyword_count: 10,
            description_max_chars: 300,
            search_pause: Duration::from_millis(500),
        }
    }
}

/// Blank values count as unset so `KEY=` in a `.env` file disables a client.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_documented_values() {
        let config = Config::default();
        assert_eq!(config.keyword_count, 10);
        assert_eq!(config.description_max_chars, 300);
        assert_eq!(config.search_pause, Duration::from_millis(500));
        assert!(config.gemini_api_key.is_none());
        assert!(config.serpapi_api_key.is_none());
    }

    #[test]
    fn test_parse_env_uses_default_when_unset() {
        let value: u16 = parse_env("RESUMEREX_TEST_UNSET_PORT", 4242).unwrap();
        assert_eq!(value, 4242);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("RESUMEREX_TEST_BAD_COUNT", "ten");
        let result: Result<usize> = parse_env("RESUMEREX_TEST_BAD_COUNT", 10);
        std::env::remove_var("RESUMEREX_TEST_BAD_COUNT");
        let err = result.unwrap_err().to_string();
        assert!(err.contains("RESUMEREX_TEST_BAD_COUNT"));
    }

    #[test]
    fn test_optional_env_treats_blank_as_unset() {
        std::env::set_var("RESUMEREX_TEST_BLANK_KEY", "   ");
        let value = optional_env("RESUMEREX_TEST_BLANK_KEY");
        std::env::remove_var("RESUMEREX_TEST_BLANK_KEY");
        assert!(value.is_none());
    }
}
