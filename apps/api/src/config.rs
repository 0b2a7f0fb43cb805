use anyhow::{anyhow, Context, Result};

use crate::analysis::extractor::MatchMode;
use crate::analysis::jitter::JitterMode;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub github_api_url: String,
    pub github_token: Option<String>,
    pub github_timeout_secs: u64,
    pub jitter_mode: JitterMode,
    pub match_mode: MatchMode,
    pub max_upload_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            github_api_url: "https://api.github.com".to_string(),
            github_token: None,
            github_timeout_secs: 10,
            jitter_mode: JitterMode::Seeded,
            match_mode: MatchMode::Substring,
            max_upload_bytes: 5 * 1024 * 1024,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();

        Ok(Config {
            port: parse_env("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            github_api_url: std::env::var("GITHUB_API_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or(defaults.github_api_url),
            github_token: std::env::var("GITHUB_TOKEN")
                .ok()
                .filter(|t| !t.trim().is_empty()),
            github_timeout_secs: parse_env("GITHUB_TIMEOUT_SECS", defaults.github_timeout_secs)?,
            jitter_mode: parse_mode("JITTER_MODE", defaults.jitter_mode)?,
            match_mode: parse_mode("SKILL_MATCH_MODE", defaults.match_mode)?,
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", defaults.max_upload_bytes)?,
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}

fn parse_mode<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr<Err = String>,
{
    match std::env::var(key) {
        Ok(raw) => raw.parse::<T>().map_err(|e| anyhow!("{key}: {e}")),
        Err(_) => Ok(default),
    }
}
