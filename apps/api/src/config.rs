use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Only `PORT` is validated at startup; every other variable is optional.
#[derive(Debug, Clone)]
pub struct Config {
    /// Gemini credential. `None` disables live generation.
    pub gemini_api_key: Option<String>,
    /// Directory for file-backed roadmap progress.
    pub progress_dir: PathBuf,
    /// When set, roadmap progress is kept in Redis instead of `progress_dir`.
    pub redis_url: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            progress_dir: optional_env("PROGRESS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("data/progress")),
            redis_url: optional_env("REDIS_URL"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Reads an env var, treating blank values the same as unset ones.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
