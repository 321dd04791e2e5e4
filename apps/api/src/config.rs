use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a sensible default; nothing is required at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the offerings catalog JSON file (default source).
    pub catalog_path: PathBuf,
    /// When set, the catalog is fetched from this static HTTP resource instead.
    pub catalog_url: Option<String>,
    /// Minimum profile length before generation is allowed.
    pub min_profile_chars: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            catalog_path: std::env::var("CATALOG_PATH")
                .unwrap_or_else(|_| "data/offerings.json".to_string())
                .into(),
            catalog_url: std::env::var("CATALOG_URL").ok().filter(|u| !u.is_empty()),
            min_profile_chars: std::env::var("MIN_PROFILE_CHARS")
                .unwrap_or_else(|_| "60".to_string())
                .parse::<usize>()
                .context("MIN_PROFILE_CHARS must be a number")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
