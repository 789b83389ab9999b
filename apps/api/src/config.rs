use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

use crate::menu::ValidationPolicy;

/// Application configuration loaded from environment variables.
/// Fails at startup if a variable is present but invalid.
#[derive(Debug, Clone)]
pub struct Config {
    pub menu_data_path: PathBuf,
    pub messages_path: Option<PathBuf>,
    pub validation: ValidationPolicy,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            menu_data_path: std::env::var("MENU_DATA_PATH")
                .unwrap_or_else(|_| "menu_data.json".to_string())
                .into(),
            messages_path: std::env::var("MENU_MESSAGES_PATH").ok().map(PathBuf::from),
            validation: match std::env::var("MENU_VALIDATION") {
                Ok(raw) => raw
                    .parse::<ValidationPolicy>()
                    .map_err(|e| anyhow!(e))
                    .context("MENU_VALIDATION must be 'lenient' or 'strict'")?,
                Err(_) => ValidationPolicy::default(),
            },
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
