use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every value has a default, so the service starts with no environment at
/// all; the backend base URL points at the enhancement/save service.
#[derive(Debug, Clone)]
pub struct Config {
    pub backend_base_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            backend_base_url: std::env::var("BACKEND_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
