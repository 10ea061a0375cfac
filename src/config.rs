use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::net::SocketAddr;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_path: String,
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    /// Base URL of the upstream data API (serves `/listings` and `/locations`).
    pub data_api_url: Option<String>,
    /// JSON file imported into an empty catalog on startup.
    pub seed_path: Option<String>,
    /// Shared token guarding the admin routes. `None` leaves them open (dev mode).
    pub admin_token: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            database_path: env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "site.sqlite3".to_string()),
            bind_addr: env::var("BIND_ADDR")
                .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
                .parse()
                .context("BIND_ADDR must be a socket address like 127.0.0.1:3000")?,
            max_workers: env::var("MAX_WORKERS")
                .unwrap_or_else(|_| "8".to_string())
                .parse()
                .context("MAX_WORKERS must be a valid number")?,
            data_api_url: non_empty_var("DATA_API_URL"),
            seed_path: non_empty_var("SEED_PATH"),
            admin_token: non_empty_var("ADMIN_TOKEN"),
        })
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
