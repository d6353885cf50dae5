use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// LaTeX compiler executable, looked up on `PATH` when not absolute.
    pub tectonic_bin: String,
    pub compile_timeout: Duration,
    pub cors_permissive: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            tectonic_bin: env_or("TECTONIC_BIN", "tectonic"),
            compile_timeout: Duration::from_secs(
                env_or("COMPILE_TIMEOUT_SECS", "60")
                    .parse::<u64>()
                    .context("COMPILE_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            cors_permissive: parse_bool(&env_or("CORS_PERMISSIVE", "true"))
                .context("CORS_PERMISSIVE must be true or false")?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            tectonic_bin: "tectonic".to_string(),
            compile_timeout: Duration::from_secs(60),
            cors_permissive: true,
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("unrecognised boolean '{other}'"),
    }
}
