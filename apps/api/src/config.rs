use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::format::{Item, StrftimeItems};

/// Timestamp layout that mirrors an en-US `toLocaleString()`.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed numbers fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub preferences_path: PathBuf,
    pub max_upload_bytes: usize,
    pub report_timestamp_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            preferences_path: PathBuf::from("data/preferences.json"),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            report_timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();

        Ok(Config {
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", &defaults.rust_log),
            preferences_path: std::env::var("PREFERENCES_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.preferences_path),
            max_upload_bytes: match std::env::var("MAX_UPLOAD_BYTES") {
                Ok(raw) => raw
                    .parse::<usize>()
                    .context("MAX_UPLOAD_BYTES must be a byte count")?,
                Err(_) => defaults.max_upload_bytes,
            },
            report_timestamp_format: check_timestamp_format(env_or(
                "REPORT_TIMESTAMP_FORMAT",
                &defaults.report_timestamp_format,
            ))
            .context("REPORT_TIMESTAMP_FORMAT must be a valid strftime format")?,
        })
    }
}

/// Rejects layouts chrono cannot render; `format()` panics on them at export time.
fn check_timestamp_format(format: String) -> Result<String> {
    if StrftimeItems::new(&format).any(|item| matches!(item, Item::Error)) {
        bail!("unrecognized specifier in '{format}'");
    }
    Ok(format)
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
