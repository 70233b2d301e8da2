//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Leptos site settings (address, site root) are read separately by
//! `leptos::prelude::get_configuration`.

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LogFormat {
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        }
    }
}

/// Default `tracing` filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `tracing` filter directive, e.g. `info,aitoolhub=debug`
    pub log_filter: String,

    /// Human readable or JSON log lines
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("RUST_LOG").ok(),
            std::env::var("LOG_FORMAT").ok(),
        )
    }

    fn from_vars(log_filter: Option<String>, log_format: Option<String>) -> Self {
        Self {
            log_filter: log_filter
                .filter(|f| !f.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            log_format: log_format
                .as_deref()
                .map(LogFormat::parse)
                .unwrap_or_default(),
        }
    }

    pub fn is_json(&self) -> bool {
        self.log_format == LogFormat::Json
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_vars(None, None)
    }
}
