//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the reviews come from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Scheme, host and port of the review service (e.g. `http://127.0.0.1:5001`).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            endpoint: default_endpoint(),
        }
    }
}

impl ServerConfig {
    /// Full URL of the reviews endpoint.
    pub fn reviews_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        if self.endpoint.starts_with('/') {
            format!("{}{}", base, self.endpoint)
        } else {
            format!("{}/{}", base, self.endpoint)
        }
    }
}

/// Table appearance and pagination settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_page_size_options")]
    pub page_size_options: Vec<usize>,
    /// Upper bound on the height of a single auto-sized row.
    #[serde(default = "default_max_row_lines")]
    pub max_row_lines: u16,
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            page_size_options: default_page_size_options(),
            max_row_lines: default_max_row_lines(),
            timestamp_format: default_timestamp_format(),
        }
    }
}

impl UiConfig {
    /// Drop zero and duplicate page sizes, make sure `page_size` is one of
    /// the options and replace an unparseable `timestamp_format`.
    pub fn normalize(&mut self) {
        let mut options: Vec<usize> = Vec::with_capacity(self.page_size_options.len());
        for &size in &self.page_size_options {
            if size > 0 && !options.contains(&size) {
                options.push(size);
            }
        }
        if options.is_empty() {
            options = default_page_size_options();
        }
        if !options.contains(&self.page_size) {
            self.page_size = options[0];
        }
        self.page_size_options = options;
        self.max_row_lines = self.max_row_lines.max(1);
        if !is_valid_strftime(&self.timestamp_format) {
            self.timestamp_format = default_timestamp_format();
        }
    }
}

/// chrono panics while formatting with a pattern it cannot parse.
fn is_valid_strftime(fmt: &str) -> bool {
    !StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error))
}

/// Diagnostic log settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:5001".to_string()
}
fn default_endpoint() -> String {
    "/reviews".to_string()
}
fn default_page_size() -> usize {
    10
}
fn default_page_size_options() -> Vec<usize> {
    vec![10, 20, 50]
}
fn default_max_row_lines() -> u16 {
    4
}
fn default_timestamp_format() -> String {
    "%H:%M:%S".to_string()
}
fn default_true() -> bool {
    true
}
fn default_log_dir() -> String {
    "~/.local/share/revgrid/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reviews_url_joins_slashes() {
        let mut server = ServerConfig::default();
        assert_eq!(server.reviews_url(), "http://127.0.0.1:5001/reviews");

        server.base_url = "http://host:9000/".into();
        assert_eq!(server.reviews_url(), "http://host:9000/reviews");

        server.endpoint = "api/reviews".into();
        assert_eq!(server.reviews_url(), "http://host:9000/api/reviews");
    }

    #[test]
    fn test_normalize_empty_options_restores_defaults() {
        let mut ui = UiConfig {
            page_size: 0,
            page_size_options: vec![0],
            max_row_lines: 0,
            timestamp_format: default_timestamp_format(),
        };
        ui.normalize();
        assert_eq!(ui.page_size_options, vec![10, 20, 50]);
        assert_eq!(ui.page_size, 10);
        assert_eq!(ui.max_row_lines, 1);
    }

    #[test]
    fn test_normalize_replaces_bad_timestamp_format() {
        let mut ui = UiConfig {
            timestamp_format: "%Q".into(),
            ..UiConfig::default()
        };
        ui.normalize();
        assert_eq!(ui.timestamp_format, "%H:%M:%S");

        let mut ui = UiConfig {
            timestamp_format: "%Y-%m-%d %H:%M".into(),
            ..UiConfig::default()
        };
        ui.normalize();
        assert_eq!(ui.timestamp_format, "%Y-%m-%d %H:%M");
    }
}
