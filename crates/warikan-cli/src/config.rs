//! CLI configuration: a TOML file with environment variable overrides.
//!
//! The file is looked up at `WARIKAN_CONFIG_PATH`, falling back to
//! `config.toml` under the platform config directory. A missing file means
//! defaults; an unreadable file is logged and also means defaults, so the
//! tool always starts.
//!
//! ```toml
//! [storage]
//! data_dir = "/home/me/.local/share/warikan"
//!
//! [report]
//! currency = "$"
//! ```

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;
use tracing::{debug, warn};
use warikan_core::ReportStyle;

/// Environment variable naming the config file.
pub const CONFIG_PATH_ENV: &str = "WARIKAN_CONFIG_PATH";

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "WARIKAN_DATA_DIR";

/// Environment variable overriding the currency marker.
pub const CURRENCY_ENV: &str = "WARIKAN_CURRENCY";

/// Top-level CLI configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CliConfig {
    /// Where session state lives.
    #[serde(default)]
    pub storage: StorageConfig,
    /// How schedules are rendered.
    #[serde(default)]
    pub report: ReportConfig,
}

/// Storage section.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the roster snapshot and the last result.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

/// Report section.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Currency marker printed before amounts.
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
        }
    }
}

impl CliConfig {
    /// Loads the configuration file and applies environment overrides.
    pub fn load() -> Self {
        let path = std::env::var(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_config_path());
        let config = match fs::read_to_string(&path) {
            Ok(text) => match toml::from_str(&text) {
                Ok(config) => {
                    debug!(path = %path.display(), "Loaded configuration file");
                    config
                }
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "Ignoring unreadable configuration file");
                    Self::default()
                }
            },
            Err(_) => {
                debug!(path = %path.display(), "No configuration file; using defaults");
                Self::default()
            }
        };
        config.apply_env()
    }

    /// Applies environment variable overrides on top of file values.
    fn apply_env(mut self) -> Self {
        if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
            self.storage.data_dir = PathBuf::from(dir);
        }
        if let Ok(currency) = std::env::var(CURRENCY_ENV) {
            self.report.currency = currency;
        }
        self
    }

    /// The report style derived from this configuration.
    pub fn report_style(&self) -> ReportStyle {
        ReportStyle {
            currency: self.report.currency.clone(),
        }
    }
}

fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("warikan")
        .join("config.toml")
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("warikan"))
        .unwrap_or_else(|| PathBuf::from(".warikan"))
}

fn default_currency() -> String {
    "\u{a5}".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_the_yen_marker() {
        let config = CliConfig::default();
        assert_eq!(config.report.currency, "\u{a5}");
        assert!(config.storage.data_dir.ends_with("warikan"));
    }

    #[test]
    fn partial_files_fall_back_per_section() {
        let config: CliConfig = toml::from_str("[report]\ncurrency = \"$\"\n").expect("parsable");
        assert_eq!(config.report.currency, "$");
        assert!(config.storage.data_dir.ends_with("warikan"));
    }

    #[test]
    fn full_files_override_every_section() {
        let text = "[storage]\ndata_dir = \"/tmp/state\"\n\n[report]\ncurrency = \"EUR \"\n";
        let config: CliConfig = toml::from_str(text).expect("parsable");
        assert_eq!(config.storage.data_dir, PathBuf::from("/tmp/state"));
        assert_eq!(config.report.currency, "EUR ");
        assert_eq!(config.report_style().currency, "EUR ");
    }
}
