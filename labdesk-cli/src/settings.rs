//! Layered CLI settings
//!
//! Sources, lowest priority first: the embedded `default_config.toml`, the
//! user's `config.toml` in the config directory, an explicit `--config` file,
//! `LABDESK_*` environment variables, and finally command-line flags.

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use config::Config;
use config::Environment;
use config::File;
use config::FileFormat;
use serde::Deserialize;
use simplelog::LevelFilter;

use crate::error::CliError;
use crate::paths;

const DEFAULT_CONFIG: &str = include_str!("../default_config.toml");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Backend REST API root.
    pub base_url: String,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub log_level: String,
}

impl Settings {
    /// Loads settings from every source except command-line flags.
    pub fn load(explicit: Option<&Path>) -> Result<Self, CliError> {
        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(path) = paths::config_file() {
            builder = builder.add_source(File::from(path).required(false));
        }
        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path.to_path_buf()).required(true));
        }

        let settings = builder
            .add_source(Environment::with_prefix("LABDESK"))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    /// Parses settings from a TOML string layered over the defaults.
    pub fn from_toml(toml: &str) -> Result<Self, CliError> {
        let settings = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    /// Applies command-line overrides.
    pub fn override_with(&mut self, base_url: Option<String>, log_level: Option<String>) {
        if let Some(base_url) = base_url {
            self.base_url = base_url;
        }
        if let Some(log_level) = log_level {
            self.log_level = log_level;
        }
    }

    pub fn level_filter(&self) -> Result<LevelFilter, CliError> {
        LevelFilter::from_str(&self.log_level).map_err(|_| CliError::LogLevel(self.log_level.clone()))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}
