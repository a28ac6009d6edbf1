//! CLI error types

use thiserror::Error;

/// Failures that stop the CLI.
///
/// Backend failures inside a page never surface here; pages turn them into
/// notices.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid log level {0:?}")]
    LogLevel(String),

    #[error("Unknown page {0:?}")]
    UnknownPage(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error(transparent)]
    Client(#[from] labdesk_lib::error::Error),
}
