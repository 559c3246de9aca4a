//! Error types for the Coffee Shop CLI

use color_eyre::eyre::{eyre, Report};
use thiserror::Error;

/// CLI error type with minimal variants
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be selected, resolved or validated
    #[error("Configuration error: {0}")]
    Config(#[from] coffee_shop_common::ConfigurationError),

    /// Writing command output failed
    #[error("Failed to write output")]
    Io(#[from] std::io::Error),

    /// Everything else (using color-eyre's Report for rich errors)
    #[error(transparent)]
    Internal(#[from] Report),
}

impl CliError {
    pub fn internal(message: impl std::fmt::Display) -> Self {
        Self::Internal(eyre!("{}", message))
    }
}

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
