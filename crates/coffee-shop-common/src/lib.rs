//! # Coffee Shop Common
//!
//! Shared building blocks for Coffee Shop components:
//! - [`config`]: the validated, immutable client environment configuration
//! - [`error`]: the configuration error taxonomy
//! - [`logging`]: unified tracing initialisation for binaries

pub mod config;
pub mod error;
pub mod logging;

pub use config::{AuthSettings, ClientConfig, ConfigLoader, Environment};
pub use error::{ConfigField, ConfigurationError};
