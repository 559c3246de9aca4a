//! Client environment configuration
//!
//! A [`ClientConfig`] is built once at startup by a [`ConfigLoader`] and then
//! handed to consumers by reference. It has no setters.

mod builtin;
mod environment;
mod loader;
mod types;
mod validation;

pub use builtin::{builtin, example_toml};
pub use environment::{Environment, ENVIRONMENT_VAR};
pub use loader::{ConfigLoader, DEFAULT_CONFIG_FILE, ENV_PREFIX};
pub use types::{AuthSettings, ClientConfig, RawAuthSettings, RawClientConfig};
