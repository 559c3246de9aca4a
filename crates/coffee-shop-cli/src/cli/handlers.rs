//! Command handlers
//!
//! Handlers write to a caller-supplied writer so the binary can target
//! stdout while tests capture output in memory.

use crate::error::{CliError, Result};
use coffee_shop_common::config::{example_toml, ConfigLoader};
use std::io::Write;
use tracing::debug;

/// Print the resolved record as TOML or JSON
pub fn handle_show<W: Write>(loader: &ConfigLoader, json: bool, out: &mut W) -> Result<()> {
    let config = loader.load()?;

    let rendered = if json {
        serde_json::to_string_pretty(&config)
            .map_err(|e| CliError::internal(format!("Failed to serialize config: {e}")))?
    } else {
        toml::to_string_pretty(&config)
            .map_err(|e| CliError::internal(format!("Failed to serialize config: {e}")))?
    };

    writeln!(out, "{}", rendered.trim_end())?;
    Ok(())
}

/// Load and validate; any failure propagates as a configuration error
pub fn handle_validate<W: Write>(loader: &ConfigLoader, out: &mut W) -> Result<()> {
    let config = loader.load()?;
    debug!("Configuration for {} is valid", loader.environment());

    writeln!(
        out,
        "ok: {} configuration is valid (api_server_url = {}, auth domain = {})",
        loader.environment(),
        config.api_server_url(),
        config.auth().domain()
    )?;
    Ok(())
}

/// Print the example configuration file
pub fn handle_example<W: Write>(out: &mut W) -> Result<()> {
    let example = example_toml()?;
    writeln!(out, "{}", example.trim_end())?;
    Ok(())
}

/// Print the identity-provider authorize URL
pub fn handle_login_url<W: Write>(loader: &ConfigLoader, out: &mut W) -> Result<()> {
    let config = loader.load()?;
    let url = config.auth().authorize_url()?;
    writeln!(out, "{url}")?;
    Ok(())
}
