//! Main entry point for the Coffee Shop CLI

use clap::Parser;
use coffee_shop_cli::cli::Args;
use color_eyre::eyre::{eyre, Result};

fn main() -> Result<()> {
    let args = Args::parse();

    // Disable location display (file paths and line numbers)
    color_eyre::config::HookBuilder::default()
        .display_location_section(false)
        .display_env_section(false)
        .install()?;

    let binary_name = env!("CARGO_BIN_NAME").replace('-', "_");
    let default_filter = format!("{}=warn,coffee_shop_common=warn", binary_name);
    coffee_shop_common::logging::init_logging(&args.verbosity, &default_filter)
        .map_err(|e| eyre!("Failed to initialize logging: {}", e))?;

    // Run and propagate errors as eyre::Report
    Ok(args.run()?)
}
