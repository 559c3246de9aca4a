use crate::cli::{commands::Commands, handlers};
use crate::error::Result;
use clap::Parser;
use clap_verbosity_flag::{OffLevel, Verbosity};
use coffee_shop_common::config::{ConfigLoader, Environment, ENVIRONMENT_VAR};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Coffee Shop CLI - client environment configuration
#[derive(Parser, Debug)]
#[command(
    name = "coffee-shop",
    author = "Coffee Shop Team",
    version,
    about = "Coffee Shop CLI - inspect and validate client environment configuration",
    long_about = "Resolve the Coffee Shop client configuration for an environment.

Values are layered: built-in defaults, then the TOML file, then
COFFEE_SHOP_* environment variables (use `__` for nesting, e.g.
COFFEE_SHOP_AUTH__CLIENT_ID).

EXAMPLES:
  coffee-shop show                      # Resolved record for the build profile
  coffee-shop --env production validate # Fail fast before a deploy
  coffee-shop example > coffee-shop.toml
  coffee-shop login-url"
)]
pub struct Args {
    /// Deployment environment (defaults to the build profile)
    #[arg(short, long, global = true, env = ENVIRONMENT_VAR)]
    pub env: Option<Environment>,

    /// Configuration file path (defaults to ./coffee-shop.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    // Without -v, RUST_LOG applies, falling back to warnings only
    #[command(flatten)]
    pub verbosity: Verbosity<OffLevel>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Args {
    /// Build the loader described by the global options
    pub fn loader(&self) -> Result<ConfigLoader> {
        let environment = match self.env {
            Some(env) => env,
            None => Environment::from_build_context()?,
        };

        let loader = ConfigLoader::new(environment);
        Ok(match &self.config {
            Some(path) => loader.with_file(expand_tilde(path)),
            None => loader,
        })
    }

    /// Execute the CLI command, writing results to `out`
    pub fn run_with<W: Write>(self, out: &mut W) -> Result<()> {
        match &self.command {
            Commands::Show { json } => handlers::handle_show(&self.loader()?, *json, out),
            Commands::Validate => handlers::handle_validate(&self.loader()?, out),
            Commands::Example => handlers::handle_example(out),
            Commands::LoginUrl => handlers::handle_login_url(&self.loader()?, out),
        }
    }

    /// Execute the CLI command against stdout
    pub fn run(self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.run_with(&mut out)
    }
}

/// Expand tilde (~) in file paths to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(path_str) => PathBuf::from(shellexpand::tilde(path_str).as_ref()),
        None => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_global_options() {
        let args = Args::try_parse_from([
            "coffee-shop",
            "--env",
            "prod",
            "--config",
            "/etc/coffee-shop.toml",
            "show",
            "--json",
        ])
        .unwrap();

        assert_eq!(args.env, Some(Environment::Production));
        assert_eq!(args.config, Some(PathBuf::from("/etc/coffee-shop.toml")));
        assert_eq!(args.command, Commands::Show { json: true });
    }

    #[test]
    fn test_unknown_environment_is_rejected_by_parser() {
        let result = Args::try_parse_from(["coffee-shop", "--env", "staging", "validate"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_expand_tilde_leaves_absolute_paths() {
        assert_eq!(
            expand_tilde(Path::new("/tmp/coffee-shop.toml")),
            PathBuf::from("/tmp/coffee-shop.toml")
        );
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
