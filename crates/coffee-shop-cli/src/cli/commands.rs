use clap::Subcommand;

/// Main CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the resolved, validated configuration
    Show {
        /// Output as JSON instead of TOML
        #[arg(long)]
        json: bool,
    },

    /// Load the configuration and report the first invalid field, if any
    Validate,

    /// Print an example configuration file with every built-in environment
    Example,

    /// Print the identity-provider login URL for the selected environment
    LoginUrl,
}
