//! Layered configuration loading
//!
//! Resolution order, lowest priority first:
//! 1. the built-in variant for the selected environment
//! 2. a nested TOML file (`[default]`, `[development]`, `[production]` tables)
//! 3. `COFFEE_SHOP_*` environment variables, `__` separating nested keys
//!
//! The merged result is then validated into a [`ClientConfig`].

use super::builtin::builtin;
use super::environment::{Environment, ENVIRONMENT_VAR};
use super::types::{ClientConfig, RawClientConfig};
use crate::error::ConfigurationError;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File read from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "coffee-shop.toml";

/// Prefix of environment variable overrides
pub const ENV_PREFIX: &str = "COFFEE_SHOP_";

#[derive(Debug, Clone, PartialEq, Eq)]
enum FileSource {
    /// `coffee-shop.toml` if it exists
    Default,
    /// Must exist
    Explicit(PathBuf),
    Disabled,
}

/// Builder for resolving the configuration of one environment
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    environment: Environment,
    file: FileSource,
    env_prefix: Option<String>,
}

impl ConfigLoader {
    pub fn new(environment: Environment) -> Self {
        Self {
            environment,
            file: FileSource::Default,
            env_prefix: Some(ENV_PREFIX.to_string()),
        }
    }

    /// Loader for the environment selected by `COFFEE_SHOP_ENV` or the build profile
    pub fn from_build_context() -> Result<Self, ConfigurationError> {
        Ok(Self::new(Environment::from_build_context()?))
    }

    /// Read this TOML file instead of the default one
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = FileSource::Explicit(path.into());
        self
    }

    pub fn without_file(mut self) -> Self {
        self.file = FileSource::Disabled;
        self
    }

    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = Some(prefix.into());
        self
    }

    pub fn without_env(mut self) -> Self {
        self.env_prefix = None;
        self
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Assemble the provider stack without extracting anything
    pub fn figment(&self) -> Result<Figment, ConfigurationError> {
        let mut figment = Figment::from(Serialized::defaults(builtin(self.environment)));

        match &self.file {
            FileSource::Default => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    debug!("Merging configuration file: {}", path.display());
                    figment = figment.merge(Toml::file(path).nested());
                } else {
                    debug!(
                        "Configuration file not found, using built-in values: {}",
                        path.display()
                    );
                }
            }
            FileSource::Explicit(path) => {
                if !path.exists() {
                    return Err(ConfigurationError::ParseError {
                        details: format!("Configuration file not found: {}", path.display()),
                    });
                }
                debug!("Merging configuration file: {}", path.display());
                figment = figment.merge(Toml::file(path).nested());
            }
            FileSource::Disabled => {}
        }

        if let Some(prefix) = &self.env_prefix {
            debug!("Merging environment overrides with prefix {}", prefix);
            let selector_key = ENVIRONMENT_VAR
                .strip_prefix(prefix.as_str())
                .unwrap_or(ENVIRONMENT_VAR)
                .to_ascii_lowercase();
            figment = figment.merge(
                Env::prefixed(prefix)
                    .ignore(&[selector_key.as_str()])
                    .split("__")
                    .global(),
            );
        }

        Ok(figment.select(self.environment.as_str()))
    }

    /// Merge all layers without validating the result
    pub fn resolve_raw(&self) -> Result<RawClientConfig, ConfigurationError> {
        Ok(self.figment()?.extract::<RawClientConfig>()?)
    }

    /// Merge all layers and validate the result
    pub fn load(&self) -> Result<ClientConfig, ConfigurationError> {
        let config = ClientConfig::from_raw(self.resolve_raw()?)?;

        info!(
            environment = %self.environment,
            production = config.production(),
            api_server_url = config.api_server_url(),
            "Loaded client configuration"
        );

        Ok(config)
    }
}

impl ClientConfig {
    /// Load the configuration for the current build/deployment target
    pub fn load() -> Result<Self, ConfigurationError> {
        ConfigLoader::from_build_context()?.load()
    }

    /// Load the configuration for a specific environment
    pub fn load_for(environment: Environment) -> Result<Self, ConfigurationError> {
        ConfigLoader::new(environment).load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn write_toml(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_builtin_only() {
        for env in Environment::ALL {
            let raw = ConfigLoader::new(env)
                .without_file()
                .without_env()
                .resolve_raw()
                .unwrap();
            assert_eq!(raw, builtin(env));
        }
    }

    #[test]
    fn test_selected_table_overrides_default_table() {
        let file = write_toml(
            r#"
            [default.auth]
            audience = "coffee-shop-api"

            [development]
            api_server_url = "http://127.0.0.1:8080"

            [production]
            api_server_url = "https://brew.example.org"
            "#,
        );

        let dev = ConfigLoader::new(Environment::Development)
            .with_file(file.path())
            .without_env()
            .load()
            .unwrap();
        assert_eq!(dev.api_server_url(), "http://127.0.0.1:8080");
        assert_eq!(dev.auth().audience(), "coffee-shop-api");
        assert_eq!(dev.auth().client_id(), "6dYx4EQE3fGuOeBgJhZm42Uv3zgwvDEZ");

        let prod = ConfigLoader::new(Environment::Production)
            .with_file(file.path())
            .without_env()
            .load()
            .unwrap();
        assert_eq!(prod.api_server_url(), "https://brew.example.org");
        assert!(prod.production());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let err = ConfigLoader::new(Environment::Development)
            .with_file("/definitely/not/here/coffee-shop.toml")
            .without_env()
            .load()
            .unwrap_err();
        assert!(matches!(err, ConfigurationError::ParseError { .. }));
    }

    #[test]
    fn test_unknown_key_in_file_is_an_error() {
        let file = write_toml(
            r#"
            [development.auth]
            url = "Asif"
            "#,
        );
        let err = ConfigLoader::new(Environment::Development)
            .with_file(file.path())
            .without_env()
            .load()
            .unwrap_err();
        assert!(matches!(err, ConfigurationError::ParseError { .. }));
    }

    #[test]
    fn test_wrong_type_in_file_is_an_error() {
        let file = write_toml(
            r#"
            [development]
            production = "maybe"
            "#,
        );
        let result = ConfigLoader::new(Environment::Development)
            .with_file(file.path())
            .without_env()
            .load();
        assert!(matches!(result, Err(ConfigurationError::ParseError { .. })));
    }
}
