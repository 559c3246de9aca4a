//! Deployment environment selector

use crate::error::ConfigurationError;
use serde::{Deserialize, Serialize};
use std::env::VarError;
use std::fmt;
use std::str::FromStr;

/// Environment variable naming the deployment environment
pub const ENVIRONMENT_VAR: &str = "COFFEE_SHOP_ENV";

/// A named deployment target with its own configuration variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Both supported environments
    pub const ALL: [Environment; 2] = [Environment::Development, Environment::Production];

    /// Select the environment from `COFFEE_SHOP_ENV`, falling back to the
    /// build profile (debug builds are development, release builds production)
    /// only when the variable is unset.
    pub fn from_build_context() -> Result<Self, ConfigurationError> {
        match std::env::var(ENVIRONMENT_VAR) {
            Ok(value) => value.parse(),
            Err(VarError::NotPresent) => Ok(Self::from_build_profile()),
            Err(VarError::NotUnicode(value)) => Err(ConfigurationError::UnknownEnvironment {
                value: value.to_string_lossy().into_owned(),
            }),
        }
    }

    /// Environment implied by the compilation profile alone
    pub fn from_build_profile() -> Self {
        if cfg!(debug_assertions) {
            Environment::Development
        } else {
            Environment::Production
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(ConfigurationError::UnknownEnvironment {
                value: s.to_string(),
            }),
        }
    }
}
