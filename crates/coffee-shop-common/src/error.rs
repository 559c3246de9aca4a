//! Error types shared across Coffee Shop components

use std::fmt;
use thiserror::Error;

/// A field of the client configuration record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigField {
    Production,
    ApiServerUrl,
    DomainPrefix,
    Audience,
    ClientId,
    CallbackUrl,
}

impl ConfigField {
    /// All fields, in record order
    pub const ALL: [ConfigField; 6] = [
        ConfigField::Production,
        ConfigField::ApiServerUrl,
        ConfigField::DomainPrefix,
        ConfigField::Audience,
        ConfigField::ClientId,
        ConfigField::CallbackUrl,
    ];

    /// Dotted key used in TOML files and (with `__` separators) environment overrides
    pub fn key(self) -> &'static str {
        match self {
            ConfigField::Production => "production",
            ConfigField::ApiServerUrl => "api_server_url",
            ConfigField::DomainPrefix => "auth.domain_prefix",
            ConfigField::Audience => "auth.audience",
            ConfigField::ClientId => "auth.client_id",
            ConfigField::CallbackUrl => "auth.callback_url",
        }
    }

    /// Name the web client uses for this field
    pub fn name(self) -> &'static str {
        match self {
            ConfigField::Production => "production",
            ConfigField::ApiServerUrl => "apiServerUrl",
            ConfigField::DomainPrefix => "domainPrefix",
            ConfigField::Audience => "audience",
            ConfigField::ClientId => "clientId",
            ConfigField::CallbackUrl => "callbackUrl",
        }
    }
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.key(), self.name())
    }
}

/// Errors raised while selecting, resolving or validating configuration.
///
/// All of these are fatal at startup: a guessed default would silently
/// misdirect API or identity-provider traffic.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("Missing required configuration value: {field}")]
    Missing { field: ConfigField },

    #[error("Invalid configuration value for {field}: {reason}")]
    Invalid { field: ConfigField, reason: String },

    #[error("Unknown environment '{value}' (expected 'development' or 'production')")]
    UnknownEnvironment { value: String },

    #[error("Failed to parse configuration: {details}")]
    ParseError { details: String },
}

impl ConfigurationError {
    pub(crate) fn invalid(field: ConfigField, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }

    /// The offending record field, if the error is tied to one
    pub fn field(&self) -> Option<ConfigField> {
        match self {
            Self::Missing { field } | Self::Invalid { field, .. } => Some(*field),
            Self::UnknownEnvironment { .. } | Self::ParseError { .. } => None,
        }
    }
}

impl From<figment::Error> for ConfigurationError {
    fn from(err: figment::Error) -> Self {
        Self::ParseError {
            details: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_field_display_names_both_forms() {
        assert_eq!(
            ConfigField::ClientId.to_string(),
            "auth.client_id (clientId)"
        );
        assert_eq!(
            ConfigField::ApiServerUrl.to_string(),
            "api_server_url (apiServerUrl)"
        );
    }

    #[test]
    fn test_keys_and_names_are_unique() {
        let keys: HashSet<_> = ConfigField::ALL.iter().map(|f| f.key()).collect();
        let names: HashSet<_> = ConfigField::ALL.iter().map(|f| f.name()).collect();
        assert_eq!(keys.len(), ConfigField::ALL.len());
        assert_eq!(names.len(), ConfigField::ALL.len());
    }

    #[test]
    fn test_error_field() {
        let err = ConfigurationError::Missing {
            field: ConfigField::ClientId,
        };
        assert_eq!(err.field(), Some(ConfigField::ClientId));
        assert!(err.to_string().contains("clientId"));

        let err = ConfigurationError::invalid(ConfigField::CallbackUrl, "relative URL");
        assert_eq!(err.field(), Some(ConfigField::CallbackUrl));
        assert!(err.to_string().contains("relative URL"));

        let err = ConfigurationError::UnknownEnvironment {
            value: "staging".to_string(),
        };
        assert_eq!(err.field(), None);
        assert!(err.to_string().contains("staging"));
    }
}
