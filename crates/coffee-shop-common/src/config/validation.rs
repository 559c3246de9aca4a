//! Field checks applied when building a [`ClientConfig`](super::ClientConfig)

use crate::error::{ConfigField, ConfigurationError};
use url::Url;

/// Reject empty or whitespace-only values
pub(crate) fn require_non_empty(
    field: ConfigField,
    value: &str,
) -> Result<(), ConfigurationError> {
    if value.trim().is_empty() {
        return Err(ConfigurationError::Missing { field });
    }
    Ok(())
}

/// Accept only absolute URLs with a host, stored exactly as written
pub(crate) fn validate_url(field: ConfigField, value: &str) -> Result<(), ConfigurationError> {
    require_non_empty(field, value)?;

    if value.trim() != value {
        return Err(ConfigurationError::invalid(field, "URL must not have surrounding whitespace"));
    }

    let url = Url::parse(value).map_err(|e| {
        ConfigurationError::invalid(field, format!("'{value}' is not an absolute URL: {e}"))
    })?;

    if !url.has_host() {
        return Err(ConfigurationError::invalid(field, format!("'{value}' has no host")));
    }

    Ok(())
}

/// The tenant prefix is a sequence of host labels, not a URL
pub(crate) fn validate_domain_prefix(value: &str) -> Result<(), ConfigurationError> {
    let field = ConfigField::DomainPrefix;
    require_non_empty(field, value)?;

    if !value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.')
    {
        return Err(ConfigurationError::invalid(
            field,
            format!("'{value}' may only contain alphanumeric characters, hyphens and dots"),
        ));
    }

    for label in value.split('.') {
        if label.is_empty() {
            return Err(ConfigurationError::invalid(
                field,
                format!("'{value}' contains an empty label"),
            ));
        }
        if label.starts_with('-') || label.ends_with('-') {
            return Err(ConfigurationError::invalid(
                field,
                format!("label '{label}' in '{value}' must not start or end with '-'"),
            ));
        }
    }

    Ok(())
}
