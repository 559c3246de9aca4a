//! Source-controlled configuration variants
//!
//! These values are compiled into the binary so that a bare checkout runs
//! without external configuration files. Files and environment variables
//! layer on top of them (see [`ConfigLoader`](super::ConfigLoader)).

use super::environment::Environment;
use super::types::{RawAuthSettings, RawClientConfig};

/// Backend API served by the local Flask development server
pub const DEV_API_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Auth0 tenant prefix for development
pub const DEV_AUTH0_DOMAIN_PREFIX: &str = "Asif";

/// Audience configured on the Auth0 API for the coffee shop
pub const AUTH0_AUDIENCE: &str = "coffee-shop";

/// Client ID generated for the Auth0 single-page application
pub const AUTH0_CLIENT_ID: &str = "6dYx4EQE3fGuOeBgJhZm42Uv3zgwvDEZ";

/// Base URL of the locally served client application
pub const DEV_CALLBACK_URL: &str = "http://localhost:8100";

/// Public backend API for production deployments
pub const PROD_API_SERVER_URL: &str = "https://api.coffeeshop.example.com";

/// Auth0 tenant prefix for production
pub const PROD_AUTH0_DOMAIN_PREFIX: &str = "coffeeshop";

/// Public URL of the deployed client application
pub const PROD_CALLBACK_URL: &str = "https://coffeeshop.example.com";

/// The built-in configuration variant for an environment
pub fn builtin(env: Environment) -> RawClientConfig {
    match env {
        Environment::Development => RawClientConfig {
            production: false,
            api_server_url: DEV_API_SERVER_URL.to_string(),
            auth: RawAuthSettings {
                domain_prefix: DEV_AUTH0_DOMAIN_PREFIX.to_string(),
                audience: AUTH0_AUDIENCE.to_string(),
                client_id: AUTH0_CLIENT_ID.to_string(),
                callback_url: DEV_CALLBACK_URL.to_string(),
            },
        },
        Environment::Production => RawClientConfig {
            production: true,
            api_server_url: PROD_API_SERVER_URL.to_string(),
            auth: RawAuthSettings {
                domain_prefix: PROD_AUTH0_DOMAIN_PREFIX.to_string(),
                audience: AUTH0_AUDIENCE.to_string(),
                client_id: AUTH0_CLIENT_ID.to_string(),
                callback_url: PROD_CALLBACK_URL.to_string(),
            },
        },
    }
}

/// Render both built-in variants as a nested TOML document suitable for
/// `coffee-shop.toml`.
pub fn example_toml() -> Result<String, crate::ConfigurationError> {
    let mut doc = toml::Table::new();
    for env in Environment::ALL {
        let value = toml::Value::try_from(builtin(env)).map_err(|e| {
            crate::ConfigurationError::ParseError {
                details: format!("Failed to serialize config: {e}"),
            }
        })?;
        doc.insert(env.as_str().to_string(), value);
    }
    toml::to_string_pretty(&doc).map_err(|e| crate::ConfigurationError::ParseError {
        details: format!("Failed to serialize config: {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variants_differ_where_expected() {
        let dev = builtin(Environment::Development);
        let prod = builtin(Environment::Production);

        assert!(!dev.production);
        assert!(prod.production);
        assert_ne!(dev.api_server_url, prod.api_server_url);
        assert_eq!(dev.auth.audience, prod.auth.audience);
    }

    #[test]
    fn test_example_toml_has_both_tables() {
        let example = example_toml().unwrap();
        let parsed: toml::Table = toml::from_str(&example).unwrap();

        assert!(parsed.contains_key("development"));
        assert!(parsed.contains_key("production"));
        assert_eq!(
            parsed["development"]["api_server_url"].as_str(),
            Some(DEV_API_SERVER_URL)
        );
        assert_eq!(
            parsed["production"]["auth"]["callback_url"].as_str(),
            Some(PROD_CALLBACK_URL)
        );
    }
}
