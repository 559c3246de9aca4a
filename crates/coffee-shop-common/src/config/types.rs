//! Client configuration record

use super::validation;
use crate::error::{ConfigField, ConfigurationError};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Unvalidated configuration as produced by the layered loader
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawClientConfig {
    /// Whether this is a production build
    pub production: bool,

    /// Base URL of the backend REST API
    #[serde(deserialize_with = "scalar_text")]
    pub api_server_url: String,

    /// Identity-provider settings
    pub auth: RawAuthSettings,
}

/// Unvalidated identity-provider settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawAuthSettings {
    /// Auth0 tenant prefix (`<prefix>.auth0.com`)
    #[serde(deserialize_with = "scalar_text")]
    pub domain_prefix: String,

    /// Audience of the protected API
    #[serde(deserialize_with = "scalar_text")]
    pub audience: String,

    /// Client ID issued by Auth0
    #[serde(deserialize_with = "scalar_text")]
    pub client_id: String,

    /// Client URL Auth0 redirects to after login
    #[serde(deserialize_with = "scalar_text")]
    pub callback_url: String,
}

/// Read a string field that may arrive as another scalar.
///
/// Environment overrides are parsed into typed values, so an all-digit
/// client id comes through as an integer and `true` as a boolean.
fn scalar_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct ScalarText;

    impl<'de> Visitor<'de> for ScalarText {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a string, integer or boolean")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
            Ok(v)
        }

        fn visit_char<E: de::Error>(self, v: char) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i128<E: de::Error>(self, v: i128) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u128<E: de::Error>(self, v: u128) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
            Ok(v.to_string())
        }
    }

    deserializer.deserialize_any(ScalarText)
}

/// Validated, immutable client configuration.
///
/// Only obtainable through validation, so every instance has all fields
/// present and well-formed. Share it by reference or behind an `Arc`.
///
/// Fields cannot be reassigned after loading:
///
/// ```compile_fail
/// use coffee_shop_common::{ClientConfig, Environment};
///
/// let mut config = ClientConfig::load_for(Environment::Development).unwrap();
/// config.api_server_url = "http://10.0.0.1:5000".to_string();
/// ```
///
/// Nor can a record be assembled without validation:
///
/// ```compile_fail
/// use coffee_shop_common::ClientConfig;
///
/// let config = ClientConfig {
///     production: true,
///     api_server_url: String::new(),
///     auth: unimplemented!(),
/// };
/// ```
///
/// Identity-provider settings are read-only as well:
///
/// ```compile_fail
/// use coffee_shop_common::{ClientConfig, Environment};
///
/// let mut config = ClientConfig::load_for(Environment::Development).unwrap();
/// config.auth().client_id = String::new();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawClientConfig")]
pub struct ClientConfig {
    production: bool,
    api_server_url: String,
    auth: AuthSettings,
}

/// Validated identity-provider settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthSettings {
    domain_prefix: String,
    audience: String,
    client_id: String,
    callback_url: String,
}

impl ClientConfig {
    /// Validate a raw record, reporting the first offending field
    pub fn from_raw(raw: RawClientConfig) -> Result<Self, ConfigurationError> {
        validation::validate_url(ConfigField::ApiServerUrl, &raw.api_server_url)?;
        let auth = AuthSettings::from_raw(raw.auth)?;

        Ok(Self {
            production: raw.production,
            api_server_url: raw.api_server_url,
            auth,
        })
    }

    pub fn production(&self) -> bool {
        self.production
    }

    /// Base URL exactly as configured
    pub fn api_server_url(&self) -> &str {
        &self.api_server_url
    }

    pub fn auth(&self) -> &AuthSettings {
        &self.auth
    }

    /// Join the API base URL with a request path
    pub fn api_endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_server_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Convert back into the raw, serializable shape
    pub fn to_raw(&self) -> RawClientConfig {
        RawClientConfig {
            production: self.production,
            api_server_url: self.api_server_url.clone(),
            auth: RawAuthSettings {
                domain_prefix: self.auth.domain_prefix.clone(),
                audience: self.auth.audience.clone(),
                client_id: self.auth.client_id.clone(),
                callback_url: self.auth.callback_url.clone(),
            },
        }
    }
}

impl TryFrom<RawClientConfig> for ClientConfig {
    type Error = ConfigurationError;

    fn try_from(raw: RawClientConfig) -> Result<Self, Self::Error> {
        Self::from_raw(raw)
    }
}

impl AuthSettings {
    fn from_raw(raw: RawAuthSettings) -> Result<Self, ConfigurationError> {
        validation::validate_domain_prefix(&raw.domain_prefix)?;
        validation::require_non_empty(ConfigField::Audience, &raw.audience)?;
        validation::require_non_empty(ConfigField::ClientId, &raw.client_id)?;
        validation::validate_url(ConfigField::CallbackUrl, &raw.callback_url)?;

        Ok(Self {
            domain_prefix: raw.domain_prefix,
            audience: raw.audience,
            client_id: raw.client_id,
            callback_url: raw.callback_url,
        })
    }

    pub fn domain_prefix(&self) -> &str {
        &self.domain_prefix
    }

    pub fn audience(&self) -> &str {
        &self.audience
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn callback_url(&self) -> &str {
        &self.callback_url
    }

    /// Full Auth0 tenant domain
    pub fn domain(&self) -> String {
        format!("{}.auth0.com", self.domain_prefix)
    }

    /// Token issuer URL
    pub fn issuer(&self) -> String {
        format!("https://{}/", self.domain())
    }

    /// Universal-login link that starts the implicit flow and returns to
    /// the callback URL with the access token in the fragment.
    pub fn authorize_url(&self) -> Result<Url, ConfigurationError> {
        let endpoint = format!("https://{}/authorize", self.domain());
        Url::parse_with_params(
            &endpoint,
            &[
                ("audience", self.audience.as_str()),
                ("response_type", "token"),
                ("client_id", self.client_id.as_str()),
                ("redirect_uri", self.callback_url.as_str()),
            ],
        )
        .map_err(|e| ConfigurationError::invalid(ConfigField::DomainPrefix, e.to_string()))
    }
}
