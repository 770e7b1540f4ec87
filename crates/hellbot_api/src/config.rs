//! API client configuration.

use serde::{Deserialize, Serialize};

/// Where and how to reach the remote API.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_setters::Setters,
)]
#[setters(prefix = "with_")]
pub struct ApiConfig {
    /// Base URL of the API, without a trailing slash
    #[serde(default = "default_endpoint")]
    #[setters(into)]
    endpoint: String,
    /// API version path segment
    #[serde(default = "default_version")]
    #[setters(into)]
    version: String,
    /// Value of the `X-Super-Client` header identifying this application
    #[serde(default = "default_super_client")]
    #[setters(into)]
    super_client: String,
    /// Value of the `X-Super-Contact` header; omitted when empty
    #[serde(default)]
    #[setters(into)]
    super_contact: String,
    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    timeout_secs: u64,
}

fn default_endpoint() -> String {
    "https://api.helldivers2.dev".to_string()
}

fn default_version() -> String {
    "v1".to_string()
}

fn default_super_client() -> String {
    "hellbot".to_string()
}

fn default_timeout_secs() -> u64 {
    15
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            version: default_version(),
            super_client: default_super_client(),
            super_contact: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setters_override_single_fields() {
        let config = ApiConfig::default()
            .with_endpoint("http://127.0.0.1:9000")
            .with_super_contact("ops@example.com")
            .with_timeout_secs(3);

        assert_eq!(config.endpoint(), "http://127.0.0.1:9000");
        assert_eq!(config.super_contact(), "ops@example.com");
        assert_eq!(*config.timeout_secs(), 3);
        assert_eq!(config.version(), "v1");
        assert_eq!(config.super_client(), "hellbot");
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let config: ApiConfig = serde_json::from_str(r#"{"version": "v2"}"#).unwrap();

        assert_eq!(config.version(), "v2");
        assert_eq!(config.endpoint(), "https://api.helldivers2.dev");
        assert_eq!(*config.timeout_secs(), 15);
    }
}
