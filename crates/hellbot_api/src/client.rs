//! HTTP fetcher implementation.

use crate::ApiConfig;
use async_trait::async_trait;
use hellbot_error::{FetchError, FetchErrorKind, FetchResult, HttpError};
use hellbot_interface::{FetchResponse, OrderFetcher};
use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue};
use serde_json::Value as JsonValue;
use std::time::Duration;
use tracing::{debug, error, instrument, warn};

/// Header naming the application making the request.
pub const SUPER_CLIENT_HEADER: &str = "x-super-client";
/// Header carrying a contact address for the application's maintainer.
pub const SUPER_CONTACT_HEADER: &str = "x-super-contact";

/// Client for the Helldivers 2 community API.
#[derive(Debug, Clone)]
pub struct HelldiversClient {
    client: Client,
    config: ApiConfig,
}

impl HelldiversClient {
    /// Build a client with the configured headers and timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if a header value is not valid HTTP or the TLS
    /// backend cannot be initialised.
    pub fn new(config: ApiConfig) -> Result<Self, HttpError> {
        let client = Client::builder()
            .default_headers(default_headers(&config)?)
            .timeout(Duration::from_secs(*config.timeout_secs()))
            .build()
            .map_err(|e| HttpError::new(format!("Failed to build HTTP client: {}", e)))?;
        debug!(endpoint = %config.endpoint(), "Created Helldivers API client");
        Ok(Self { client, config })
    }

    /// Configuration this client was built from.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Full URL for an API query such as `"assignments"`.
    pub fn url_for(&self, query: &str) -> String {
        format!(
            "{}/api/{}/{}",
            self.config.endpoint().trim_end_matches('/'),
            self.config.version(),
            query.trim_start_matches('/')
        )
    }

    /// Status code returned by the API root.
    ///
    /// # Errors
    ///
    /// Returns an error if no response was received.
    #[instrument(skip(self), fields(endpoint = %self.config.endpoint()))]
    pub async fn health_check(&self) -> FetchResult<u16> {
        let response = self
            .client
            .get(self.config.endpoint())
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;
        let status = response.status().as_u16();
        debug!(status, "API health check");
        Ok(status)
    }

    #[track_caller]
    fn transport_error(&self, err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            error!(error = %err, "Request timed out");
            FetchError::new(FetchErrorKind::Timeout(
                self.config.timeout_secs().saturating_mul(1000),
            ))
        } else {
            error!(error = %err, "Request failed");
            FetchError::new(FetchErrorKind::Transport(err.to_string()))
        }
    }
}

#[async_trait]
impl OrderFetcher for HelldiversClient {
    #[instrument(skip(self))]
    async fn fetch(&self, query: &str) -> FetchResult<FetchResponse> {
        let url = self.url_for(query);
        debug!(url = %url, "Fetching from Helldivers API");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;
        let status = response.status();
        let body = response.text().await.map_err(|e| self.transport_error(e))?;

        let payload = match serde_json::from_str::<JsonValue>(&body) {
            Ok(payload) => payload,
            Err(e) if status.is_success() => {
                error!(error = %e, "Response body is not JSON");
                return Err(FetchError::new(FetchErrorKind::InvalidBody(e.to_string())));
            }
            Err(_) => JsonValue::Null,
        };

        if !status.is_success() {
            warn!(status = status.as_u16(), "API returned error status");
        }
        Ok(FetchResponse::new(payload, status.as_u16()))
    }
}

/// Headers sent with every request.
///
/// # Errors
///
/// Returns an error if a configured identity is not a valid header value.
pub(crate) fn default_headers(config: &ApiConfig) -> Result<HeaderMap, HttpError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(
        HeaderName::from_static(SUPER_CLIENT_HEADER),
        header_value(config.super_client())?,
    );
    if config.super_contact().is_empty() {
        warn!("No X-Super-Contact configured; the API may reject requests");
    } else {
        headers.insert(
            HeaderName::from_static(SUPER_CONTACT_HEADER),
            header_value(config.super_contact())?,
        );
    }
    Ok(headers)
}

fn header_value(value: &str) -> Result<HeaderValue, HttpError> {
    HeaderValue::from_str(value)
        .map_err(|e| HttpError::new(format!("Invalid header value '{}': {}", value, e)))
}
