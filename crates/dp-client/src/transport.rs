//! HTTP transport layer shared by all API endpoints

use dp_core::{Config, Error, Result};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error};
use url::Url;

/// HTTP transport layer for making JSON GET requests.
///
/// Unlike a per-API client this is endpoint-agnostic: callers supply the full
/// endpoint URL and query parameters (including any API key). There is no
/// retry or backoff; a failed request surfaces immediately.
#[derive(Debug)]
pub struct Transport {
    client: Client,
    timeout: Duration,
}

impl Transport {
    /// Create a new transport instance
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("dp-client/0.1.0")
            .build()
            .map_err(|e| Error::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, timeout: Duration::from_secs(config.timeout_secs) })
    }

    /// Create a transport for testing
    #[cfg(test)]
    pub fn new_mock() -> Self {
        Self { client: Client::new(), timeout: Duration::from_secs(30) }
    }

    /// Make a GET request and deserialize the JSON response
    ///
    /// # Arguments
    ///
    /// * `endpoint` - Full endpoint URL without query string
    /// * `params` - Query parameters for the request
    pub async fn get<T>(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = Self::build_url(endpoint, params)?;
        debug!("Making request to: {}", url);

        let response = self.make_request(url).await?;
        let text = response
            .text()
            .await
            .map_err(|e| Error::Http(format!("Failed to read response body: {}", e)))?;

        debug!("Response body length: {} bytes", text.len());

        // Check for API error messages in the response
        check_api_error(&text)?;

        match serde_json::from_str::<T>(&text) {
            Ok(data) => Ok(data),
            Err(e) => {
                error!("Failed to parse JSON response: {}", e);
                Err(Error::Parse(format!(
                    "Failed to parse response: {}. Response: {}",
                    e,
                    &text[..std::cmp::min(200, text.len())]
                )))
            }
        }
    }

    /// Build the full URL for a request
    fn build_url(endpoint: &str, params: &[(&str, &str)]) -> Result<Url> {
        let mut url =
            Url::parse(endpoint).map_err(|e| Error::Http(format!("Invalid URL: {}", e)))?;

        {
            let mut query_pairs = url.query_pairs_mut();
            for (key, value) in params {
                query_pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }

    /// Make the actual HTTP request
    async fn make_request(&self, url: Url) -> Result<Response> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Http(format!("Request failed: {}", e)))?;

        let status = response.status();

        if status.is_success() {
            debug!("Request successful with status: {}", status);
            Ok(response)
        } else {
            error!("Request failed with status: {}", status);
            Err(Error::Http(format!("HTTP error: {}", status)))
        }
    }

    /// Get request timeout duration
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// Check for well-known remote error shapes in a response body.
///
/// AlphaVantage returns HTTP 200 for errors and rate limiting, with the
/// problem described in the body; NewsAPI uses a `"status": "error"`
/// envelope. Both are sniffed before deserialization so the caller gets a
/// classified error instead of a parse failure.
fn check_api_error(response_text: &str) -> Result<()> {
    // AlphaVantage error message
    if response_text.contains("Error Message") {
        if let Ok(error_response) =
            serde_json::from_str::<std::collections::HashMap<String, String>>(response_text)
        {
            if let Some(error_msg) = error_response.get("Error Message") {
                return Err(Error::Api(error_msg.clone()));
            }
        }
    }

    // AlphaVantage call frequency note
    if response_text.contains("API call frequency")
        || response_text.contains("higher API call frequency")
    {
        return Err(Error::RateLimit("API call frequency limit exceeded".to_string()));
    }

    // NewsAPI error envelope
    if response_text.contains("\"status\":\"error\"")
        || response_text.contains("\"status\": \"error\"")
    {
        #[derive(serde::Deserialize)]
        struct NewsApiError {
            code: Option<String>,
            message: Option<String>,
        }
        if let Ok(err) = serde_json::from_str::<NewsApiError>(response_text) {
            let message = err.message.unwrap_or_else(|| "unknown error".to_string());
            return match err.code.as_deref() {
                Some("rateLimited") => Err(Error::RateLimit(message)),
                Some("apiKeyInvalid") | Some("apiKeyMissing") => Err(Error::ApiKey(message)),
                _ => Err(Error::Api(message)),
            };
        }
    }

    Ok(())
}
