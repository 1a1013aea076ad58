//! HTTP transport layer for CoinGecko API requests

use cw_core::{Config, Error, Result};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error};
use url::Url;

/// HTTP transport layer for making requests to the CoinGecko API
pub struct Transport {
  client: Client,
  base_url: String,
  api_key: Option<String>,
}

impl Transport {
  /// Create a new transport instance
  pub fn new(config: &Config) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(config.timeout_secs))
      .user_agent("cw-client/0.1.0")
      .build()
      .map_err(|e| Error::Http(format!("Failed to create HTTP client: {}", e)))?;

    Ok(Self {
      client,
      base_url: config.base_url.clone(),
      api_key: config.api_key.clone(),
    })
  }

  /// Create a mock transport for testing
  #[cfg(test)]
  pub fn new_mock() -> Self {
    Self {
      client: Client::new(),
      base_url: "https://mock.coingecko.test/api/v3".to_string(),
      api_key: None,
    }
  }

  /// Make a GET request to the CoinGecko API
  ///
  /// # Arguments
  ///
  /// * `path` - Endpoint path relative to the base URL (e.g. `/coins/markets`)
  /// * `params` - Query parameters for the request
  ///
  /// No retries are attempted: a 429 maps to `Error::RateLimit` and the
  /// caller decides whether the static reference data substitutes.
  pub async fn get<T>(&self, path: &str, params: &[(&str, String)]) -> Result<T>
  where
    T: DeserializeOwned,
  {
    let url = self.build_url(path, params)?;
    debug!("Making request to: {}", url);

    let response = self
      .client
      .get(url)
      .send()
      .await
      .map_err(|e| Error::Http(format!("Request failed: {}", e)))?;

    let status = response.status();

    if status == StatusCode::TOO_MANY_REQUESTS {
      return Err(Error::RateLimit(format!("CoinGecko returned 429 for {}", path)));
    }

    if !status.is_success() {
      error!("Request to {} failed with status: {}", path, status);
      return Err(Error::Http(format!("HTTP error: {}", status)));
    }

    let text = response
      .text()
      .await
      .map_err(|e| Error::Http(format!("Failed to read response body: {}", e)))?;

    debug!("Response body length: {} bytes", text.len());

    serde_json::from_str::<T>(&text).map_err(|e| {
      error!("Failed to parse JSON response: {}", e);
      // Truncate by characters; a byte slice could split a multi-byte char
      let snippet: String = text.chars().take(200).collect();
      Error::Parse(format!("Failed to parse response: {}. Response: {}", e, snippet))
    })
  }

  /// Build the full URL for an API request
  fn build_url(&self, path: &str, params: &[(&str, String)]) -> Result<Url> {
    let mut url = Url::parse(&format!("{}{}", self.base_url, path))
      .map_err(|e| Error::Http(format!("Invalid base URL: {}", e)))?;

    {
      let mut query_pairs = url.query_pairs_mut();
      for (key, value) in params {
        query_pairs.append_pair(key, value);
      }

      // Pro keys select the pro auth parameter; anything else is a demo key
      if let Some(key) = &self.api_key {
        if key.starts_with("CG-") {
          query_pairs.append_pair("x_cg_pro_api_key", key);
        } else {
          query_pairs.append_pair("x_cg_demo_api_key", key);
        }
      }
    }

    Ok(url)
  }

  /// Get the base URL being used
  pub fn base_url(&self) -> &str {
    &self.base_url
  }
}
