//! Configuration management for the coinwatch API

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::env;
use dotenvy::dotenv;

/// Main configuration struct for the coinwatch API
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
  /// HTTP listening port
  pub port: u16,

  /// Base URL for the CoinGecko API
  pub base_url: String,

  /// Optional CoinGecko API key; absent means the public unauthenticated API
  pub api_key: Option<String>,

  /// Request timeout in seconds for outbound provider calls
  pub timeout_secs: u64,
}

impl Config {
  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {

    dotenv().ok();

    let port = env::var("PORT")
      .unwrap_or_else(|_| crate::DEFAULT_PORT.to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid PORT".to_string()))?;

    let api_key = env::var("COINGECKO_API_KEY").ok().filter(|k| !k.is_empty());

    // Keyed access goes through the pro host unless overridden
    let base_url = env::var("COINGECKO_BASE_URL").unwrap_or_else(|_| {
      if api_key.is_some() {
        crate::COINGECKO_PRO_BASE_URL.to_string()
      } else {
        crate::COINGECKO_BASE_URL.to_string()
      }
    });

    let timeout_secs = env::var("CW_TIMEOUT_SECS")
      .unwrap_or_else(|_| "30".to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid CW_TIMEOUT_SECS".to_string()))?;

    Ok(Config { port, base_url, api_key, timeout_secs })
  }

  /// Create a config with default values (for testing)
  pub fn default_with_base_url(base_url: String) -> Self {
    Config { port: crate::DEFAULT_PORT, base_url, api_key: None, timeout_secs: 30 }
  }
}

impl Default for Config {
  fn default() -> Self {
    Self::default_with_base_url(crate::COINGECKO_BASE_URL.to_string())
  }
}
