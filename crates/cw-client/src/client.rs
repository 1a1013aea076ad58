use crate::transport::Transport;
use cw_core::{Config, Result};
use cw_models::provider::{CoinDetail, MarketCoin, SearchResponse};
use std::sync::Arc;
use tracing::instrument;

/// Typed CoinGecko API client
///
/// Thin, strongly-typed wrapper over the transport layer. Higher-level
/// normalization and fallback policy live in [`crate::MarketDataGateway`].
pub struct CoinGeckoClient {
  transport: Arc<Transport>,
}

impl CoinGeckoClient {
  /// Create a new CoinGecko API client
  ///
  /// # Errors
  ///
  /// Returns an error if the HTTP client cannot be created.
  pub fn new(config: &Config) -> Result<Self> {
    Ok(Self { transport: Arc::new(Transport::new(config)?) })
  }

  /// List the top coins by market capitalization
  ///
  /// # Arguments
  ///
  /// * `limit` - Number of coins to return, priced in USD with 24h change
  #[instrument(skip(self))]
  pub async fn markets(&self, limit: usize) -> Result<Vec<MarketCoin>> {
    let params = [
      ("vs_currency", "usd".to_string()),
      ("order", "market_cap_desc".to_string()),
      ("per_page", limit.to_string()),
      ("page", "1".to_string()),
      ("sparkline", "false".to_string()),
      ("price_change_percentage", "24h".to_string()),
    ];

    self.transport.get("/coins/markets", &params).await
  }

  /// Fetch the full record for a coin by its CoinGecko identifier
  ///
  /// # Arguments
  ///
  /// * `id` - Provider-specific identifier (e.g. `bitcoin`, `matic-network`)
  #[instrument(skip(self))]
  pub async fn coin(&self, id: &str) -> Result<CoinDetail> {
    let params = [
      ("localization", "false".to_string()),
      ("tickers", "false".to_string()),
      ("market_data", "true".to_string()),
      ("community_data", "false".to_string()),
      ("developer_data", "false".to_string()),
    ];

    self.transport.get(&format!("/coins/{}", id), &params).await
  }

  /// Text search for coins matching a query string
  #[instrument(skip(self))]
  pub async fn search(&self, query: &str) -> Result<SearchResponse> {
    let params = [("query", query.to_string())];

    self.transport.get("/search", &params).await
  }

  /// Get the base URL the client is pointed at
  pub fn base_url(&self) -> &str {
    self.transport.base_url()
  }
}

impl std::fmt::Debug for CoinGeckoClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("CoinGeckoClient").field("base_url", &self.transport.base_url()).finish()
  }
}
