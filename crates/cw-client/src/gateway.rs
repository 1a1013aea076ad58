//! Normalization layer over the CoinGecko client.
//!
//! Translates provider responses into [`CoinQuote`]s and absorbs provider
//! rate limiting by substituting the static reference table. Symbol lookups
//! run as an explicit ordered resolution sequence: identifier table, then
//! provider search, terminating in the reference table or a not-found
//! signal. A rate-limited symbol absent from the reference table surfaces
//! as the same not-found outcome as a plain provider miss.

use crate::client::CoinGeckoClient;
use crate::fallback;
use cw_core::{Config, Error, Result};
use cw_models::CoinQuote;
use tracing::{instrument, warn};

/// Outcome of one resolution step for a symbol lookup
enum Resolution {
  /// Provider produced a quote
  Quote(CoinQuote),
  /// Provider is rate-limited; consult the reference table
  Fallback,
  /// Provider has no such coin (or failed in a non-recoverable way)
  Miss,
}

/// Market data gateway over the CoinGecko API
pub struct MarketDataGateway {
  client: CoinGeckoClient,
}

impl MarketDataGateway {
  /// Create a gateway from configuration
  ///
  /// # Errors
  ///
  /// Returns an error if the underlying HTTP client cannot be created.
  pub fn new(config: &Config) -> Result<Self> {
    Ok(Self { client: CoinGeckoClient::new(config)? })
  }

  /// List the top `limit` coins by market capitalization as quotes.
  ///
  /// On provider rate limiting the static reference table is returned,
  /// truncated to `limit`. Any other provider failure is a generic
  /// upstream error.
  #[instrument(skip(self))]
  pub async fn list_popular(&self, limit: usize) -> Result<Vec<CoinQuote>> {
    match self.client.markets(limit).await {
      Ok(coins) => Ok(coins.into_iter().map(|c| c.into_quote()).collect()),
      Err(e) if e.is_rate_limit() => {
        warn!("Using reference data for popular listing: {}", e);
        Ok(fallback::reference_quotes().into_iter().take(limit).collect())
      }
      Err(e) => {
        warn!("Popular listing failed: {}", e);
        Err(Error::Upstream("Failed to fetch cryptocurrency data".to_string()))
      }
    }
  }

  /// Resolve a ticker symbol to a quote.
  ///
  /// # Errors
  ///
  /// Returns `Error::NotFound` when neither the provider nor the reference
  /// table can produce a quote for the symbol.
  #[instrument(skip(self))]
  pub async fn get_by_symbol(&self, symbol: &str) -> Result<CoinQuote> {
    let upper = symbol.to_uppercase();

    let resolution = match fallback::coingecko_id(&upper) {
      Some(id) => self.resolve_by_id(id).await,
      None => self.resolve_by_search(&upper).await,
    };

    match resolution {
      Resolution::Quote(quote) => Ok(quote),
      Resolution::Fallback => {
        warn!("Using reference data for symbol {}", upper);
        fallback::reference_quote(&upper)
          .ok_or_else(|| Error::NotFound(format!("Coin with symbol '{}' not found", upper)))
      }
      Resolution::Miss => {
        Err(Error::NotFound(format!("Coin with symbol '{}' not found", upper)))
      }
    }
  }

  /// Fetch a coin by provider identifier and map it to a quote
  async fn resolve_by_id(&self, id: &str) -> Resolution {
    match self.client.coin(id).await {
      Ok(detail) => Resolution::Quote(detail.into_quote()),
      Err(e) if e.is_rate_limit() => Resolution::Fallback,
      Err(e) => {
        warn!("Coin fetch for '{}' failed: {}", id, e);
        Resolution::Miss
      }
    }
  }

  /// Search the provider for an exact case-insensitive symbol match, then
  /// fetch the matched coin. A search miss defers to the reference table.
  async fn resolve_by_search(&self, symbol: &str) -> Resolution {
    match self.client.search(symbol).await {
      Ok(results) => {
        let hit = results.coins.into_iter().find(|c| c.symbol.eq_ignore_ascii_case(symbol));
        match hit {
          Some(coin) => self.resolve_by_id(&coin.id).await,
          None => Resolution::Fallback,
        }
      }
      Err(e) if e.is_rate_limit() => Resolution::Fallback,
      Err(e) => {
        warn!("Search for '{}' failed: {}", symbol, e);
        Resolution::Miss
      }
    }
  }
}

impl std::fmt::Debug for MarketDataGateway {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("MarketDataGateway").field("base_url", &self.client.base_url()).finish()
  }
}
