//! CoinGecko response shapes consumed by the client.
//!
//! Only the fields the gateway maps into quotes are modelled; the provider
//! returns far more and serde ignores the rest.

use serde::{Deserialize, Serialize};

use crate::quote::{round_change, CoinQuote};

/// One row of the `/coins/markets` listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketCoin {
  pub symbol: String,

  pub name: String,

  /// USD price; null for delisted coins
  #[serde(default)]
  pub current_price: Option<f64>,

  /// 24h change percentage, omitted for thinly traded coins
  #[serde(default)]
  pub price_change_percentage_24h: Option<f64>,
}

impl MarketCoin {
  /// Map into the canonical quote shape
  pub fn into_quote(self) -> CoinQuote {
    CoinQuote {
      symbol: self.symbol.to_uppercase(),
      name: self.name,
      price: self.current_price.unwrap_or_default(),
      change: round_change(self.price_change_percentage_24h),
    }
  }
}

/// Full coin record from `/coins/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinDetail {
  pub symbol: String,

  pub name: String,

  pub market_data: MarketData,
}

/// Market data block nested in a coin detail record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketData {
  pub current_price: CurrentPrice,

  #[serde(default)]
  pub price_change_percentage_24h: Option<f64>,
}

/// Per-currency price map; only USD is consumed, and may be null
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentPrice {
  #[serde(default)]
  pub usd: Option<f64>,
}

impl CoinDetail {
  /// Map into the canonical quote shape
  pub fn into_quote(self) -> CoinQuote {
    CoinQuote {
      symbol: self.symbol.to_uppercase(),
      name: self.name,
      price: self.market_data.current_price.usd.unwrap_or_default(),
      change: round_change(self.market_data.price_change_percentage_24h),
    }
  }
}

/// Response envelope of `/search`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
  #[serde(default)]
  pub coins: Vec<SearchCoin>,
}

/// One search hit; `id` is the provider-specific coin identifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchCoin {
  pub id: String,

  pub symbol: String,

  pub name: String,
}
