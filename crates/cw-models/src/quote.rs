use serde::{Deserialize, Serialize};

/// A provider-sourced price snapshot for a single coin.
///
/// Transient: quotes are rendered to callers and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinQuote {
  /// Uppercase ticker symbol
  pub symbol: String,

  /// Display name from the provider
  pub name: String,

  /// Current USD price
  pub price: f64,

  /// 24-hour percentage change, rounded to 2 decimal places
  pub change: f64,
}

impl CoinQuote {
  pub fn new(symbol: &str, name: &str, price: f64, change: f64) -> Self {
    Self {
      symbol: symbol.to_uppercase(),
      name: name.to_string(),
      price,
      change,
    }
  }
}

/// Round a provider change percentage to 2 decimal places, defaulting to 0
/// when the provider omits it.
pub fn round_change(change: Option<f64>) -> f64 {
  change.map(|c| (c * 100.0).round() / 100.0).unwrap_or(0.0)
}
