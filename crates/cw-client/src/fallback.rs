//! Static reference data used when the live provider is rate-limited.
//!
//! The reference table keeps the gateway deterministic and testable: CI and
//! unit tests never need network access to exercise response shapes.

use cw_models::CoinQuote;

/// Reference quotes for ten well-known coins: (symbol, name, price, change)
const REFERENCE_QUOTES: [(&str, &str, f64, f64); 10] = [
  ("BTC", "Bitcoin", 45000.0, 2.5),
  ("ETH", "Ethereum", 2500.0, -1.2),
  ("USDT", "Tether", 1.0, 0.01),
  ("BNB", "BNB", 320.0, 1.8),
  ("XRP", "XRP", 0.62, -0.5),
  ("SOL", "Solana", 98.0, 3.2),
  ("ADA", "Cardano", 0.45, -2.1),
  ("DOGE", "Dogecoin", 0.08, 5.3),
  ("DOT", "Polkadot", 7.2, 0.8),
  ("MATIC", "Polygon", 0.85, 1.1),
];

/// The full reference dataset in market-cap order
pub fn reference_quotes() -> Vec<CoinQuote> {
  REFERENCE_QUOTES
    .iter()
    .map(|(symbol, name, price, change)| CoinQuote::new(symbol, name, *price, *change))
    .collect()
}

/// Look up a reference quote by exact case-insensitive symbol
pub fn reference_quote(symbol: &str) -> Option<CoinQuote> {
  let upper = symbol.to_uppercase();
  REFERENCE_QUOTES
    .iter()
    .find(|(sym, _, _, _)| *sym == upper)
    .map(|(symbol, name, price, change)| CoinQuote::new(symbol, name, *price, *change))
}

/// Resolve a ticker symbol to its CoinGecko identifier.
///
/// Covers the well-known coins; anything else goes through provider search.
pub fn coingecko_id(symbol: &str) -> Option<&'static str> {
  match symbol.to_uppercase().as_str() {
    "BTC" => Some("bitcoin"),
    "ETH" => Some("ethereum"),
    "USDT" => Some("tether"),
    "BNB" => Some("binancecoin"),
    "XRP" => Some("ripple"),
    "ADA" => Some("cardano"),
    "DOGE" => Some("dogecoin"),
    "SOL" => Some("solana"),
    "DOT" => Some("polkadot"),
    "MATIC" => Some("matic-network"),
    "LTC" => Some("litecoin"),
    "AVAX" => Some("avalanche-2"),
    "LINK" => Some("chainlink"),
    "UNI" => Some("uniswap"),
    "ATOM" => Some("cosmos"),
    _ => None,
  }
}
