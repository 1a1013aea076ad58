pub mod config;
pub mod error;

pub use config::Config;
pub use error::{Error, Result};

/// Base URL for the public CoinGecko API
pub const COINGECKO_BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// Base URL for the pro (keyed) CoinGecko API
pub const COINGECKO_PRO_BASE_URL: &str = "https://pro-api.coingecko.com/api/v3";

/// Default number of coins returned by the popular listing
pub const DEFAULT_POPULAR_LIMIT: usize = 10;

/// Default listening port for the HTTP API
pub const DEFAULT_PORT: u16 = 3000;

/// Minimum length of a ticker symbol accepted by lookups
pub const MIN_SYMBOL_LEN: usize = 2;
