//! # cw-client
//!
//! CoinGecko API client and normalization layer for coinwatch.
//!
//! ## Features
//!
//! - **Typed endpoints**: markets listing, coin detail, and text search
//! - **Async/Await**: built on tokio and reqwest
//! - **Rate-limit resilience**: HTTP 429 responses are absorbed by a static
//!   reference dataset so callers see deterministic data instead of errors
//! - **Configurable**: environment-based configuration via cw-core
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cw_client::MarketDataGateway;
//! use cw_core::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let gateway = MarketDataGateway::new(&config)?;
//!
//!     let popular = gateway.list_popular(10).await?;
//!     println!("Top coin: {} at ${}", popular[0].symbol, popular[0].price);
//!
//!     let btc = gateway.get_by_symbol("BTC").await?;
//!     println!("BTC 24h change: {}%", btc.change);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All methods return `Result<T, cw_core::Error>`. Provider rate limiting
//! never surfaces: the gateway substitutes the reference table instead.

#![warn(clippy::all)]

pub mod client;
pub mod fallback;
pub mod gateway;
pub mod transport;

// Re-export the main entry points and common types
pub use client::CoinGeckoClient;
pub use gateway::MarketDataGateway;
pub use cw_core::{Config, Error, Result};
