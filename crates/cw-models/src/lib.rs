//! # cw-models
//!
//! Data models for the coinwatch API.
//!
//! This crate provides the watchlist record and quote types served over HTTP,
//! plus strongly-typed structures for the CoinGecko response shapes the client
//! consumes (`/coins/markets`, `/coins/{id}`, `/search`).

#![warn(clippy::all)]

pub mod provider;
pub mod quote;
pub mod watchlist;

// Re-export all model types
pub use provider::*;
pub use quote::*;
pub use watchlist::*;
