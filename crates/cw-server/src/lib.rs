//! HTTP API for the coinwatch cryptocurrency watchlist.
//!
//! Thin axum layer over two components: the in-memory [`watchlist`] store and
//! the market-data gateway from `cw-client`. Handlers validate input, invoke
//! the component operations, and render their results; everything else is
//! framework glue.

#![warn(clippy::all)]

pub mod handlers;
pub mod server;
pub mod watchlist;

pub use server::{app, AppState};
pub use watchlist::WatchlistStore;
