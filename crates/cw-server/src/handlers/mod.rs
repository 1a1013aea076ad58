//! Request handlers for the coinwatch HTTP API

pub mod error;
pub mod health;
pub mod market;
pub mod watchlist;

pub use error::{ApiError, ApiResult};
