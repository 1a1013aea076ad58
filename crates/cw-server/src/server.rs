//! Router and shared application state

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use axum::routing::get;
use axum::Router;
use cw_client::MarketDataGateway;
use cw_core::{Config, Result};
use parking_lot::Mutex;
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{health, market, watchlist};
use crate::watchlist::WatchlistStore;

/// Shared state handed to every request handler.
///
/// The watchlist is the single process-wide store, constructed once at
/// startup; the mutex provides the single-writer-at-a-time serialization
/// the store itself does not.
#[derive(Clone)]
pub struct AppState {
  pub gateway: Arc<MarketDataGateway>,
  pub watchlist: Arc<Mutex<WatchlistStore>>,
}

impl AppState {
  /// Build the application state from configuration
  pub fn new(config: &Config) -> Result<Self> {
    Ok(Self {
      gateway: Arc::new(MarketDataGateway::new(config)?),
      watchlist: Arc::new(Mutex::new(WatchlistStore::new())),
    })
  }
}

/// Create the axum application with all routes and middleware
pub fn app(state: AppState) -> Router {
  Router::new()
    .route("/", get(health::health))
    .route("/crypto", get(market::list_popular).post(watchlist::add_coin))
    .route("/crypto/watchlist", get(watchlist::get_watchlist))
    .route(
      "/crypto/:symbol",
      get(market::get_coin).put(watchlist::update_coin).delete(watchlist::remove_coin),
    )
    .fallback(not_found)
    .layer(TraceLayer::new_for_http())
    .layer(CorsLayer::permissive())
    .with_state(state)
}

/// JSON 404 for unmatched routes
async fn not_found() -> impl IntoResponse {
  (StatusCode::NOT_FOUND, Json(json!({ "error": "Route not found" })))
}
