//! Watchlist CRUD handlers

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use cw_core::Error;
use cw_models::{WatchedCoin, WatchlistUpdate};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::handlers::ApiResult;
use crate::server::AppState;

/// Body of POST /crypto.
///
/// Fields are optional so missing values produce the contract's 400
/// messages instead of a framework rejection.
#[derive(Deserialize)]
pub struct AddCoinRequest {
  pub symbol: Option<String>,
  pub name: Option<String>,
  pub notes: Option<String>,
}

/// Mutation response envelope: `{message, coin}`
#[derive(Serialize)]
pub struct CoinResponse {
  pub message: &'static str,
  pub coin: WatchedCoin,
}

/// GET /crypto/watchlist - list all watched coins
pub async fn get_watchlist(State(state): State<AppState>) -> Json<Vec<WatchedCoin>> {
  Json(state.watchlist.lock().list())
}

/// POST /crypto - add a coin to the watchlist
pub async fn add_coin(
  State(state): State<AppState>,
  Json(body): Json<AddCoinRequest>,
) -> ApiResult<(StatusCode, Json<CoinResponse>)> {
  let symbol = body
    .symbol
    .filter(|s| !s.is_empty())
    .ok_or_else(|| Error::Validation("Symbol is required".to_string()))?;
  let name = body
    .name
    .filter(|n| !n.is_empty())
    .ok_or_else(|| Error::Validation("Name is required".to_string()))?;

  let coin = state.watchlist.lock().add(&symbol, &name, body.notes)?;
  info!("Added {} to watchlist", coin.symbol);

  Ok((StatusCode::CREATED, Json(CoinResponse { message: "Coin added to watchlist", coin })))
}

/// PUT /crypto/:symbol - update a watchlist entry
pub async fn update_coin(
  State(state): State<AppState>,
  Path(symbol): Path<String>,
  Json(update): Json<WatchlistUpdate>,
) -> ApiResult<Json<CoinResponse>> {
  if update.is_empty() {
    return Err(
      Error::Validation("At least one field (name or notes) is required".to_string()).into(),
    );
  }

  let coin = state.watchlist.lock().update(&symbol, update)?;
  info!("Updated {} in watchlist", coin.symbol);

  Ok(Json(CoinResponse { message: "Coin updated in watchlist", coin }))
}

/// DELETE /crypto/:symbol - remove a watchlist entry
pub async fn remove_coin(
  State(state): State<AppState>,
  Path(symbol): Path<String>,
) -> ApiResult<Json<CoinResponse>> {
  let coin = state.watchlist.lock().remove(&symbol)?;
  info!("Removed {} from watchlist", coin.symbol);

  Ok(Json(CoinResponse { message: "Coin removed from watchlist", coin }))
}
