//! Market data handlers

use axum::extract::{Path, Query, State};
use axum::response::Json;
use cw_core::{Error, DEFAULT_POPULAR_LIMIT, MIN_SYMBOL_LEN};
use cw_models::CoinQuote;
use serde::Deserialize;
use tracing::info;

use crate::handlers::ApiResult;
use crate::server::AppState;

/// Query parameters for the popular listing.
///
/// `limit` is carried as a string and parsed leniently: unspecified,
/// non-numeric, and zero values all get the default rather than a rejection.
#[derive(Deserialize)]
pub struct PopularQuery {
  pub limit: Option<String>,
}

/// GET /crypto - list popular coins by market capitalization
pub async fn list_popular(
  State(state): State<AppState>,
  Query(query): Query<PopularQuery>,
) -> ApiResult<Json<Vec<CoinQuote>>> {
  let limit = query
    .limit
    .as_deref()
    .and_then(|s| s.parse::<usize>().ok())
    .filter(|&n| n > 0)
    .unwrap_or(DEFAULT_POPULAR_LIMIT);

  let quotes = state.gateway.list_popular(limit).await?;
  Ok(Json(quotes))
}

/// GET /crypto/:symbol - quote lookup by ticker symbol
pub async fn get_coin(
  State(state): State<AppState>,
  Path(symbol): Path<String>,
) -> ApiResult<Json<CoinQuote>> {
  // Rejected before any provider lookup happens; counted in characters,
  // not bytes
  if symbol.chars().count() < MIN_SYMBOL_LEN {
    return Err(Error::Validation("Invalid symbol".to_string()).into());
  }

  info!("Quote lookup for symbol: {}", symbol);
  let quote = state.gateway.get_by_symbol(&symbol).await?;
  Ok(Json(quote))
}
