use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single watched-coin record.
///
/// `symbol` is the natural key, stored uppercase and unique
/// case-insensitively within a store. Serialized camelCase to match the
/// HTTP contract; `updatedAt` is omitted until the first successful update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchedCoin {
  /// Opaque unique identifier assigned at creation, never reused
  pub id: String,

  /// Uppercase ticker symbol, immutable after creation
  pub symbol: String,

  /// Human-readable display name
  pub name: String,

  /// Free-form notes, defaults to empty
  pub notes: String,

  /// Creation timestamp
  pub added_at: DateTime<Utc>,

  /// Set only after the first successful update
  #[serde(skip_serializing_if = "Option::is_none")]
  pub updated_at: Option<DateTime<Utc>>,
}

/// Mutable fields accepted by a watchlist update.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WatchlistUpdate {
  pub name: Option<String>,

  pub notes: Option<String>,
}

impl WatchlistUpdate {
  /// An update carrying no mutable fields is rejected upstream with a
  /// validation error before it ever reaches the store.
  pub fn is_empty(&self) -> bool {
    self.name.is_none() && self.notes.is_none()
  }
}
