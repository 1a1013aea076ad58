//! In-memory watchlist store.
//!
//! An insertion-ordered collection of watched coins keyed by case-insensitive
//! symbol. The store itself carries no synchronization; the server wraps the
//! single process-wide instance in a mutex handle. State lives only for the
//! process lifetime.

use chrono::Utc;
use cw_core::{Error, Result};
use cw_models::{WatchedCoin, WatchlistUpdate};

/// In-memory store of watched coins
pub struct WatchlistStore {
  coins: Vec<WatchedCoin>,
  next_seq: u64,
}

impl WatchlistStore {
  /// Create an empty store
  pub fn new() -> Self {
    Self { coins: Vec::new(), next_seq: 0 }
  }

  /// Snapshot of all records in insertion order
  pub fn list(&self) -> Vec<WatchedCoin> {
    self.coins.clone()
  }

  /// Add a coin to the watchlist.
  ///
  /// The symbol is normalized to uppercase and notes default to empty.
  ///
  /// # Errors
  ///
  /// Returns `Error::Conflict` when a case-insensitive duplicate symbol
  /// already exists; the store is left unchanged.
  pub fn add(&mut self, symbol: &str, name: &str, notes: Option<String>) -> Result<WatchedCoin> {
    if self.position(symbol).is_some() {
      return Err(Error::Conflict(format!("Coin '{}' already exists in watchlist", symbol)));
    }

    let coin = WatchedCoin {
      id: self.next_id(),
      symbol: symbol.to_uppercase(),
      name: name.to_string(),
      notes: notes.unwrap_or_default(),
      added_at: Utc::now(),
      updated_at: None,
    };
    self.coins.push(coin.clone());
    Ok(coin)
  }

  /// Merge updated fields into an existing record.
  ///
  /// The symbol is never changed, regardless of the caller's input; updates
  /// with no mutable fields are rejected upstream before reaching here.
  ///
  /// # Errors
  ///
  /// Returns `Error::NotFound` when the symbol is absent.
  pub fn update(&mut self, symbol: &str, update: WatchlistUpdate) -> Result<WatchedCoin> {
    let index = self
      .position(symbol)
      .ok_or_else(|| Error::NotFound(format!("Coin '{}' not found in watchlist", symbol)))?;

    let coin = &mut self.coins[index];
    if let Some(name) = update.name {
      coin.name = name;
    }
    if let Some(notes) = update.notes {
      coin.notes = notes;
    }
    coin.updated_at = Some(Utc::now());
    Ok(coin.clone())
  }

  /// Remove a coin by symbol, returning the removed record.
  ///
  /// # Errors
  ///
  /// Returns `Error::NotFound` when the symbol is absent.
  pub fn remove(&mut self, symbol: &str) -> Result<WatchedCoin> {
    let index = self
      .position(symbol)
      .ok_or_else(|| Error::NotFound(format!("Coin '{}' not found in watchlist", symbol)))?;

    Ok(self.coins.remove(index))
  }

  /// Non-mutating lookup by case-insensitive symbol
  pub fn find(&self, symbol: &str) -> Option<&WatchedCoin> {
    self.position(symbol).map(|i| &self.coins[i])
  }

  /// Empty the store. Test isolation; not part of the HTTP contract.
  pub fn clear(&mut self) {
    self.coins.clear();
  }

  fn position(&self, symbol: &str) -> Option<usize> {
    self.coins.iter().position(|c| c.symbol.eq_ignore_ascii_case(symbol))
  }

  /// Time-derived id with a sequence tiebreak so ids stay unique and are
  /// never reused within a process
  fn next_id(&mut self) -> String {
    self.next_seq += 1;
    format!("{}-{}", Utc::now().timestamp_millis(), self.next_seq)
  }
}

impl Default for WatchlistStore {
  fn default() -> Self {
    Self::new()
  }
}
