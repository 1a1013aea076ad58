use thiserror::Error;

/// The main error type for cw-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// Missing or malformed caller input
  #[error("{0}")]
  Validation(String),

  /// Duplicate watchlist entry
  #[error("{0}")]
  Conflict(String),

  /// Missing watchlist entry or unresolvable quote symbol
  #[error("{0}")]
  NotFound(String),

  /// Provider rate limit hit; absorbed by the gateway fallback, never
  /// surfaced to HTTP callers
  #[error("Rate limit exceeded: {0}")]
  RateLimit(String),

  /// HTTP transport error
  #[error("HTTP error: {0}")]
  Http(String),

  /// Serialization/Deserialization error
  #[error("Serialization error: {0}")]
  Serde(#[from] serde_json::Error),

  /// Failed to parse a provider response body
  #[error("Parse error: {0}")]
  Parse(String),

  /// External provider failed for a reason other than rate limiting
  #[error("Upstream error: {0}")]
  Upstream(String),
}

impl Error {
  /// True for failures the gateway absorbs via the static fallback table.
  pub fn is_rate_limit(&self) -> bool {
    matches!(self, Error::RateLimit(_))
  }
}

/// Result type alias for cw-* crates
pub type Result<T> = std::result::Result<T, Error>;
