use anyhow::Result;
use cw_core::Config;
use cw_server::{app, AppState};
use std::net::SocketAddr;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
    .init();

  let config = Config::from_env()?;
  let state = AppState::new(&config)?;
  let router = app(state);

  let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
  let listener = match tokio::net::TcpListener::bind(addr).await {
    Ok(listener) => listener,
    Err(e) => {
      error!("Failed to bind TCP listener to {}: {}", addr, e);
      return Err(anyhow::anyhow!("Failed to bind to address {}: {}", addr, e));
    }
  };

  info!("Crypto API server running on http://localhost:{}", config.port);
  info!("Endpoints available:");
  info!("  GET    /crypto           - List popular cryptocurrencies");
  info!("  GET    /crypto/:symbol   - Get specific coin by symbol");
  info!("  POST   /crypto           - Add coin to watchlist");
  info!("  PUT    /crypto/:symbol   - Update coin in watchlist");
  info!("  DELETE /crypto/:symbol   - Remove coin from watchlist");
  info!("  GET    /crypto/watchlist - Get your watchlist");

  axum::serve(listener, router).await?;

  Ok(())
}
