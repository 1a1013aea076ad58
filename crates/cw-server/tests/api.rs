//! HTTP contract tests for the coinwatch API.
//!
//! Routes are exercised in-process via `tower::ServiceExt::oneshot`; the
//! CoinGecko provider is stood in for by wiremock where a route reaches it.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use cw_core::Config;
use cw_server::{app, AppState};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Router with a fresh (empty) watchlist pointed at the given provider URL
fn test_router(base_url: &str) -> Router {
  let config = Config::default_with_base_url(base_url.to_string());
  app(AppState::new(&config).expect("state"))
}

/// Router for routes that never reach the provider
fn offline_router() -> Router {
  test_router("http://127.0.0.1:9")
}

fn get(uri: &str) -> Request<Body> {
  Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
  Request::builder()
    .method(method)
    .uri(uri)
    .header(header::CONTENT_TYPE, "application/json")
    .body(Body::from(body.to_string()))
    .unwrap()
}

async fn body_json(response: Response) -> Value {
  let bytes = response.into_body().collect().await.unwrap().to_bytes();
  serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_probe() {
  let router = offline_router();

  let response = router.oneshot(get("/")).await.unwrap();
  assert_eq!(response.status(), StatusCode::OK);

  let body = body_json(response).await;
  assert_eq!(body["message"], "Crypto API is running");
  assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_watchlist_crud_flow() {
  let router = offline_router();

  // Add stores the symbol uppercased with the supplied notes
  let response = router
    .clone()
    .oneshot(json_request(
      Method::POST,
      "/crypto",
      json!({ "symbol": "btc", "name": "Bitcoin", "notes": "fav" }),
    ))
    .await
    .unwrap();
  assert_eq!(response.status(), StatusCode::CREATED);
  let body = body_json(response).await;
  assert_eq!(body["message"], "Coin added to watchlist");
  assert_eq!(body["coin"]["symbol"], "BTC");
  assert_eq!(body["coin"]["name"], "Bitcoin");
  assert_eq!(body["coin"]["notes"], "fav");
  assert!(body["coin"].get("updatedAt").is_none());

  // Case-insensitive duplicate is a conflict
  let response = router
    .clone()
    .oneshot(json_request(Method::POST, "/crypto", json!({ "symbol": "BTC", "name": "Bitcoin" })))
    .await
    .unwrap();
  assert_eq!(response.status(), StatusCode::CONFLICT);

  // Listing shows the single entry
  let response = router.clone().oneshot(get("/crypto/watchlist")).await.unwrap();
  assert_eq!(response.status(), StatusCode::OK);
  let body = body_json(response).await;
  assert_eq!(body.as_array().unwrap().len(), 1);

  // Update touches notes, never the symbol, and stamps updatedAt
  let response = router
    .clone()
    .oneshot(json_request(Method::PUT, "/crypto/btc", json!({ "notes": "hodl" })))
    .await
    .unwrap();
  assert_eq!(response.status(), StatusCode::OK);
  let body = body_json(response).await;
  assert_eq!(body["coin"]["symbol"], "BTC");
  assert_eq!(body["coin"]["notes"], "hodl");
  assert!(body["coin"].get("updatedAt").is_some());

  // Remove returns the removed record; a second remove is a 404
  let response = router
    .clone()
    .oneshot(Request::builder().method(Method::DELETE).uri("/crypto/BTC").body(Body::empty()).unwrap())
    .await
    .unwrap();
  assert_eq!(response.status(), StatusCode::OK);
  let body = body_json(response).await;
  assert_eq!(body["message"], "Coin removed from watchlist");

  let response = router
    .oneshot(Request::builder().method(Method::DELETE).uri("/crypto/BTC").body(Body::empty()).unwrap())
    .await
    .unwrap();
  assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_add_requires_symbol_and_name() {
  let router = offline_router();

  let response = router
    .clone()
    .oneshot(json_request(Method::POST, "/crypto", json!({ "name": "Bitcoin" })))
    .await
    .unwrap();
  assert_eq!(response.status(), StatusCode::BAD_REQUEST);
  assert_eq!(body_json(response).await["error"], "Symbol is required");

  let response = router
    .oneshot(json_request(Method::POST, "/crypto", json!({ "symbol": "btc" })))
    .await
    .unwrap();
  assert_eq!(response.status(), StatusCode::BAD_REQUEST);
  assert_eq!(body_json(response).await["error"], "Name is required");
}

#[tokio::test]
async fn test_update_requires_a_mutable_field() {
  let router = offline_router();

  router
    .clone()
    .oneshot(json_request(Method::POST, "/crypto", json!({ "symbol": "btc", "name": "Bitcoin" })))
    .await
    .unwrap();

  let response = router
    .clone()
    .oneshot(json_request(Method::PUT, "/crypto/btc", json!({})))
    .await
    .unwrap();
  assert_eq!(response.status(), StatusCode::BAD_REQUEST);

  let response = router
    .oneshot(json_request(Method::PUT, "/crypto/NOTEXIST", json!({ "notes": "x" })))
    .await
    .unwrap();
  assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_short_symbol_rejected_before_any_lookup() {
  // Provider is unreachable, so a 400 here proves no lookup was attempted
  let router = offline_router();

  let response = router.clone().oneshot(get("/crypto/X")).await.unwrap();
  assert_eq!(response.status(), StatusCode::BAD_REQUEST);
  assert_eq!(body_json(response).await["error"], "Invalid symbol");

  // A single multi-byte character is still one character
  let response = router.oneshot(get("/crypto/%C3%A9")).await.unwrap();
  assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_route_returns_json_404() {
  let router = offline_router();

  let response = router.oneshot(get("/nope/nothing/here")).await.unwrap();
  assert_eq!(response.status(), StatusCode::NOT_FOUND);
  assert_eq!(body_json(response).await["error"], "Route not found");
}

#[tokio::test]
async fn test_popular_listing_proxies_provider() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/coins/markets"))
    .and(query_param("per_page", "10"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!([
      {
        "symbol": "btc",
        "name": "Bitcoin",
        "current_price": 67000.0,
        "price_change_percentage_24h": 2.345
      }
    ])))
    .mount(&server)
    .await;

  let router = test_router(&server.uri());

  // Unspecified, non-numeric, and zero limits all fall back to the default of 10
  for uri in ["/crypto", "/crypto?limit=abc", "/crypto?limit=0"] {
    let response = router.clone().oneshot(get(uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body[0]["symbol"], "BTC");
    assert_eq!(body[0]["change"], 2.35);
  }
}

#[tokio::test]
async fn test_popular_listing_rate_limit_serves_reference_data() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/coins/markets"))
    .respond_with(ResponseTemplate::new(429))
    .mount(&server)
    .await;

  let router = test_router(&server.uri());
  let response = router.oneshot(get("/crypto?limit=4")).await.unwrap();
  assert_eq!(response.status(), StatusCode::OK);

  let body = body_json(response).await;
  let quotes = body.as_array().unwrap();
  assert_eq!(quotes.len(), 4);
  assert_eq!(quotes[0]["symbol"], "BTC");
  assert_eq!(quotes[0]["price"], 45000.0);
}

#[tokio::test]
async fn test_symbol_lookup_rate_limit_serves_reference_quote() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/coins/bitcoin"))
    .respond_with(ResponseTemplate::new(429))
    .mount(&server)
    .await;

  let router = test_router(&server.uri());
  let response = router.oneshot(get("/crypto/btc")).await.unwrap();
  assert_eq!(response.status(), StatusCode::OK);

  let body = body_json(response).await;
  assert_eq!(body, json!({ "symbol": "BTC", "name": "Bitcoin", "price": 45000.0, "change": 2.5 }));
}

#[tokio::test]
async fn test_gateway_failure_maps_to_500() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/coins/markets"))
    .respond_with(ResponseTemplate::new(503))
    .mount(&server)
    .await;

  let router = test_router(&server.uri());
  let response = router.oneshot(get("/crypto")).await.unwrap();
  assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
  assert_eq!(body_json(response).await["error"], "Failed to fetch cryptocurrency data");
}
