mod common;

use std::time::Duration;

use axum::{http::Method, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde_json::{json, Value};

use common::{build_test_app, build_test_app_with_timeout, serve_stub, TestApp};

/// CoinGecko stand-in that knows bitcoin and ethereum but not dogecoin.
async fn coingecko_stub() -> String {
    let router = Router::new()
        .route(
            "/simple/price",
            get(|| async {
                Json(json!({
                    "bitcoin": { "usd": 50000.12 },
                    "ethereum": { "usd": 3000.5 }
                }))
            }),
        )
        .route(
            "/coins/markets",
            get(|| async {
                Json(json!([
                    { "id": "bitcoin", "symbol": "btc", "image": "https://img/btc.png" },
                    { "id": "ethereum", "symbol": "eth", "image": "https://img/eth.png" }
                ]))
            }),
        );
    serve_stub(router).await
}

/// CoinGecko stand-in whose market listing answers slowly but successfully.
async fn slow_markets_stub(delay: Duration) -> String {
    let router = Router::new()
        .route(
            "/simple/price",
            get(|| async { Json(json!({ "bitcoin": { "usd": 50000.12 } })) }),
        )
        .route(
            "/coins/markets",
            get(move || async move {
                tokio::time::sleep(delay).await;
                Json(json!([{ "id": "bitcoin", "image": "https://img/btc.png" }]))
            }),
        );
    serve_stub(router).await
}

async fn rate_limited_stub() -> String {
    async fn too_many() -> impl IntoResponse {
        (
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({ "status": { "error_message": "slow down" } })),
        )
    }
    let router = Router::new()
        .route("/simple/price", get(too_many))
        .route("/coins/markets", get(too_many));
    serve_stub(router).await
}

async fn create_asset(app: &TestApp, external_id: &str, name: &str, symbol: &str) -> Value {
    let (status, body) = app
        .send(
            Method::POST,
            "/api/v1/assets",
            Some(json!({ "externalId": external_id, "name": name, "symbol": symbol })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    body
}

#[tokio::test]
async fn latest_prices_empty_without_assets() {
    let app = build_test_app("http://127.0.0.1:9").await;

    let (status, body) = app
        .send(Method::GET, "/api/v1/crypto/latest-prices", None)
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn update_with_no_assets_does_not_call_provider() {
    // Nothing listens on port 9, so any provider call would fail with 502.
    let app = build_test_app("http://127.0.0.1:9").await;

    let (status, body) = app
        .send(Method::POST, "/api/v1/crypto/update-prices", None)
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["summary"]["assets"], 0);
    assert_eq!(body["summary"]["accepted"], 0);
}

#[tokio::test]
async fn create_asset_then_duplicate_conflicts() {
    let app = build_test_app("http://127.0.0.1:9").await;

    let created = create_asset(&app, " Bitcoin ", "Bitcoin", "BTC").await;
    assert_eq!(created["externalId"], "bitcoin");
    assert!(created["id"].as_str().is_some_and(|id| !id.is_empty()));

    let (status, body) = app
        .send(
            Method::POST,
            "/api/v1/assets",
            Some(json!({ "externalId": "bitcoin", "name": "Bitcoin", "symbol": "BTC" })),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 409);

    let (status, assets) = app.send(Method::GET, "/api/v1/assets", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(assets.as_array().unwrap().len(), 1);

    let uri = format!("/api/v1/assets/{}", created["id"].as_str().unwrap());
    let (status, fetched) = app.send(Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "Bitcoin");

    let (status, _) = app.send(Method::GET, "/api/v1/assets/unknown", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_asset_with_blank_name_is_bad_request() {
    let app = build_test_app("http://127.0.0.1:9").await;

    let (status, body) = app
        .send(
            Method::POST,
            "/api/v1/assets",
            Some(json!({ "externalId": "bitcoin", "name": "  ", "symbol": "BTC" })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
}

#[tokio::test]
async fn update_prices_records_once_per_day() {
    let base_url = coingecko_stub().await;
    let app = build_test_app(&base_url).await;

    create_asset(&app, "ethereum", "Ethereum", "ETH").await;
    create_asset(&app, "bitcoin", "Bitcoin", "BTC").await;
    create_asset(&app, "dogecoin", "Dogecoin", "DOGE").await;

    let (status, first) = app
        .send(Method::POST, "/api/v1/crypto/update-prices", None)
        .await;
    assert_eq!(status, StatusCode::OK, "{}", first);
    assert_eq!(first["message"], "Prices updated.");
    assert_eq!(
        first["summary"],
        json!({ "assets": 3, "accepted": 2, "rejected": 0, "missing": 1, "iconsUpdated": 2 })
    );

    let (status, second) = app
        .send(Method::POST, "/api/v1/crypto/update-prices", None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["summary"]["accepted"], 0);
    assert_eq!(second["summary"]["rejected"], 2);
    assert_eq!(second["summary"]["iconsUpdated"], 0);

    let (status, latest) = app
        .send(Method::GET, "/api/v1/crypto/latest-prices", None)
        .await;
    assert_eq!(status, StatusCode::OK);

    let latest = latest.as_array().unwrap();
    let names: Vec<&str> = latest.iter().map(|p| p["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Bitcoin", "Dogecoin", "Ethereum"]);

    assert_eq!(latest[0]["latestPrice"], "50000.12");
    assert_eq!(latest[0]["previousPrice"], Value::Null);
    assert_eq!(latest[0]["iconUrl"], "https://img/btc.png");
    assert!(latest[0]["lastUpdated"].is_string());

    assert_eq!(latest[1]["latestPrice"], Value::Null);
    assert_eq!(latest[1]["lastUpdated"], Value::Null);

    assert_eq!(latest[2]["latestPrice"], "3000.5");
}

#[tokio::test]
async fn provider_rate_limit_is_bad_gateway() {
    let base_url = rate_limited_stub().await;
    let app = build_test_app(&base_url).await;
    create_asset(&app, "bitcoin", "Bitcoin", "BTC").await;

    let (status, body) = app
        .send(Method::POST, "/api/v1/crypto/update-prices", None)
        .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["code"], 502);

    let (_, latest) = app
        .send(Method::GET, "/api/v1/crypto/latest-prices", None)
        .await;
    assert_eq!(latest[0]["latestPrice"], Value::Null);
}

#[tokio::test]
async fn request_timeout_does_not_cut_the_update_short() {
    let base_url = slow_markets_stub(Duration::from_millis(1000)).await;
    let app = build_test_app_with_timeout(&base_url, Duration::from_millis(300)).await;
    create_asset(&app, "bitcoin", "Bitcoin", "BTC").await;

    let (status, _) = app
        .send(Method::POST, "/api/v1/crypto/update-prices", None)
        .await;
    assert_eq!(status, StatusCode::REQUEST_TIMEOUT);

    let mut latest = Value::Null;
    for _ in 0..50 {
        tokio::time::sleep(Duration::from_millis(100)).await;
        let (_, body) = app
            .send(Method::GET, "/api/v1/crypto/latest-prices", None)
            .await;
        latest = body;
        if latest[0]["latestPrice"].is_string() {
            break;
        }
    }

    assert_eq!(latest[0]["latestPrice"], "50000.12");
    assert_eq!(latest[0]["iconUrl"], "https://img/btc.png");
}
