use std::sync::Arc;

use anyhow::Context;
use axum::{
    http::{HeaderValue, StatusCode},
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::{
    config::Config,
    main_lib::AppState,
    models::{Asset, LatestPriceResponse, NewAsset, UpdatePricesResponse, UpdateSummary},
};

pub mod assets;
pub mod crypto;
pub mod health;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthz,
        health::readyz,
        crypto::update_prices,
        crypto::get_latest_prices,
        assets::list_assets,
        assets::get_asset,
        assets::create_asset
    ),
    components(schemas(Asset, NewAsset, LatestPriceResponse, UpdatePricesResponse, UpdateSummary)),
    tags((name = "price-tracker"))
)]
pub struct ApiDoc;

pub fn app_router(state: Arc<AppState>, config: &Config) -> anyhow::Result<Router> {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .map(|o| o.parse().with_context(|| format!("Invalid CORS origin: {}", o)))
            .collect::<anyhow::Result<Vec<HeaderValue>>>()?;
        CorsLayer::new().allow_origin(origins)
    };

    let openapi = ApiDoc::openapi();

    let api = Router::new()
        .merge(health::router())
        .merge(crypto::router())
        .merge(assets::router());

    Ok(Router::new()
        .nest("/api/v1", api)
        .route(
            "/openapi.json",
            get(move || {
                let doc = openapi.clone();
                async move { Json(doc) }
            }),
        )
        .with_state(state)
        .layer(cors)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid)))
}
