use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use price_tracker_core::errors::Error as CoreError;

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{LatestPriceResponse, UpdatePricesResponse},
};

/// Runs one price update cycle.
///
/// The cycle runs on its own task so a request timeout or a dropped
/// connection cannot stop it between the icon refresh and the price writes.
#[utoipa::path(
    post,
    path = "/api/v1/crypto/update-prices",
    responses(
        (status = 200, body = UpdatePricesResponse),
        (status = 502, description = "Price source unavailable")
    )
)]
pub async fn update_prices(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<UpdatePricesResponse>> {
    let price_service = state.price_service.clone();
    let summary = tokio::spawn(async move { price_service.update_prices().await })
        .await
        .map_err(|e| CoreError::Unexpected(format!("Price update task failed: {}", e)))??;
    Ok(Json(UpdatePricesResponse {
        message: "Prices updated.".to_string(),
        summary: summary.into(),
    }))
}

/// Latest and previous recorded price of every asset.
#[utoipa::path(
    get,
    path = "/api/v1/crypto/latest-prices",
    responses((status = 200, body = [LatestPriceResponse]))
)]
pub async fn get_latest_prices(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<LatestPriceResponse>>> {
    let latest = state.price_service.get_latest_prices()?;
    Ok(Json(latest.into_iter().map(LatestPriceResponse::from).collect()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/crypto/update-prices", post(update_prices))
        .route("/crypto/latest-prices", get(get_latest_prices))
}
