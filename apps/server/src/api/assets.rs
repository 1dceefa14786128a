use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{Asset, NewAsset},
};

#[utoipa::path(get, path = "/api/v1/assets", responses((status = 200, body = [Asset])))]
pub async fn list_assets(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Asset>>> {
    let assets = state.asset_service.get_assets()?;
    Ok(Json(assets.into_iter().map(Asset::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/v1/assets/{id}",
    params(("id" = String, Path, description = "Asset id")),
    responses((status = 200, body = Asset), (status = 404, description = "Unknown asset"))
)]
pub async fn get_asset(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Asset>> {
    let asset = state.asset_service.get_asset_by_id(&id)?;
    Ok(Json(Asset::from(asset)))
}

#[utoipa::path(
    post,
    path = "/api/v1/assets",
    request_body = NewAsset,
    responses(
        (status = 201, body = Asset),
        (status = 400, description = "Missing or invalid field"),
        (status = 409, description = "Asset already tracked")
    )
)]
pub async fn create_asset(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewAsset>,
) -> ApiResult<(StatusCode, Json<Asset>)> {
    let created = state.asset_service.create_asset(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(Asset::from(created))))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/assets", get(list_assets).post(create_asset))
        .route("/assets/{id}", get(get_asset))
}
