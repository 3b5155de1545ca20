//! Farm management HTTP handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::services::farm::{CreateFarmInput, UpdateFarmInput};
use crate::AppState;

/// List all farms
pub async fn list_farms(State(state): State<AppState>) -> impl IntoResponse {
    let farms = state.farms.get_farms().await;
    (StatusCode::OK, Json(serde_json::json!({ "farms": farms })))
}

/// Get a specific farm
pub async fn get_farm(
    State(state): State<AppState>,
    Path(farm_id): Path<i64>,
) -> impl IntoResponse {
    match state.farms.get_farm(farm_id).await {
        Ok(farm) => (StatusCode::OK, Json(farm)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Create a new farm
pub async fn create_farm(
    State(state): State<AppState>,
    Json(input): Json<CreateFarmInput>,
) -> impl IntoResponse {
    let farm = state.farms.create_farm(input).await;
    (StatusCode::CREATED, Json(farm))
}

/// Update a farm
pub async fn update_farm(
    State(state): State<AppState>,
    Path(farm_id): Path<i64>,
    Json(input): Json<UpdateFarmInput>,
) -> impl IntoResponse {
    match state.farms.update_farm(farm_id, input).await {
        Ok(farm) => (StatusCode::OK, Json(farm)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Delete a farm, returning the removed record
pub async fn delete_farm(
    State(state): State<AppState>,
    Path(farm_id): Path<i64>,
) -> impl IntoResponse {
    match state.farms.delete_farm(farm_id).await {
        Ok(farm) => (StatusCode::OK, Json(farm)).into_response(),
        Err(e) => e.into_response(),
    }
}
