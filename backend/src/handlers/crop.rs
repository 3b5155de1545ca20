//! Crop management HTTP handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Deserialize;

use shared::classify::{classify_crop, days_until_harvest};

use crate::services::crop::{CreateCropInput, UpdateCropInput};
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropListQuery {
    pub farm_id: Option<i64>,
}

/// List crops, optionally scoped to a farm
pub async fn list_crops(
    State(state): State<AppState>,
    Query(query): Query<CropListQuery>,
) -> impl IntoResponse {
    let crops = match query.farm_id {
        Some(farm_id) => state.crops.get_crops_by_farm(farm_id).await,
        None => state.crops.get_crops().await,
    };
    (StatusCode::OK, Json(serde_json::json!({ "crops": crops })))
}

/// Get a specific crop
pub async fn get_crop(
    State(state): State<AppState>,
    Path(crop_id): Path<i64>,
) -> impl IntoResponse {
    match state.crops.get_crop(crop_id).await {
        Ok(crop) => (StatusCode::OK, Json(crop)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Derived harvest status for a crop
pub async fn get_crop_status(
    State(state): State<AppState>,
    Path(crop_id): Path<i64>,
) -> impl IntoResponse {
    match state.crops.get_crop(crop_id).await {
        Ok(crop) => {
            let today = Utc::now().date_naive();
            let status = classify_crop(&crop, today);
            (
                StatusCode::OK,
                Json(serde_json::json!({
                    "cropId": crop.id,
                    "status": status,
                    "label": status.label(),
                    "daysUntilHarvest": days_until_harvest(&crop, today),
                })),
            )
                .into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// Create a new crop
pub async fn create_crop(
    State(state): State<AppState>,
    Json(input): Json<CreateCropInput>,
) -> impl IntoResponse {
    let crop = state.crops.create_crop(input).await;
    (StatusCode::CREATED, Json(crop))
}

/// Update a crop
pub async fn update_crop(
    State(state): State<AppState>,
    Path(crop_id): Path<i64>,
    Json(input): Json<UpdateCropInput>,
) -> impl IntoResponse {
    match state.crops.update_crop(crop_id, input).await {
        Ok(crop) => (StatusCode::OK, Json(crop)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Delete a crop, returning the removed record
pub async fn delete_crop(
    State(state): State<AppState>,
    Path(crop_id): Path<i64>,
) -> impl IntoResponse {
    match state.crops.delete_crop(crop_id).await {
        Ok(crop) => (StatusCode::OK, Json(crop)).into_response(),
        Err(e) => e.into_response(),
    }
}
