//! Financial summary HTTP handlers

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;

use crate::AppState;

/// Monthly and all-time income/expense totals
pub async fn get_finance_summary(State(state): State<AppState>) -> impl IntoResponse {
    let summary = state
        .transactions
        .finance_summary(Utc::now().date_naive())
        .await;
    (StatusCode::OK, Json(summary))
}
