//! Transaction management HTTP handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::services::transaction::{CreateTransactionInput, UpdateTransactionInput};
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionListQuery {
    pub farm_id: Option<i64>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

/// List transactions, optionally scoped to a farm or a date range
pub async fn list_transactions(
    State(state): State<AppState>,
    Query(query): Query<TransactionListQuery>,
) -> impl IntoResponse {
    let transactions = match (query.start, query.end) {
        (Some(start), Some(end)) => state.transactions.get_by_date_range(start, end).await,
        _ => match query.farm_id {
            Some(farm_id) => state.transactions.get_transactions_by_farm(farm_id).await,
            None => state.transactions.get_transactions().await,
        },
    };
    (
        StatusCode::OK,
        Json(serde_json::json!({ "transactions": transactions })),
    )
}

/// Get a specific transaction
pub async fn get_transaction(
    State(state): State<AppState>,
    Path(transaction_id): Path<i64>,
) -> impl IntoResponse {
    match state.transactions.get_transaction(transaction_id).await {
        Ok(tx) => (StatusCode::OK, Json(tx)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Create a new transaction
pub async fn create_transaction(
    State(state): State<AppState>,
    Json(input): Json<CreateTransactionInput>,
) -> impl IntoResponse {
    let tx = state.transactions.create_transaction(input).await;
    (StatusCode::CREATED, Json(tx))
}

/// Update a transaction
pub async fn update_transaction(
    State(state): State<AppState>,
    Path(transaction_id): Path<i64>,
    Json(input): Json<UpdateTransactionInput>,
) -> impl IntoResponse {
    match state
        .transactions
        .update_transaction(transaction_id, input)
        .await
    {
        Ok(tx) => (StatusCode::OK, Json(tx)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Delete a transaction, returning the removed record
pub async fn delete_transaction(
    State(state): State<AppState>,
    Path(transaction_id): Path<i64>,
) -> impl IntoResponse {
    match state.transactions.delete_transaction(transaction_id).await {
        Ok(tx) => (StatusCode::OK, Json(tx)).into_response(),
        Err(e) => e.into_response(),
    }
}
