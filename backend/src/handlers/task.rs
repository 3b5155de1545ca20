//! Task management HTTP handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Deserialize;

use shared::classify::TaskBoard;

use crate::services::task::{CreateTaskInput, UpdateTaskInput};
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskListQuery {
    pub farm_id: Option<i64>,
}

/// List tasks, optionally scoped to a farm
pub async fn list_tasks(
    State(state): State<AppState>,
    Query(query): Query<TaskListQuery>,
) -> impl IntoResponse {
    let tasks = match query.farm_id {
        Some(farm_id) => state.tasks.get_tasks_by_farm(farm_id).await,
        None => state.tasks.get_tasks().await,
    };
    (StatusCode::OK, Json(serde_json::json!({ "tasks": tasks })))
}

/// Get a specific task
pub async fn get_task(
    State(state): State<AppState>,
    Path(task_id): Path<i64>,
) -> impl IntoResponse {
    match state.tasks.get_task(task_id).await {
        Ok(task) => (StatusCode::OK, Json(task)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// All tasks grouped into board columns relative to today
pub async fn get_task_board(State(state): State<AppState>) -> impl IntoResponse {
    let tasks = state.tasks.get_tasks().await;
    let board = TaskBoard::group(tasks, Utc::now().date_naive());
    (StatusCode::OK, Json(board))
}

/// Create a new task
pub async fn create_task(
    State(state): State<AppState>,
    Json(input): Json<CreateTaskInput>,
) -> impl IntoResponse {
    let task = state.tasks.create_task(input).await;
    (StatusCode::CREATED, Json(task))
}

/// Update a task
pub async fn update_task(
    State(state): State<AppState>,
    Path(task_id): Path<i64>,
    Json(input): Json<UpdateTaskInput>,
) -> impl IntoResponse {
    match state.tasks.update_task(task_id, input).await {
        Ok(task) => (StatusCode::OK, Json(task)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Flip a task's completed flag
pub async fn toggle_task_complete(
    State(state): State<AppState>,
    Path(task_id): Path<i64>,
) -> impl IntoResponse {
    match state.tasks.toggle_complete(task_id).await {
        Ok(task) => (StatusCode::OK, Json(task)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Delete a task, returning the removed record
pub async fn delete_task(
    State(state): State<AppState>,
    Path(task_id): Path<i64>,
) -> impl IntoResponse {
    match state.tasks.delete_task(task_id).await {
        Ok(task) => (StatusCode::OK, Json(task)).into_response(),
        Err(e) => e.into_response(),
    }
}
