//! HTTP API integration tests
//!
//! Drives the full router over the embedded seed data with latency disabled.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::util::ServiceExt;

use farmsync_backend::config::{Config, ServerConfig, StoreConfig, WeatherConfig};
use farmsync_backend::seed::SeedData;
use farmsync_backend::{create_app, AppState};

fn test_config() -> Config {
    Config {
        environment: "test".to_string(),
        server: ServerConfig {
            port: 0,
            host: "127.0.0.1".to_string(),
        },
        store: StoreConfig {
            simulate_latency: false,
        },
        weather: WeatherConfig {
            default_location: "Farm Location".to_string(),
            cache_ttl_seconds: 3600,
        },
    }
}

fn test_app() -> (Router, SeedData) {
    let seed = SeedData::load().expect("seed data parses");
    let app = create_app(AppState::from_seed(seed.clone(), test_config()));
    (app, seed)
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn send_json(
    app: Router,
    method: &str,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn health_reports_status_and_version() {
    let (app, _) = test_app();
    let (status, body) = get_json(app, "/api/v1/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn list_farms_returns_seeded_records() {
    let (app, seed) = test_app();
    let (status, body) = get_json(app, "/api/v1/farms").await;

    assert_eq!(status, StatusCode::OK);
    let farms = body["farms"].as_array().unwrap();
    assert_eq!(farms.len(), seed.farms.len());
    assert_eq!(farms[0]["Id"], 1);
}

#[tokio::test]
async fn unknown_farm_is_404_with_structured_error() {
    let (app, _) = test_app();
    let (status, body) = get_json(app, "/api/v1/farms/999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
    assert_eq!(body["error"]["message"], "Farm not found");
}

#[tokio::test]
async fn create_farm_assigns_next_id() {
    let (app, seed) = test_app();
    let max_id = seed.farms.iter().map(|f| f.id).max().unwrap();

    let (status, body) = send_json(
        app,
        "POST",
        "/api/v1/farms",
        serde_json::json!({
            "name": "Cloverleaf Dairy",
            "location": "Madison, WI",
            "size": 95,
            "sizeUnit": "acres"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["Id"], max_id + 1);
    assert!(body["createdAt"].is_string());
}

#[tokio::test]
async fn toggle_flips_task_completion() {
    let (app, seed) = test_app();
    assert!(!seed.tasks[0].completed);

    let (status, body) = send_json(
        app,
        "POST",
        "/api/v1/tasks/1/complete",
        serde_json::json!({}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["completed"], true);
}

#[tokio::test]
async fn delete_returns_the_removed_record() {
    let (app, _) = test_app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/v1/crops/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["Id"], 1);

    // Same store, same router clone: the record is gone
    let (status, _) = get_json(app, "/api/v1/crops/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn crops_filter_by_farm_id() {
    let (app, seed) = test_app();
    let expected = seed.crops.iter().filter(|c| c.farm_id == 2).count();

    let (status, body) = get_json(app, "/api/v1/crops?farmId=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["crops"].as_array().unwrap().len(), expected);
}

#[tokio::test]
async fn task_board_partitions_the_seeded_tasks() {
    let (app, seed) = test_app();
    let (status, body) = get_json(app, "/api/v1/tasks/board").await;

    assert_eq!(status, StatusCode::OK);
    let total = ["overdue", "today", "upcoming", "completed"]
        .iter()
        .map(|bucket| body[bucket].as_array().unwrap().len())
        .sum::<usize>();
    assert_eq!(total, seed.tasks.len());
}

#[tokio::test]
async fn forecast_days_param_limits_entries() {
    let (app, _) = test_app();
    let (status, body) = get_json(app, "/api/v1/weather/forecast?days=2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["forecast"].as_array().unwrap().len(), 2);
    assert_eq!(body["location"], "Farm Location");
}

#[tokio::test]
async fn finance_summary_reflects_sign_convention() {
    let (app, seed) = test_app();
    let (status, body) = get_json(app, "/api/v1/finance/summary").await;

    assert_eq!(status, StatusCode::OK);
    for key in [
        "monthlyIncome",
        "monthlyExpenses",
        "monthlyNet",
        "totalIncome",
        "totalExpenses",
        "net",
    ] {
        assert!(body[key].is_string() || body[key].is_number(), "{key} missing");
    }
    assert!(!seed.transactions.is_empty());
}
