//! FarmSync - Farm Management Backend
//!
//! CRUD services for farms, crops, tasks, and finances, plus cached weather
//! reports, backed by in-memory stores seeded from static data.

use std::{sync::Arc, time::Duration};

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod seed;
pub mod services;

pub use crate::config::Config;

use seed::SeedData;
use services::store::Latency;
use services::{CropService, FarmService, TaskService, TransactionService, WeatherService};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub farms: FarmService,
    pub crops: CropService,
    pub tasks: TaskService,
    pub transactions: TransactionService,
    pub weather: WeatherService,
    pub config: Arc<Config>,
}

impl AppState {
    /// Build every store from seed data
    pub fn from_seed(seed: SeedData, config: Config) -> Self {
        let latency = Latency::from_flag(config.store.simulate_latency);
        let cache_ttl = Duration::from_secs(config.weather.cache_ttl_seconds);
        Self {
            farms: FarmService::new(seed.farms, latency),
            crops: CropService::new(seed.crops, latency),
            tasks: TaskService::new(seed.tasks, latency),
            transactions: TransactionService::new(seed.transactions, latency),
            weather: WeatherService::with_ttl(
                seed.weather,
                cache_ttl,
                config.store.simulate_latency,
            ),
            config: Arc::new(config),
        }
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "FarmSync Farm Management API v1.0"
}

/// Liveness probe
async fn health() -> &'static str {
    "OK"
}
