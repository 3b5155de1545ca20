//! Weather HTTP handlers

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::services::weather::DEFAULT_FORECAST_DAYS;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CurrentWeatherQuery {
    pub location: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ForecastQuery {
    pub location: Option<String>,
    pub days: Option<usize>,
}

/// Current conditions plus forecast, served from the report cache
pub async fn get_current_weather(
    State(state): State<AppState>,
    Query(query): Query<CurrentWeatherQuery>,
) -> impl IntoResponse {
    let location = query
        .location
        .unwrap_or_else(|| state.config.weather.default_location.clone());
    let report = state.weather.current(&location).await;
    (StatusCode::OK, Json(report))
}

/// Forecast for the coming days
pub async fn get_weather_forecast(
    State(state): State<AppState>,
    Query(query): Query<ForecastQuery>,
) -> impl IntoResponse {
    let location = query
        .location
        .unwrap_or_else(|| state.config.weather.default_location.clone());
    let days = query.days.unwrap_or(DEFAULT_FORECAST_DAYS);
    let forecast = state.weather.forecast(&location, days).await;
    (StatusCode::OK, Json(forecast))
}
