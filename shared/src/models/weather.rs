//! Weather data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Conditions at the time of the last fetch
///
/// Temperatures are Fahrenheit, humidity a percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentConditions {
    pub temperature: i32,
    pub feels_like: i32,
    pub humidity: i32,
    pub condition: String,
}

/// One day of forecast
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyForecast {
    /// Display label for the day ("Today", "Tomorrow", weekday names)
    pub day: String,
    pub high: i32,
    pub low: i32,
    pub condition: String,
    /// Chance of rain as a percentage
    pub precipitation: i32,
}

/// Static weather seed: the conditions and forecast a report is built from
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSeed {
    pub current: CurrentConditions,
    /// Ordered list, each entry one calendar day after the previous
    pub forecast: Vec<DailyForecast>,
}

/// A full weather report as served to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReport {
    pub location: String,
    pub current: CurrentConditions,
    pub forecast: Vec<DailyForecast>,
    pub last_updated: DateTime<Utc>,
}

/// Forecast-only response, independent of the report cache
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastResponse {
    pub location: String,
    pub forecast: Vec<DailyForecast>,
}
