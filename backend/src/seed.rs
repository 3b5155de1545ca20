//! Seed data embedded at compile time
//!
//! Each entity type's initial record set is a flat ordered JSON list; ids
//! are positive and dense but not required to be contiguous. The weather
//! seed is a single object with current conditions and an ordered forecast.

use anyhow::Context;
use serde::de::DeserializeOwned;
use shared::models::{Crop, Farm, Task, Transaction, WeatherSeed};

/// Initial record sets for every store plus the weather seed
#[derive(Debug, Clone)]
pub struct SeedData {
    pub farms: Vec<Farm>,
    pub crops: Vec<Crop>,
    pub tasks: Vec<Task>,
    pub transactions: Vec<Transaction>,
    pub weather: WeatherSeed,
}

impl SeedData {
    /// Parse the embedded seed files
    pub fn load() -> anyhow::Result<Self> {
        Ok(Self {
            farms: parse("farms", include_str!("../seeds/farms.json"))?,
            crops: parse("crops", include_str!("../seeds/crops.json"))?,
            tasks: parse("tasks", include_str!("../seeds/tasks.json"))?,
            transactions: parse("transactions", include_str!("../seeds/transactions.json"))?,
            weather: parse("weather", include_str!("../seeds/weather.json"))?,
        })
    }
}

fn parse<T: DeserializeOwned>(name: &str, raw: &str) -> anyhow::Result<T> {
    serde_json::from_str(raw).with_context(|| format!("invalid {name} seed data"))
}
