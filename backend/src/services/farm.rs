//! Farm store service

use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;

use shared::models::{Farm, SizeUnit};

use crate::error::AppResult;
use crate::services::store::{EntityStore, Latency, Record};

impl Record for Farm {
    fn id(&self) -> i64 {
        self.id
    }

    fn assign_id(&mut self, id: i64) {
        self.id = id;
    }
}

/// Farm CRUD over the in-memory store
#[derive(Clone)]
pub struct FarmService {
    store: EntityStore<Farm>,
}

/// Input for creating a farm
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFarmInput {
    pub name: String,
    pub location: String,
    pub size: Decimal,
    pub size_unit: SizeUnit,
}

/// Input for updating a farm
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFarmInput {
    pub name: Option<String>,
    pub location: Option<String>,
    pub size: Option<Decimal>,
    pub size_unit: Option<SizeUnit>,
}

impl FarmService {
    pub fn new(seed: Vec<Farm>, latency: Latency) -> Self {
        Self {
            store: EntityStore::new("Farm", seed, latency),
        }
    }

    /// Get all farms
    pub async fn get_farms(&self) -> Vec<Farm> {
        self.store.get_all().await
    }

    /// Get a specific farm
    pub async fn get_farm(&self, id: i64) -> AppResult<Farm> {
        self.store.get_by_id(id).await
    }

    /// Create a new farm; `created_at` is stamped server-side
    pub async fn create_farm(&self, input: CreateFarmInput) -> Farm {
        self.store
            .create(Farm {
                id: 0,
                name: input.name,
                location: input.location,
                size: input.size,
                size_unit: input.size_unit,
                created_at: Utc::now(),
            })
            .await
    }

    /// Update a farm, merging only the provided fields
    pub async fn update_farm(&self, id: i64, input: UpdateFarmInput) -> AppResult<Farm> {
        self.store
            .update_with(id, |farm| {
                if let Some(name) = input.name {
                    farm.name = name;
                }
                if let Some(location) = input.location {
                    farm.location = location;
                }
                if let Some(size) = input.size {
                    farm.size = size;
                }
                if let Some(size_unit) = input.size_unit {
                    farm.size_unit = size_unit;
                }
            })
            .await
    }

    /// Delete a farm, returning the removed record
    pub async fn delete_farm(&self, id: i64) -> AppResult<Farm> {
        self.store.delete(id).await
    }
}
