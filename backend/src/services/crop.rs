//! Crop store service

use chrono::NaiveDate;
use serde::Deserialize;

use shared::models::Crop;

use crate::error::AppResult;
use crate::services::store::{EntityStore, Latency, Record};

impl Record for Crop {
    fn id(&self) -> i64 {
        self.id
    }

    fn assign_id(&mut self, id: i64) {
        self.id = id;
    }

    fn farm_id(&self) -> Option<i64> {
        Some(self.farm_id)
    }
}

/// Crop CRUD over the in-memory store
#[derive(Clone)]
pub struct CropService {
    store: EntityStore<Crop>,
}

/// Input for creating a crop
///
/// `farm_id` is taken as given; the store never checks it against the farm
/// list, and the harvest date is not required to follow the planting date.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCropInput {
    pub farm_id: i64,
    pub name: String,
    pub variety: String,
    pub planting_date: NaiveDate,
    pub expected_harvest_date: NaiveDate,
    pub field: String,
    pub status: String,
}

/// Input for updating a crop
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCropInput {
    pub farm_id: Option<i64>,
    pub name: Option<String>,
    pub variety: Option<String>,
    pub planting_date: Option<NaiveDate>,
    pub expected_harvest_date: Option<NaiveDate>,
    pub field: Option<String>,
    pub status: Option<String>,
}

impl CropService {
    pub fn new(seed: Vec<Crop>, latency: Latency) -> Self {
        Self {
            store: EntityStore::new("Crop", seed, latency),
        }
    }

    /// Get all crops
    pub async fn get_crops(&self) -> Vec<Crop> {
        self.store.get_all().await
    }

    /// Get a specific crop
    pub async fn get_crop(&self, id: i64) -> AppResult<Crop> {
        self.store.get_by_id(id).await
    }

    /// Get the crops planted on one farm
    pub async fn get_crops_by_farm(&self, farm_id: i64) -> Vec<Crop> {
        self.store.get_by_farm_id(farm_id).await
    }

    /// Create a new crop
    pub async fn create_crop(&self, input: CreateCropInput) -> Crop {
        self.store
            .create(Crop {
                id: 0,
                farm_id: input.farm_id,
                name: input.name,
                variety: input.variety,
                planting_date: input.planting_date,
                expected_harvest_date: input.expected_harvest_date,
                field: input.field,
                status: input.status,
            })
            .await
    }

    /// Update a crop, merging only the provided fields
    pub async fn update_crop(&self, id: i64, input: UpdateCropInput) -> AppResult<Crop> {
        self.store
            .update_with(id, |crop| {
                if let Some(farm_id) = input.farm_id {
                    crop.farm_id = farm_id;
                }
                if let Some(name) = input.name {
                    crop.name = name;
                }
                if let Some(variety) = input.variety {
                    crop.variety = variety;
                }
                if let Some(planting_date) = input.planting_date {
                    crop.planting_date = planting_date;
                }
                if let Some(expected_harvest_date) = input.expected_harvest_date {
                    crop.expected_harvest_date = expected_harvest_date;
                }
                if let Some(field) = input.field {
                    crop.field = field;
                }
                if let Some(status) = input.status {
                    crop.status = status;
                }
            })
            .await
    }

    /// Delete a crop, returning the removed record
    pub async fn delete_crop(&self, id: i64) -> AppResult<Crop> {
        self.store.delete(id).await
    }
}
