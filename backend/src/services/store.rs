//! Generic in-memory entity store
//!
//! Each store owns its backing list behind an `RwLock` and is handed to
//! consumers by cheap clone. The simulated network delay runs before the
//! lock is taken, so every read-modify-write is a single uninterrupted
//! critical section: id computation and insertion cannot interleave.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use crate::error::{AppError, AppResult};

/// A record that can live in an [`EntityStore`]
pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> i64;

    /// Called exactly once, when the store assigns the id at creation
    fn assign_id(&mut self, id: i64);

    /// Owning farm, for stores that support farm-scoped queries
    fn farm_id(&self) -> Option<i64> {
        None
    }
}

/// Per-operation simulated latency
///
/// The values mirror the timing profile of the record service this store
/// stands in for. `none()` turns the delays off for tests and deployments
/// that have no loading states to demonstrate.
#[derive(Debug, Clone, Copy)]
pub struct Latency {
    pub get_all: Duration,
    pub get_by_id: Duration,
    pub get_by_farm_id: Duration,
    pub create: Duration,
    pub update: Duration,
    pub delete: Duration,
    pub toggle: Duration,
    pub date_range: Duration,
}

impl Latency {
    pub fn simulated() -> Self {
        Self {
            get_all: Duration::from_millis(300),
            get_by_id: Duration::from_millis(200),
            get_by_farm_id: Duration::from_millis(250),
            create: Duration::from_millis(400),
            update: Duration::from_millis(300),
            delete: Duration::from_millis(250),
            toggle: Duration::from_millis(200),
            date_range: Duration::from_millis(300),
        }
    }

    pub fn none() -> Self {
        Self {
            get_all: Duration::ZERO,
            get_by_id: Duration::ZERO,
            get_by_farm_id: Duration::ZERO,
            create: Duration::ZERO,
            update: Duration::ZERO,
            delete: Duration::ZERO,
            toggle: Duration::ZERO,
            date_range: Duration::ZERO,
        }
    }

    pub fn from_flag(simulate: bool) -> Self {
        if simulate {
            Self::simulated()
        } else {
            Self::none()
        }
    }
}

/// In-memory store for one entity type
#[derive(Clone)]
pub struct EntityStore<T: Record> {
    entity: &'static str,
    records: Arc<RwLock<Vec<T>>>,
    latency: Latency,
}

impl<T: Record> EntityStore<T> {
    pub fn new(entity: &'static str, seed: Vec<T>, latency: Latency) -> Self {
        Self {
            entity,
            records: Arc::new(RwLock::new(seed)),
            latency,
        }
    }

    pub fn latency(&self) -> &Latency {
        &self.latency
    }

    async fn simulate(delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    fn not_found(&self) -> AppError {
        AppError::NotFound(self.entity.to_string())
    }

    /// All records, insertion order preserved
    pub async fn get_all(&self) -> Vec<T> {
        Self::simulate(self.latency.get_all).await;
        self.records.read().await.clone()
    }

    /// The record with the given id
    pub async fn get_by_id(&self, id: i64) -> AppResult<T> {
        Self::simulate(self.latency.get_by_id).await;
        self.records
            .read()
            .await
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or_else(|| self.not_found())
    }

    /// Records owned by the given farm
    pub async fn get_by_farm_id(&self, farm_id: i64) -> Vec<T> {
        Self::simulate(self.latency.get_by_farm_id).await;
        self.records
            .read()
            .await
            .iter()
            .filter(|r| r.farm_id() == Some(farm_id))
            .cloned()
            .collect()
    }

    /// Records matching a predicate, with a caller-chosen delay
    pub(crate) async fn filter_with(&self, delay: Duration, keep: impl Fn(&T) -> bool) -> Vec<T> {
        Self::simulate(delay).await;
        self.records
            .read()
            .await
            .iter()
            .filter(|&r| keep(r))
            .cloned()
            .collect()
    }

    /// Append `record` with a freshly assigned id: max(existing ids) + 1,
    /// or 1 for an empty store. A deleted maximum id is reused by the next
    /// create.
    pub async fn create(&self, mut record: T) -> T {
        Self::simulate(self.latency.create).await;
        let mut records = self.records.write().await;
        let next_id = records.iter().map(Record::id).max().unwrap_or(0) + 1;
        record.assign_id(next_id);
        records.push(record.clone());
        record
    }

    /// Merge changes onto an existing record via `apply`; fields the closure
    /// leaves alone are preserved
    pub async fn update_with(&self, id: i64, apply: impl FnOnce(&mut T)) -> AppResult<T> {
        self.mutate_with(self.latency.update, id, apply).await
    }

    /// Like [`update_with`](Self::update_with) with a caller-chosen delay
    pub(crate) async fn mutate_with(
        &self,
        delay: Duration,
        id: i64,
        apply: impl FnOnce(&mut T),
    ) -> AppResult<T> {
        Self::simulate(delay).await;
        let mut records = self.records.write().await;
        let record = records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| self.not_found())?;
        apply(record);
        Ok(record.clone())
    }

    /// Remove and return the record with the given id
    pub async fn delete(&self, id: i64) -> AppResult<T> {
        Self::simulate(self.latency.delete).await;
        let mut records = self.records.write().await;
        let index = records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| self.not_found())?;
        Ok(records.remove(index))
    }
}
