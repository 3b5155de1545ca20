//! Task store service

use chrono::NaiveDate;
use serde::Deserialize;

use shared::models::{Task, TaskPriority};

use crate::error::AppResult;
use crate::services::store::{EntityStore, Latency, Record};

impl Record for Task {
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

/// Task CRUD over the in-memory store, plus completion toggling
#[derive(Clone)]
pub struct TaskService {
    store: EntityStore<Task>,
}

/// Input for creating a task
///
/// New tasks always start incomplete, whatever the caller sends.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskInput {
    pub farm_id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub due_date: NaiveDate,
    pub priority: TaskPriority,
    pub category: String,
}

/// Input for updating a task
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskInput {
    pub farm_id: Option<i64>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub priority: Option<TaskPriority>,
    pub category: Option<String>,
    pub completed: Option<bool>,
}

impl TaskService {
    pub fn new(seed: Vec<Task>, latency: Latency) -> Self {
        Self {
            store: EntityStore::new("Task", seed, latency),
        }
    }

    /// Get all tasks
    pub async fn get_tasks(&self) -> Vec<Task> {
        self.store.get_all().await
    }

    /// Get a specific task
    pub async fn get_task(&self, id: i64) -> AppResult<Task> {
        self.store.get_by_id(id).await
    }

    /// Get the tasks scheduled for one farm
    pub async fn get_tasks_by_farm(&self, farm_id: i64) -> Vec<Task> {
        self.store.get_by_farm_id(farm_id).await
    }

    /// Create a new task
    pub async fn create_task(&self, input: CreateTaskInput) -> Task {
        self.store
            .create(Task {
                id: 0,
                farm_id: input.farm_id,
                title: input.title,
                description: input.description,
                due_date: input.due_date,
                priority: input.priority,
                category: input.category,
                completed: false,
            })
            .await
    }

    /// Update a task, merging only the provided fields
    pub async fn update_task(&self, id: i64, input: UpdateTaskInput) -> AppResult<Task> {
        self.store
            .update_with(id, |task| {
                if let Some(farm_id) = input.farm_id {
                    task.farm_id = farm_id;
                }
                if let Some(title) = input.title {
                    task.title = title;
                }
                if let Some(description) = input.description {
                    task.description = description;
                }
                if let Some(due_date) = input.due_date {
                    task.due_date = due_date;
                }
                if let Some(priority) = input.priority {
                    task.priority = priority;
                }
                if let Some(category) = input.category {
                    task.category = category;
                }
                if let Some(completed) = input.completed {
                    task.completed = completed;
                }
            })
            .await
    }

    /// Flip a task's completed flag
    pub async fn toggle_complete(&self, id: i64) -> AppResult<Task> {
        let delay = self.store.latency().toggle;
        self.store
            .mutate_with(delay, id, |task| task.completed = !task.completed)
            .await
    }

    /// Delete a task, returning the removed record
    pub async fn delete_task(&self, id: i64) -> AppResult<Task> {
        self.store.delete(id).await
    }
}
