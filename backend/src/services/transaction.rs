//! Transaction store service and financial aggregation

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use shared::finance::FinanceSummary;
use shared::models::{Transaction, TransactionType};

use crate::error::AppResult;
use crate::services::store::{EntityStore, Latency, Record};

impl Record for Transaction {
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

/// Transaction CRUD over the in-memory store
#[derive(Clone)]
pub struct TransactionService {
    store: EntityStore<Transaction>,
}

/// Input for creating a transaction
///
/// `amount` is an unsigned magnitude; the sign lives in `type`. A missing
/// `date` defaults to today.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionInput {
    pub farm_id: i64,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub amount: Decimal,
    pub category: String,
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub description: String,
}

/// Input for updating a transaction
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTransactionInput {
    pub farm_id: Option<i64>,
    #[serde(rename = "type")]
    pub kind: Option<TransactionType>,
    pub amount: Option<Decimal>,
    pub category: Option<String>,
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
}

impl TransactionService {
    pub fn new(seed: Vec<Transaction>, latency: Latency) -> Self {
        Self {
            store: EntityStore::new("Transaction", seed, latency),
        }
    }

    /// Get all transactions
    pub async fn get_transactions(&self) -> Vec<Transaction> {
        self.store.get_all().await
    }

    /// Get a specific transaction
    pub async fn get_transaction(&self, id: i64) -> AppResult<Transaction> {
        self.store.get_by_id(id).await
    }

    /// Get the transactions recorded against one farm
    pub async fn get_transactions_by_farm(&self, farm_id: i64) -> Vec<Transaction> {
        self.store.get_by_farm_id(farm_id).await
    }

    /// Get the transactions dated inside `[start, end]`, both ends inclusive
    pub async fn get_by_date_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<Transaction> {
        let delay = self.store.latency().date_range;
        self.store
            .filter_with(delay, |tx| tx.date >= start && tx.date <= end)
            .await
    }

    /// Create a new transaction
    pub async fn create_transaction(&self, input: CreateTransactionInput) -> Transaction {
        self.store
            .create(Transaction {
                id: 0,
                farm_id: input.farm_id,
                kind: input.kind,
                amount: input.amount,
                category: input.category,
                date: input.date.unwrap_or_else(|| Utc::now().date_naive()),
                description: input.description,
            })
            .await
    }

    /// Update a transaction, merging only the provided fields
    pub async fn update_transaction(
        &self,
        id: i64,
        input: UpdateTransactionInput,
    ) -> AppResult<Transaction> {
        self.store
            .update_with(id, |tx| {
                if let Some(farm_id) = input.farm_id {
                    tx.farm_id = farm_id;
                }
                if let Some(kind) = input.kind {
                    tx.kind = kind;
                }
                if let Some(amount) = input.amount {
                    tx.amount = amount;
                }
                if let Some(category) = input.category {
                    tx.category = category;
                }
                if let Some(date) = input.date {
                    tx.date = date;
                }
                if let Some(description) = input.description {
                    tx.description = description;
                }
            })
            .await
    }

    /// Delete a transaction, returning the removed record
    pub async fn delete_transaction(&self, id: i64) -> AppResult<Transaction> {
        self.store.delete(id).await
    }

    /// Monthly and all-time totals relative to `today`
    pub async fn finance_summary(&self, today: NaiveDate) -> FinanceSummary {
        let transactions = self.store.get_all().await;
        FinanceSummary::compute(&transactions, today)
    }
}
