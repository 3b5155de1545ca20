//! Financial transaction records

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single income or expense entry
///
/// `amount` is stored as an unsigned magnitude; the sign is derived from
/// `kind` only at display and aggregation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(rename = "Id")]
    pub id: i64,
    pub farm_id: i64,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub amount: Decimal,
    /// Spending or revenue category ("seeds", "equipment", ...), free-form
    pub category: String,
    pub date: NaiveDate,
    pub description: String,
}

impl Transaction {
    /// Amount with the sign implied by the transaction type applied.
    /// Expenses come back negated; the stored magnitude is untouched.
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }
}

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}
