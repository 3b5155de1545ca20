//! Farm records

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A farm property under management
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Farm {
    /// Record id, assigned by the store and immutable afterwards
    #[serde(rename = "Id")]
    pub id: i64,
    pub name: String,
    pub location: String,
    pub size: Decimal,
    pub size_unit: SizeUnit,
    pub created_at: DateTime<Utc>,
}

/// Unit a farm's area is recorded in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeUnit {
    Acres,
    Hectares,
}

impl SizeUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            SizeUnit::Acres => "acres",
            SizeUnit::Hectares => "hectares",
        }
    }
}
