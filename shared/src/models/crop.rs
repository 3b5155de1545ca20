//! Crop records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A crop planted on a farm
///
/// `expected_harvest_date` is not required to fall after `planting_date`;
/// the store layer accepts whatever the caller supplies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Crop {
    #[serde(rename = "Id")]
    pub id: i64,
    /// Owning farm, resolved by linear lookup; never validated
    pub farm_id: i64,
    pub name: String,
    pub variety: String,
    pub planting_date: NaiveDate,
    pub expected_harvest_date: NaiveDate,
    /// Field or plot designation within the farm, free-form
    pub field: String,
    /// User-entered lifecycle stage ("planted", "growing", ...)
    pub status: String,
}
