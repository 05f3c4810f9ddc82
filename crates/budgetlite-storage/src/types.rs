//! On-disk record shape

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One transaction as it appears in the data file and the CSV export.
///
/// Field order is the CSV column order. Values are carried as-is; the
/// core validates them before they enter the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Date in `YYYY-MM-DD` form
    pub date: String,
    /// `income` or `expense`
    #[serde(rename = "type")]
    pub kind: String,
    pub category: String,
    pub description: String,
    /// Written as a plain JSON/CSV number
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

/// Column names of the CSV export, in order
pub const CSV_HEADER: [&str; 5] = ["date", "type", "category", "description", "amount"];
