//! Core data models for the ledger

use budgetlite_storage::TransactionRecord;
use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};
use crate::time::{format_date, parse_date};
use crate::types::TransactionKind;

/// Fractional digits kept on every amount
pub const AMOUNT_SCALE: u32 = 2;

/// Largest accepted amount (one billion).
///
/// Keeps report sums far from `Decimal` overflow, and keeps every stored
/// amount within the digits a JSON `f64` number carries exactly.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Round to two decimals, halves away from zero (`12.505` -> `12.51`).
pub fn round_amount(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(AMOUNT_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Parse user text into a positive, rounded amount.
///
/// Plain (`12.50`) and scientific (`1.25e1`) notation are accepted.
pub fn parse_amount(input: &str) -> CoreResult<Decimal> {
    let trimmed = input.trim();
    let amount = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| CoreError::validation("amount", format!("{:?} is not a number", input)))?;
    positive_amount(amount)
}

fn positive_amount(amount: Decimal) -> CoreResult<Decimal> {
    let rounded = round_amount(amount);
    if rounded <= Decimal::ZERO {
        return Err(CoreError::validation("amount", "must be greater than 0"));
    }
    if rounded > MAX_AMOUNT {
        return Err(CoreError::validation(
            "amount",
            format!("must not be more than {}", MAX_AMOUNT),
        ));
    }
    Ok(rounded)
}

fn required_text(field: &str, value: &str) -> CoreResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::validation(field, "must not be blank"));
    }
    Ok(trimmed.to_string())
}

/// One income or expense entry.
///
/// Fields are only reachable through constructors that enforce the
/// invariants: positive two-decimal amount, non-blank trimmed labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    date: NaiveDate,
    #[serde(rename = "type")]
    kind: TransactionKind,
    category: String,
    description: String,
    amount: Decimal,
}

impl Transaction {
    pub fn new(
        date: NaiveDate,
        kind: TransactionKind,
        category: &str,
        description: &str,
        amount: Decimal,
    ) -> CoreResult<Self> {
        Ok(Self {
            date,
            kind,
            category: required_text("category", category)?,
            description: required_text("description", description)?,
            amount: positive_amount(amount)?,
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Replace the fields set in `patch`. Nothing changes if any new value is invalid.
    pub fn apply(&mut self, patch: TransactionPatch) -> CoreResult<()> {
        let updated = Transaction::new(
            patch.date.unwrap_or(self.date),
            patch.kind.unwrap_or(self.kind),
            patch.category.as_deref().unwrap_or(&self.category),
            patch.description.as_deref().unwrap_or(&self.description),
            patch.amount.unwrap_or(self.amount),
        )?;
        *self = updated;
        Ok(())
    }

    /// Convert to the on-disk record shape
    pub fn to_record(&self) -> TransactionRecord {
        TransactionRecord {
            date: format_date(self.date),
            kind: self.kind.to_string(),
            category: self.category.clone(),
            description: self.description.clone(),
            amount: self.amount,
        }
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        format!("{} - {}", format_date(self.date), self.description)
    }
}

impl TryFrom<TransactionRecord> for Transaction {
    type Error = CoreError;

    fn try_from(record: TransactionRecord) -> Result<Self, Self::Error> {
        let kind = record
            .kind
            .parse::<TransactionKind>()
            .map_err(|e| CoreError::validation("type", e))?;
        Transaction::new(
            parse_date(&record.date)?,
            kind,
            &record.category,
            &record.description,
            record.amount,
        )
    }
}

/// Field changes for an edit; `None` keeps the current value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionPatch {
    pub date: Option<NaiveDate>,
    pub kind: Option<TransactionKind>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub amount: Option<Decimal>,
}

impl TransactionPatch {
    /// Check if the patch changes nothing
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.kind.is_none()
            && self.category.is_none()
            && self.description.is_none()
            && self.amount.is_none()
    }
}
