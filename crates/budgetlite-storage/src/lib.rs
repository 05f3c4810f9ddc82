//! Transaction persistence for budgetlite
//!
//! The data file is a single JSON array rewritten in full on every save.
//! Reading is forgiving: a missing, blank or malformed file is an empty
//! ledger, and array elements that do not have the record shape are skipped.

use std::path::{Path, PathBuf};
use std::sync::Arc;

pub mod error;
pub mod export;
pub mod types;

pub use error::{StorageError, StorageResult};
pub use export::{export_csv, write_csv};
pub use types::{TransactionRecord, CSV_HEADER};

// ==================== Storage Trait ====================

/// Storage reference type
pub type StorageRef = Arc<dyn TransactionStorage>;

/// Whole-collection persistence for transaction records
pub trait TransactionStorage: Send + Sync {
    /// Read every stored record. Unreadable state yields an empty list.
    fn load(&self) -> StorageResult<Vec<TransactionRecord>>;

    /// Replace the stored collection with `records`
    fn save(&self, records: &[TransactionRecord]) -> StorageResult<()>;

    /// Human-readable location, for messages and logs
    fn location(&self) -> String;
}

// ==================== JSON File Storage ====================

/// JSON array file on the local filesystem
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
    backup: bool,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            backup: false,
        }
    }

    /// Copy the previous file to `<path>.bak` before each save
    pub fn with_backup(mut self, backup: bool) -> Self {
        self.backup = backup;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn backup_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".bak");
        PathBuf::from(name)
    }

    /// Split a parsed document into records, dropping elements of the wrong shape
    fn records_from_value(&self, value: serde_json::Value) -> Vec<TransactionRecord> {
        let items = match value {
            serde_json::Value::Array(items) => items,
            other => {
                log::warn!(
                    target: "budgetlite::storage",
                    "{} does not hold a JSON array (found {}), starting empty",
                    self.path.display(),
                    json_kind(&other)
                );
                return Vec::new();
            }
        };

        let total = items.len();
        let records: Vec<TransactionRecord> = items
            .into_iter()
            .enumerate()
            .filter_map(|(index, item)| match serde_json::from_value(item) {
                Ok(record) => Some(record),
                Err(e) => {
                    log::warn!(
                        target: "budgetlite::storage",
                        "Skipping entry #{} in {}: {}",
                        index + 1,
                        self.path.display(),
                        e
                    );
                    None
                }
            })
            .collect();

        log::debug!(
            target: "budgetlite::storage",
            "Read {} of {} entries from {}",
            records.len(),
            total,
            self.path.display()
        );
        records
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

impl TransactionStorage for JsonFileStorage {
    fn load(&self) -> StorageResult<Vec<TransactionRecord>> {
        if !self.path.exists() {
            log::debug!(
                target: "budgetlite::storage",
                "No data file at {}, starting empty",
                self.path.display()
            );
            return Ok(Vec::new());
        }

        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                log::warn!(
                    target: "budgetlite::storage",
                    "Could not read {}: {}, starting empty",
                    self.path.display(),
                    e
                );
                return Ok(Vec::new());
            }
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        match serde_json::from_str::<serde_json::Value>(&content) {
            Ok(value) => Ok(self.records_from_value(value)),
            Err(e) => {
                log::warn!(
                    target: "budgetlite::storage",
                    "{} is not valid JSON ({}), starting empty",
                    self.path.display(),
                    e
                );
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, records: &[TransactionRecord]) -> StorageResult<()> {
        let content = serde_json::to_string_pretty(records)?;

        if self.backup && self.path.exists() {
            let backup_path = self.backup_path();
            std::fs::copy(&self.path, &backup_path).map_err(|source| StorageError::Backup {
                path: backup_path.display().to_string(),
                source,
            })?;
        }

        std::fs::write(&self.path, content).map_err(|source| StorageError::Write {
            path: self.path.display().to_string(),
            source,
        })?;

        log::debug!(
            target: "budgetlite::storage",
            "Wrote {} transactions to {}",
            records.len(),
            self.path.display()
        );
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

// ==================== Tests ====================
