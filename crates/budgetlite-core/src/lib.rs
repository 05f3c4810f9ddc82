//! Core ledger processing and business logic
//!
//! [`Ledger`] owns the in-memory transaction collection. Every mutation
//! rewrites the whole collection through the configured storage; reports
//! are computed on demand from the current collection.

pub mod error;
pub mod models;
pub mod reports;
pub mod time;
pub mod types;

use budgetlite_storage::{StorageRef, TransactionRecord};
use std::path::Path;

pub use error::{CoreError, CoreResult, DefaultErrorLogger, ErrorContext, ErrorLogger, ErrorSeverity};
pub use models::{parse_amount, round_amount, Transaction, TransactionPatch, MAX_AMOUNT};
pub use reports::{CategoryReport, CategoryTotal, Summary};
pub use time::{format_date, parse_date, today, Month};
pub use types::TransactionKind;

/// In-memory transaction store backed by whole-file persistence
pub struct Ledger {
    storage: StorageRef,
    transactions: Vec<Transaction>,
}

impl Ledger {
    /// Load the ledger from storage.
    ///
    /// Never fails: unreadable storage is an empty ledger, and stored records
    /// that break a transaction invariant are dropped with a warning.
    pub fn open(storage: StorageRef) -> Self {
        let records = storage.load().unwrap_or_else(|e| {
            log::warn!(
                target: "budgetlite::ledger",
                "Could not load {}: {}, starting empty",
                storage.location(),
                e
            );
            Vec::new()
        });

        let transactions = records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match Transaction::try_from(record) {
                Ok(tx) => Some(tx),
                Err(e) => {
                    log::warn!(
                        target: "budgetlite::ledger",
                        "Dropping stored transaction #{}: {}",
                        index + 1,
                        e
                    );
                    None
                }
            })
            .collect::<Vec<_>>();

        log::info!(
            target: "budgetlite::ledger",
            "Loaded {} transactions from {}",
            transactions.len(),
            storage.location()
        );

        Self {
            storage,
            transactions,
        }
    }

    /// Create a ledger over an existing collection without reading storage
    pub fn with_transactions(storage: StorageRef, transactions: Vec<Transaction>) -> Self {
        Self {
            storage,
            transactions,
        }
    }

    /// Transactions in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Where the ledger is persisted
    pub fn location(&self) -> String {
        self.storage.location()
    }

    // ==================== Mutations ====================

    /// Append a transaction and save.
    ///
    /// On a save error the transaction stays in memory.
    pub fn add(&mut self, transaction: Transaction) -> CoreResult<()> {
        log::info!(target: "budgetlite::ledger", "Adding {}", transaction.summary());
        self.transactions.push(transaction);
        self.persist()
    }

    /// Change the fields set in `patch` on the transaction at `selector`
    /// (1-based position in the sorted view) and save.
    ///
    /// Returns the updated transaction. Invalid patch values leave the
    /// ledger untouched; a save error keeps the in-memory change.
    pub fn edit(&mut self, selector: usize, patch: TransactionPatch) -> CoreResult<Transaction> {
        let index = self.resolve(selector)?;
        self.transactions[index].apply(patch)?;

        let updated = self.transactions[index].clone();
        log::info!(
            target: "budgetlite::ledger",
            "Updated #{}: {}",
            selector,
            updated.summary()
        );
        self.persist()?;
        Ok(updated)
    }

    /// Remove the transaction at `selector` and save.
    ///
    /// Returns the removed transaction; a save error keeps the removal.
    pub fn delete(&mut self, selector: usize) -> CoreResult<Transaction> {
        let index = self.resolve(selector)?;
        let removed = self.transactions.remove(index);
        log::info!(
            target: "budgetlite::ledger",
            "Deleted #{}: {}",
            selector,
            removed.summary()
        );
        self.persist()?;
        Ok(removed)
    }

    /// Transaction at `selector` in the sorted view
    pub fn get(&self, selector: usize) -> CoreResult<&Transaction> {
        self.resolve(selector).map(|index| &self.transactions[index])
    }

    /// Map a 1-based sorted-view position to an index into the collection
    fn resolve(&self, selector: usize) -> CoreResult<usize> {
        let len = self.transactions.len();
        if selector == 0 || selector > len {
            return Err(CoreError::SelectorOutOfRange { selector, len });
        }
        Ok(reports::sorted_indices(&self.transactions)[selector - 1])
    }

    fn records(&self) -> Vec<TransactionRecord> {
        self.transactions.iter().map(Transaction::to_record).collect()
    }

    /// Write the whole collection to storage
    pub fn persist(&self) -> CoreResult<()> {
        self.storage
            .save(&self.records())
            .map_err(|source| CoreError::PersistFailed {
                location: self.storage.location(),
                source,
            })
    }

    // ==================== Reports ====================

    pub fn sorted(&self) -> Vec<&Transaction> {
        reports::sorted_view(&self.transactions)
    }

    pub fn summary(&self) -> Summary {
        reports::summary(&self.transactions)
    }

    pub fn by_month(&self, month: Month) -> Vec<&Transaction> {
        reports::by_month(&self.transactions, month)
    }

    pub fn category_totals(&self, kind: TransactionKind) -> CategoryReport {
        reports::category_totals(&self.transactions, kind)
    }

    /// Write the sorted view as CSV. Returns the number of rows written.
    pub fn export_csv(&self, path: &Path) -> CoreResult<usize> {
        let records: Vec<TransactionRecord> = self.sorted().into_iter().map(Transaction::to_record).collect();
        budgetlite_storage::export_csv(path, &records)
            .map_err(|source| CoreError::ExportFailed { source })?;
        Ok(records.len())
    }
}

// ==================== Tests ====================
