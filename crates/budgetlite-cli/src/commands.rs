//! One-shot commands: print a listing or report and return
//!
//! Each command renders either the plain-text layout used by the menu or
//! pretty JSON of the underlying report type.

use budgetlite_core::{Ledger, Month, TransactionKind};
use std::io::Write;
use std::path::Path;

use crate::error::CliResult;
use crate::render;
use crate::CliSettings;

/// Output format for one-shot commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Sorted listing, optionally restricted to one month
pub fn list<W: Write>(
    out: &mut W,
    ledger: &Ledger,
    month: Option<Month>,
    format: OutputFormat,
    settings: &CliSettings,
) -> CliResult<()> {
    let transactions = match month {
        Some(month) => ledger.by_month(month),
        None => ledger.sorted(),
    };

    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&transactions)?)?,
        OutputFormat::Text if transactions.is_empty() => match month {
            Some(month) => writeln!(out, "No transactions found for {}.", month)?,
            None => writeln!(out, "No transactions yet.")?,
        },
        OutputFormat::Text => render::write_transactions(out, &transactions, &settings.currency_symbol)?,
    }
    Ok(())
}

pub fn summary<W: Write>(out: &mut W, ledger: &Ledger, format: OutputFormat, settings: &CliSettings) -> CliResult<()> {
    let summary = ledger.summary();
    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?,
        OutputFormat::Text => render::write_summary(out, &summary, &settings.currency_symbol)?,
    }
    Ok(())
}

pub fn categories<W: Write>(
    out: &mut W,
    ledger: &Ledger,
    kind: TransactionKind,
    format: OutputFormat,
    settings: &CliSettings,
) -> CliResult<()> {
    let report = ledger.category_totals(kind);
    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?,
        OutputFormat::Text => render::write_category_report(out, &report, &settings.currency_symbol)?,
    }
    Ok(())
}

/// Write the CSV export to `path`
pub fn export<W: Write>(out: &mut W, ledger: &Ledger, path: &Path) -> CliResult<()> {
    if ledger.is_empty() {
        writeln!(out, "No transactions to export.")?;
        return Ok(());
    }

    let rows = ledger.export_csv(path)?;
    writeln!(out, "Exported {} transactions to {}", rows, path.display())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use budgetlite_core::Transaction;
    use budgetlite_storage::{JsonFileStorage, StorageRef};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn tx(date: &str, kind: TransactionKind, category: &str, description: &str, amount: &str) -> Transaction {
        Transaction::new(
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            kind,
            category,
            description,
            Decimal::from_str(amount).unwrap(),
        )
        .unwrap()
    }

    fn ledger(dir: &TempDir) -> Ledger {
        let storage: StorageRef = Arc::new(JsonFileStorage::new(dir.path().join("data.json")));
        Ledger::with_transactions(
            storage,
            vec![
                tx("2026-02-10", TransactionKind::Expense, "Food", "Lunch", "12.50"),
                tx("2026-01-05", TransactionKind::Income, "Salary", "January pay", "3000"),
                tx("2026-02-01", TransactionKind::Expense, "Rent", "February rent", "1200"),
            ],
        )
    }

    fn settings(dir: &TempDir) -> CliSettings {
        CliSettings {
            currency_symbol: "$".to_string(),
            export_path: dir.path().join("transactions.csv"),
        }
    }

    fn text(out: Vec<u8>) -> String {
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_list_text() {
        let dir = TempDir::new().unwrap();
        let mut out = Vec::new();
        list(&mut out, &ledger(&dir), None, OutputFormat::Text, &settings(&dir)).unwrap();

        let out = text(out);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("January pay"));
        assert!(lines[2].contains("Lunch"));
    }

    #[test]
    fn test_list_month_filter() {
        let dir = TempDir::new().unwrap();
        let ledger = ledger(&dir);

        let mut out = Vec::new();
        list(&mut out, &ledger, Some("2026-02".parse().unwrap()), OutputFormat::Text, &settings(&dir)).unwrap();
        assert_eq!(text(out).lines().count(), 2);

        let mut out = Vec::new();
        list(&mut out, &ledger, Some("2025-02".parse().unwrap()), OutputFormat::Text, &settings(&dir)).unwrap();
        assert_eq!(text(out), "No transactions found for 2025-02.\n");
    }

    #[test]
    fn test_list_json() {
        let dir = TempDir::new().unwrap();
        let mut out = Vec::new();
        list(&mut out, &ledger(&dir), None, OutputFormat::Json, &settings(&dir)).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0]["date"], "2026-01-05");
        assert_eq!(items[0]["type"], "income");
    }

    #[test]
    fn test_summary_formats() {
        let dir = TempDir::new().unwrap();
        let ledger = ledger(&dir);

        let mut out = Vec::new();
        summary(&mut out, &ledger, OutputFormat::Text, &settings(&dir)).unwrap();
        assert!(text(out).contains("Net          : $1,787.50"));

        let mut out = Vec::new();
        summary(&mut out, &ledger, OutputFormat::Json, &settings(&dir)).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert!(value.get("total_income").is_some());
        assert!(value.get("net").is_some());
    }

    #[test]
    fn test_categories_text() {
        let dir = TempDir::new().unwrap();
        let mut out = Vec::new();
        categories(&mut out, &ledger(&dir), TransactionKind::Expense, OutputFormat::Text, &settings(&dir)).unwrap();

        let out = text(out);
        assert!(out.starts_with("Rent "));
        assert!(out.contains("TOTAL           $1,212.50"));
    }

    #[test]
    fn test_export() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        let mut out = Vec::new();
        export(&mut out, &ledger(&dir), &path).unwrap();

        assert!(text(out).starts_with("Exported 3 transactions to "));
        assert_eq!(std::fs::read_to_string(&path).unwrap().lines().count(), 4);
    }

    #[test]
    fn test_export_empty_ledger() {
        let dir = TempDir::new().unwrap();
        let storage: StorageRef = Arc::new(JsonFileStorage::new(dir.path().join("data.json")));
        let path = dir.path().join("out.csv");
        let mut out = Vec::new();
        export(&mut out, &Ledger::open(storage), &path).unwrap();

        assert_eq!(text(out), "No transactions to export.\n");
        assert!(!path.exists());
    }
}
