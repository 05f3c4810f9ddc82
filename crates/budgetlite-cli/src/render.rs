//! Plain-text rendering of listings and reports

use budgetlite_core::{format_date, CategoryReport, Summary, Transaction};
use budgetlite_utils::{fit, format_money};
use std::io::{self, Write};

const TYPE_WIDTH: usize = 7;
const CATEGORY_WIDTH: usize = 12;
const DESCRIPTION_WIDTH: usize = 25;
const TOTALS_LABEL_WIDTH: usize = 15;
const TOTALS_RULE_WIDTH: usize = 26;

/// One numbered listing row, e.g.
/// `  1. 2026-02-05 | expense | Food         | Lunch                     | -$12.50`
pub fn transaction_line(position: usize, tx: &Transaction, symbol: &str) -> String {
    format!(
        "{:>3}. {} | {} | {} | {} | {}{}",
        position,
        format_date(tx.date()),
        fit(tx.kind().as_str(), TYPE_WIDTH),
        fit(tx.category(), CATEGORY_WIDTH),
        fit(tx.description(), DESCRIPTION_WIDTH),
        tx.kind().sign(),
        format_money(tx.amount(), symbol)
    )
}

/// Numbered listing starting at 1
pub fn write_transactions<W: Write>(out: &mut W, transactions: &[&Transaction], symbol: &str) -> io::Result<()> {
    for (i, tx) in transactions.iter().enumerate() {
        writeln!(out, "{}", transaction_line(i + 1, tx, symbol))?;
    }
    Ok(())
}

pub fn write_summary<W: Write>(out: &mut W, summary: &Summary, symbol: &str) -> io::Result<()> {
    writeln!(out, "Total Income : {}", format_money(summary.total_income, symbol))?;
    writeln!(out, "Total Expense: {}", format_money(summary.total_expenses, symbol))?;
    writeln!(out, "Net          : {}", format_money(summary.net, symbol))
}

/// Category table followed by a rule and the `TOTAL` line.
///
/// An empty report prints a single "nothing to total" line instead.
pub fn write_category_report<W: Write>(out: &mut W, report: &CategoryReport, symbol: &str) -> io::Result<()> {
    if report.is_empty() {
        return writeln!(out, "No {} transactions to total.", report.kind);
    }

    for entry in &report.entries {
        writeln!(
            out,
            "{:<width$} {}",
            entry.category,
            format_money(entry.total, symbol),
            width = TOTALS_LABEL_WIDTH
        )?;
    }
    writeln!(out, "{}", "-".repeat(TOTALS_RULE_WIDTH))?;
    writeln!(
        out,
        "{:<width$} {}",
        "TOTAL",
        format_money(report.grand_total, symbol),
        width = TOTALS_LABEL_WIDTH
    )
}

/// Current values shown before an edit
pub fn write_current_values<W: Write>(out: &mut W, tx: &Transaction, symbol: &str) -> io::Result<()> {
    writeln!(out, "Current date       : {}", format_date(tx.date()))?;
    writeln!(out, "Current type       : {}", tx.kind())?;
    writeln!(out, "Current category   : {}", tx.category())?;
    writeln!(out, "Current description: {}", tx.description())?;
    writeln!(out, "Current amount     : {}", format_money(tx.amount(), symbol))
}
