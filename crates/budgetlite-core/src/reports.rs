//! Read-only reports over a transaction collection

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::Transaction;
use crate::time::Month;
use crate::types::TransactionKind;

/// Label used for transactions whose category is blank
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Income, expense and net totals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub net: Decimal,
}

/// Total for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Decimal,
    pub count: usize,
}

/// Per-category totals for one transaction type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryReport {
    pub kind: TransactionKind,
    /// Largest total first
    pub entries: Vec<CategoryTotal>,
    pub grand_total: Decimal,
}

impl CategoryReport {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Transactions in ascending date order; equal dates keep insertion order.
pub fn sorted_view(transactions: &[Transaction]) -> Vec<&Transaction> {
    let mut sorted: Vec<&Transaction> = transactions.iter().collect();
    // sort_by_key is stable
    sorted.sort_by_key(|t| t.date());
    sorted
}

/// Positions into `transactions` in sorted-view order
pub fn sorted_indices(transactions: &[Transaction]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..transactions.len()).collect();
    indices.sort_by_key(|&i| transactions[i].date());
    indices
}

pub fn summary(transactions: &[Transaction]) -> Summary {
    let (total_income, total_expenses) = transactions.iter().fold(
        (Decimal::ZERO, Decimal::ZERO),
        |(income, expenses), t| match t.kind() {
            TransactionKind::Income => (income + t.amount(), expenses),
            TransactionKind::Expense => (income, expenses + t.amount()),
        },
    );

    Summary {
        total_income,
        total_expenses,
        net: total_income - total_expenses,
    }
}

/// Sorted view restricted to one month
pub fn by_month(transactions: &[Transaction], month: Month) -> Vec<&Transaction> {
    sorted_view(transactions)
        .into_iter()
        .filter(|t| month.contains(&t.date()))
        .collect()
}

fn normalize_category(category: &str) -> String {
    let trimmed = category.trim();
    if trimmed.is_empty() {
        UNCATEGORIZED.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Group one transaction type by category, largest total first.
///
/// Categories with equal totals stay in the order they first appear.
pub fn category_totals(transactions: &[Transaction], kind: TransactionKind) -> CategoryReport {
    let mut entries: Vec<CategoryTotal> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for tx in transactions.iter().filter(|t| t.kind() == kind) {
        let category = normalize_category(tx.category());
        match positions.get(&category) {
            Some(&pos) => {
                entries[pos].total += tx.amount();
                entries[pos].count += 1;
            }
            None => {
                positions.insert(category.clone(), entries.len());
                entries.push(CategoryTotal {
                    category,
                    total: tx.amount(),
                    count: 1,
                });
            }
        }
    }

    entries.sort_by(|a, b| b.total.cmp(&a.total));
    let grand_total = entries.iter().map(|e| e.total).sum();

    CategoryReport {
        kind,
        entries,
        grand_total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn tx(date: &str, kind: TransactionKind, category: &str, description: &str, amount: &str) -> Transaction {
        Transaction::new(
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            kind,
            category,
            description,
            dec(amount),
        )
        .unwrap()
    }

    fn sample() -> Vec<Transaction> {
        use TransactionKind::*;
        vec![
            tx("2026-02-14", Expense, "Food", "Dinner", "45.20"),
            tx("2026-01-31", Income, "Salary", "January pay", "3000"),
            tx("2026-02-01", Expense, "Rent", "February rent", "1200"),
            tx("2026-02-14", Expense, "Gifts", "Flowers", "30"),
            tx("2026-02-01", Income, "Side job", "Logo design", "250.50"),
            tx("2026-03-02", Expense, "Food", "Groceries", "80.10"),
        ]
    }

    fn descriptions(view: &[&Transaction]) -> Vec<String> {
        view.iter().map(|t| t.description().to_string()).collect()
    }

    #[test]
    fn test_sorted_view_is_ascending_and_stable() {
        let transactions = sample();
        let view = sorted_view(&transactions);

        assert_eq!(
            descriptions(&view),
            vec!["January pay", "February rent", "Logo design", "Dinner", "Flowers", "Groceries"]
        );
        assert!(view.windows(2).all(|w| w[0].date() <= w[1].date()));
    }

    #[test]
    fn test_sorted_indices_match_sorted_view() {
        let transactions = sample();
        let view = sorted_view(&transactions);
        let indices = sorted_indices(&transactions);

        assert_eq!(indices, vec![1, 2, 4, 0, 3, 5]);
        for (t, &i) in view.iter().zip(indices.iter()) {
            assert_eq!(*t, &transactions[i]);
        }
    }

    #[test]
    fn test_sorted_view_empty() {
        assert!(sorted_view(&[]).is_empty());
    }

    #[test]
    fn test_summary_totals() {
        let s = summary(&sample());
        assert_eq!(s.total_income, dec("3250.50"));
        assert_eq!(s.total_expenses, dec("1355.30"));
        assert_eq!(s.net, dec("1895.20"));
    }

    #[test]
    fn test_summary_negative_net_and_empty() {
        let transactions = vec![tx("2026-02-01", TransactionKind::Expense, "Rent", "Rent", "10")];
        let s = summary(&transactions);
        assert_eq!(s.total_income, Decimal::ZERO);
        assert_eq!(s.net, dec("-10"));

        let empty = summary(&[]);
        assert_eq!(empty.total_income, Decimal::ZERO);
        assert_eq!(empty.total_expenses, Decimal::ZERO);
        assert_eq!(empty.net, Decimal::ZERO);
    }

    #[test]
    fn test_by_month() {
        let transactions = sample();
        let february = by_month(&transactions, "2026-02".parse().unwrap());

        assert_eq!(
            descriptions(&february),
            vec!["February rent", "Logo design", "Dinner", "Flowers"]
        );
        assert!(february.iter().all(|t| t.date().to_string().starts_with("2026-02")));
    }

    #[test]
    fn test_by_month_no_match() {
        let transactions = sample();
        assert!(by_month(&transactions, "2025-02".parse().unwrap()).is_empty());
    }

    #[test]
    fn test_category_totals_descending() {
        use TransactionKind::Expense;
        let transactions = vec![
            tx("2026-02-01", Expense, "Food", "a", "10"),
            tx("2026-02-02", Expense, "Food", "b", "5"),
            tx("2026-02-03", Expense, "Rent", "c", "20"),
            tx("2026-02-04", TransactionKind::Income, "Food", "refund", "99"),
        ];

        let report = category_totals(&transactions, Expense);
        let pairs: Vec<(String, Decimal)> = report
            .entries
            .iter()
            .map(|e| (e.category.clone(), e.total))
            .collect();

        assert_eq!(pairs, vec![("Rent".to_string(), dec("20.0")), ("Food".to_string(), dec("15.0"))]);
        assert_eq!(report.grand_total, dec("35.0"));
        assert_eq!(report.entries[1].count, 2);
        assert_eq!(report.kind, Expense);
    }

    #[test]
    fn test_category_totals_income() {
        let report = category_totals(&sample(), TransactionKind::Income);
        assert_eq!(report.entries.len(), 2);
        assert_eq!(report.entries[0].category, "Salary");
        assert_eq!(report.grand_total, dec("3250.50"));
    }

    #[test]
    fn test_category_totals_grand_total_is_sum_of_groups() {
        let report = category_totals(&sample(), TransactionKind::Expense);
        let sum: Decimal = report.entries.iter().map(|e| e.total).sum();
        assert_eq!(report.grand_total, sum);
        assert!(report.entries.windows(2).all(|w| w[0].total >= w[1].total));
    }

    #[test]
    fn test_category_totals_empty() {
        let transactions = vec![tx("2026-02-01", TransactionKind::Expense, "Rent", "Rent", "10")];
        let report = category_totals(&transactions, TransactionKind::Income);
        assert!(report.is_empty());
        assert_eq!(report.grand_total, Decimal::ZERO);
    }

    #[test]
    fn test_totals_at_largest_amount_do_not_overflow() {
        use crate::models::MAX_AMOUNT;
        let largest = MAX_AMOUNT.to_string();
        let mut transactions = Vec::new();
        for i in 0..1000 {
            transactions.push(tx("2026-02-01", TransactionKind::Income, "Salary", &format!("pay {}", i), &largest));
            transactions.push(tx("2026-02-02", TransactionKind::Expense, "Rent", &format!("rent {}", i), &largest));
        }
        transactions.push(tx("2026-02-03", TransactionKind::Expense, "Food", "Lunch", "0.01"));

        let s = summary(&transactions);
        assert_eq!(s.total_income, dec("1000000000000"));
        assert_eq!(s.total_expenses, dec("1000000000000.01"));
        assert_eq!(s.net, dec("-0.01"));

        let report = category_totals(&transactions, TransactionKind::Expense);
        assert_eq!(report.entries[0].total, dec("1000000000000"));
        assert_eq!(report.entries[0].count, 1000);
        assert_eq!(report.grand_total, dec("1000000000000.01"));
    }

    #[test]
    fn test_normalize_category() {
        assert_eq!(normalize_category("  Food "), "Food");
        assert_eq!(normalize_category("   "), UNCATEGORIZED);
    }
}
