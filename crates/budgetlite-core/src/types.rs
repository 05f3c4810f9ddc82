//! Basic types for the core ledger module

use serde::{Deserialize, Serialize};

/// Transaction type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming in (salary, gifts)
    Income,
    /// Money going out (food, rent)
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }

    /// Sign shown in front of amounts in listings
    pub fn sign(&self) -> char {
        match self {
            TransactionKind::Income => '+',
            TransactionKind::Expense => '-',
        }
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            _ => Err(format!("Invalid transaction type: {}", s)),
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_kind_from_str() {
        assert_eq!("income".parse::<TransactionKind>().unwrap(), TransactionKind::Income);
        assert_eq!(" Expense ".parse::<TransactionKind>().unwrap(), TransactionKind::Expense);
        assert!("expenses".parse::<TransactionKind>().is_err());
        assert!("".parse::<TransactionKind>().is_err());
    }

    #[test]
    fn test_transaction_kind_display() {
        assert_eq!(TransactionKind::Income.to_string(), "income");
        assert_eq!(TransactionKind::Expense.to_string(), "expense");
        assert_eq!(TransactionKind::Income.sign(), '+');
        assert_eq!(TransactionKind::Expense.sign(), '-');
    }
}
