//! Utility functions and helpers

use rust_decimal::Decimal;

/// Format a number with thousands separators
pub fn format_number<T: ToString>(n: T) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let mut count = 0;
    for c in s.chars().rev() {
        if count == 3 {
            result.push(',');
            count = 0;
        }
        result.push(c);
        count += 1;
    }
    result.chars().rev().collect()
}

/// Format an amount with two decimals, thousands separators and a currency
/// symbol, e.g. `-$1,234.50`.
pub fn format_money(amount: Decimal, symbol: &str) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if amount.is_sign_negative() && !amount.is_zero() { "-" } else { "" };
    format!("{}{}{}.{}", sign, symbol, format_number(whole), fraction)
}

/// Pad or cut `s` to exactly `width` characters.
///
/// Cut values end in `~` so truncation is visible in table columns.
pub fn fit(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len <= width {
        return format!("{:<width$}", s, width = width);
    }
    if width == 0 {
        return String::new();
    }
    let mut cut: String = s.chars().take(width - 1).collect();
    cut.push('~');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn test_format_money() {
        let d = |s: &str| Decimal::from_str(s).unwrap();
        assert_eq!(format_money(d("12.5"), "$"), "$12.50");
        assert_eq!(format_money(d("1234.5"), "$"), "$1,234.50");
        assert_eq!(format_money(d("-1747.5"), "$"), "-$1,747.50");
        assert_eq!(format_money(d("0"), "€"), "€0.00");
        assert_eq!(format_money(d("3000"), ""), "3,000.00");
    }

    #[test]
    fn test_fit() {
        assert_eq!(fit("Food", 6), "Food  ");
        assert_eq!(fit("Groceries", 6), "Groce~");
        assert_eq!(fit("Rent", 4), "Rent");
        assert_eq!(fit("abc", 0), "");
    }
}
