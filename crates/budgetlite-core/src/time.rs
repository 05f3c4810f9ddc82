//! Dates and month tokens

use chrono::{Datelike, Local, NaiveDate};

use crate::error::{CoreError, CoreResult};

/// Canonical date format (`YYYY-MM-DD`)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a calendar date. Unpadded input such as `2026-2-5` is accepted;
/// the result always formats back in canonical form.
pub fn parse_date(input: &str) -> CoreResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|_| CoreError::InvalidDate {
        input: input.to_string(),
    })
}

/// Format a date in canonical form
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Today's date in local time
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// A calendar month, written `YYYY-MM`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Check if a date falls in this month.
    ///
    /// Same result as a prefix match of the canonical date string.
    pub fn contains(&self, date: &NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl std::str::FromStr for Month {
    type Err = CoreError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        NaiveDate::parse_from_str(&format!("{}-01", trimmed), DATE_FORMAT)
            .map(|d| Self {
                year: d.year(),
                month: d.month(),
            })
            .map_err(|_| CoreError::InvalidMonth {
                input: s.to_string(),
            })
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
