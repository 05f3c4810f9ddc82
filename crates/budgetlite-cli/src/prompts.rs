//! Line-based prompts with validation and re-prompting
//!
//! Required prompts loop until the answer is valid. Optional prompts (edit
//! mode) return `None` on a blank answer, meaning "keep the current value".

use budgetlite_core::{parse_amount, parse_date, today, CoreError, Month, TransactionKind};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::io::{BufRead, Write};

use crate::error::{CliError, CliResult};

/// Answer to a list selection prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// 1-based position in the listing
    Item(usize),
    Cancel,
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
    today: NaiveDate,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            today: today(),
        }
    }

    /// Date used when the date prompt is left blank
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print a line
    pub fn say(&mut self, message: &str) -> CliResult<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    /// Show `prompt` and read one trimmed line
    pub fn ask(&mut self, prompt: &str) -> CliResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CliError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    // ==================== Create mode ====================

    pub fn nonempty(&mut self, prompt: &str) -> CliResult<String> {
        loop {
            let value = self.ask(prompt)?;
            if !value.is_empty() {
                return Ok(value);
            }
            self.say("Please enter something (can't be blank).")?;
        }
    }

    pub fn kind(&mut self) -> CliResult<TransactionKind> {
        loop {
            let value = self.ask("Type (income/expense): ")?;
            match value.parse() {
                Ok(kind) => return Ok(kind),
                Err(_) => self.say("Type must be 'income' or 'expense'.")?,
            }
        }
    }

    pub fn amount(&mut self) -> CliResult<Decimal> {
        loop {
            let value = self.ask("Amount (e.g., 12.50): ")?;
            if let Some(amount) = self.check_amount(&value)? {
                return Ok(amount);
            }
        }
    }

    /// Blank answer means today
    pub fn date(&mut self) -> CliResult<NaiveDate> {
        loop {
            let value = self.ask("Date (YYYY-MM-DD) [Enter for today]: ")?;
            if value.is_empty() {
                return Ok(self.today);
            }
            if let Some(date) = self.check_date(&value)? {
                return Ok(date);
            }
        }
    }

    pub fn month(&mut self) -> CliResult<Month> {
        loop {
            let value = self.ask("Month (YYYY-MM), e.g. 2026-02: ")?;
            match value.parse::<Month>() {
                Ok(month) => return Ok(month),
                Err(_) => self.say("Invalid month. Use YYYY-MM (example: 2026-02).")?,
            }
        }
    }

    // ==================== Edit mode ====================

    pub fn optional_nonempty(&mut self, prompt: &str) -> CliResult<Option<String>> {
        let value = self.ask(prompt)?;
        Ok(if value.is_empty() { None } else { Some(value) })
    }

    pub fn optional_kind(&mut self) -> CliResult<Option<TransactionKind>> {
        loop {
            let value = self.ask("Type (income/expense) [Enter to keep current]: ")?;
            if value.is_empty() {
                return Ok(None);
            }
            match value.parse() {
                Ok(kind) => return Ok(Some(kind)),
                Err(_) => self.say("Type must be 'income' or 'expense'.")?,
            }
        }
    }

    pub fn optional_amount(&mut self) -> CliResult<Option<Decimal>> {
        loop {
            let value = self.ask("Amount (e.g., 12.50) [Enter to keep current]: ")?;
            if value.is_empty() {
                return Ok(None);
            }
            if let Some(amount) = self.check_amount(&value)? {
                return Ok(Some(amount));
            }
        }
    }

    pub fn optional_date(&mut self) -> CliResult<Option<NaiveDate>> {
        loop {
            let value = self.ask("Date (YYYY-MM-DD) [Enter to keep current]: ")?;
            if value.is_empty() {
                return Ok(None);
            }
            if let Some(date) = self.check_date(&value)? {
                return Ok(Some(date));
            }
        }
    }

    // ==================== Selection ====================

    /// Ask for a number in `1..=count`, or `c` to cancel
    pub fn selection(&mut self, action: &str, count: usize) -> CliResult<Selection> {
        let prompt = format!("Enter the number to {} (or 'c' to cancel): ", action);
        loop {
            let value = self.ask(&prompt)?.to_lowercase();
            if value == "c" {
                return Ok(Selection::Cancel);
            }
            match value.parse::<usize>() {
                Ok(n) if (1..=count).contains(&n) => return Ok(Selection::Item(n)),
                Ok(_) => self.say("That number isn't in the list.")?,
                Err(_) => self.say("Enter a valid number, or 'c' to cancel.")?,
            }
        }
    }

    /// `y` confirms; any other answer declines
    pub fn confirm(&mut self, prompt: &str) -> CliResult<bool> {
        Ok(self.ask(prompt)?.to_lowercase() == "y")
    }

    fn check_amount(&mut self, value: &str) -> CliResult<Option<Decimal>> {
        match parse_amount(value) {
            Ok(amount) => Ok(Some(amount)),
            Err(CoreError::ValidationError { message, .. }) if value.parse::<f64>().is_ok() => {
                self.say(&format!("Amount {}.", message))?;
                Ok(None)
            }
            Err(_) => {
                self.say("Please enter a valid number (like 12.50).")?;
                Ok(None)
            }
        }
    }

    fn check_date(&mut self, value: &str) -> CliResult<Option<NaiveDate>> {
        match parse_date(value) {
            Ok(date) => Ok(Some(date)),
            Err(_) => {
                self.say("Invalid date. Use YYYY-MM-DD (example: 2026-02-05).")?;
                Ok(None)
            }
        }
    }
}
