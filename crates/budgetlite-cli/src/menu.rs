//! Interactive menu session
//!
//! Menu entries:
//! - 1: Add transaction
//! - 2: View all transactions
//! - 3: View summary
//! - 4: View transactions by month
//! - 5: Category totals
//! - 6: Delete a transaction
//! - 7: Edit a transaction
//! - 8: Export to CSV
//! - 9: Exit

use budgetlite_core::{
    format_date, CoreError, DefaultErrorLogger, ErrorContext, ErrorLogger, Ledger, Transaction, TransactionPatch,
};
use std::io::{BufRead, Write};

use crate::error::{CliError, CliResult};
use crate::prompts::{Prompter, Selection};
use crate::render;
use crate::CliSettings;

const MENU: &str = "=== Budget Lite ===
1) Add transaction
2) View all transactions
3) View summary
4) View transactions by month
5) Category totals (income/expense)
6) Delete a transaction
7) Edit a transaction
8) Export to CSV
9) Exit";

pub struct Session<R, W> {
    ledger: Ledger,
    prompter: Prompter<R, W>,
    settings: CliSettings,
    logger: DefaultErrorLogger,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(ledger: Ledger, prompter: Prompter<R, W>, settings: CliSettings) -> Self {
        Self {
            ledger,
            prompter,
            settings,
            logger: DefaultErrorLogger,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Hand back the ledger and the output stream
    pub fn finish(self) -> (Ledger, W) {
        (self.ledger, self.prompter.into_output())
    }

    /// Run the menu until the user exits or input ends
    pub fn run(&mut self) -> CliResult<()> {
        match self.menu_loop() {
            Err(CliError::InputClosed) => {
                log::debug!(target: "budgetlite::cli", "Input closed, ending session");
                self.prompter.say("")?;
                Ok(())
            }
            other => other,
        }
    }

    fn menu_loop(&mut self) -> CliResult<()> {
        loop {
            self.prompter.say(MENU)?;
            let choice = self.prompter.ask("Choose an option (1-9): ")?;
            match choice.as_str() {
                "1" => self.add()?,
                "2" => self.view_all()?,
                "3" => self.summary()?,
                "4" => self.by_month()?,
                "5" => self.category_totals()?,
                "6" => self.delete()?,
                "7" => self.edit()?,
                "8" => self.export()?,
                "9" => {
                    self.prompter.say("Later, accountant.")?;
                    return Ok(());
                }
                _ => self.prompter.say("Pick a number from the menu.\n")?,
            }
        }
    }

    fn add(&mut self) -> CliResult<()> {
        self.prompter.say("\n=== Add Transaction ===")?;
        let date = self.prompter.date()?;
        let kind = self.prompter.kind()?;
        let category = self.prompter.nonempty("Category (e.g., Food, Rent, Gas): ")?;
        let description = self.prompter.nonempty("Description: ")?;
        let amount = self.prompter.amount()?;

        let transaction = Transaction::new(date, kind, &category, &description, amount)?;
        match self.ledger.add(transaction) {
            Ok(()) => self.prompter.say("Saved!\n"),
            Err(e) => self.report_failure("add", e),
        }
    }

    fn view_all(&mut self) -> CliResult<()> {
        self.prompter.say("\n=== All Transactions ===")?;
        if self.ledger.is_empty() {
            return self.prompter.say("No transactions yet.\n");
        }
        self.list_sorted()?;
        self.prompter.say("")
    }

    fn summary(&mut self) -> CliResult<()> {
        self.prompter.say("\n=== Summary ===")?;
        let summary = self.ledger.summary();
        render::write_summary(self.prompter.output(), &summary, &self.settings.currency_symbol)?;
        self.prompter.say("")
    }

    fn by_month(&mut self) -> CliResult<()> {
        self.prompter.say("\n=== Transactions by Month ===")?;
        if self.ledger.is_empty() {
            return self.prompter.say("No transactions yet.\n");
        }

        let month = self.prompter.month()?;
        let filtered = self.ledger.by_month(month);
        if filtered.is_empty() {
            return self.prompter.say(&format!("No transactions found for {}.\n", month));
        }
        render::write_transactions(self.prompter.output(), &filtered, &self.settings.currency_symbol)?;
        self.prompter.say("")
    }

    fn category_totals(&mut self) -> CliResult<()> {
        self.prompter.say("\n=== Category Totals ===")?;
        if self.ledger.is_empty() {
            return self.prompter.say("No transactions yet.\n");
        }

        let kind = self.prompter.kind()?;
        let report = self.ledger.category_totals(kind);
        render::write_category_report(self.prompter.output(), &report, &self.settings.currency_symbol)?;
        self.prompter.say("")
    }

    fn delete(&mut self) -> CliResult<()> {
        self.prompter.say("\n=== Delete a Transaction ===")?;
        if self.ledger.is_empty() {
            return self.prompter.say("No transactions to delete.\n");
        }
        self.list_sorted()?;

        let selector = match self.prompter.selection("delete", self.ledger.len())? {
            Selection::Item(n) => n,
            Selection::Cancel => return self.prompter.say("Canceled.\n"),
        };

        let target = self.ledger.get(selector)?;
        let question = format!(
            "Delete '{}' on {}? (y/n): ",
            target.description(),
            format_date(target.date())
        );
        if !self.prompter.confirm(&question)? {
            return self.prompter.say("Not deleted.\n");
        }

        match self.ledger.delete(selector) {
            Ok(_) => self.prompter.say("Deleted!\n"),
            Err(e) => self.report_failure("delete", e),
        }
    }

    fn edit(&mut self) -> CliResult<()> {
        self.prompter.say("\n=== Edit a Transaction ===")?;
        if self.ledger.is_empty() {
            return self.prompter.say("No transactions to edit.\n");
        }
        self.list_sorted()?;

        let selector = match self.prompter.selection("edit", self.ledger.len())? {
            Selection::Item(n) => n,
            Selection::Cancel => return self.prompter.say("Canceled.\n"),
        };

        self.prompter.say("\nPress Enter to keep the current value.")?;
        let current = self.ledger.get(selector)?;
        render::write_current_values(self.prompter.output(), current, &self.settings.currency_symbol)?;
        self.prompter.say("")?;

        let patch = TransactionPatch {
            date: self.prompter.optional_date()?,
            kind: self.prompter.optional_kind()?,
            category: self.prompter.optional_nonempty("Category [Enter to keep current]: ")?,
            description: self.prompter.optional_nonempty("Description [Enter to keep current]: ")?,
            amount: self.prompter.optional_amount()?,
        };

        if patch.is_empty() {
            return self.prompter.say("Nothing changed.\n");
        }
        if !self.prompter.confirm("Save changes? (y/n): ")? {
            return self.prompter.say("Not saved.\n");
        }

        match self.ledger.edit(selector, patch) {
            Ok(_) => self.prompter.say("Updated!\n"),
            Err(e) => self.report_failure("edit", e),
        }
    }

    fn export(&mut self) -> CliResult<()> {
        self.prompter.say("\n=== Export to CSV ===")?;
        if self.ledger.is_empty() {
            return self.prompter.say("No transactions to export.\n");
        }

        let path = self.settings.export_path.clone();
        match self.ledger.export_csv(&path) {
            Ok(rows) => self
                .prompter
                .say(&format!("Exported {} transactions to {}\n", rows, path.display())),
            Err(e) => {
                let context = ErrorContext::new("export")
                    .with_data("path", serde_json::json!(path.display().to_string()));
                self.logger.log_error(&e, &context);
                self.prompter.say(&format!("Could not write CSV file.\n{}\n", e.to_details()))
            }
        }
    }

    fn list_sorted(&mut self) -> CliResult<()> {
        let sorted = self.ledger.sorted();
        render::write_transactions(self.prompter.output(), &sorted, &self.settings.currency_symbol)?;
        Ok(())
    }

    /// Print a non-fatal mutation failure and log it
    fn report_failure(&mut self, operation: &str, error: CoreError) -> CliResult<()> {
        let context = ErrorContext::new(operation)
            .with_data("location", serde_json::json!(self.ledger.location()))
            .with_data("transactions", serde_json::json!(self.ledger.len()));
        self.logger.log_error(&error, &context);
        self.prompter.say(&format!("Could not save changes.\n{}\n", error.to_details()))
    }
}
