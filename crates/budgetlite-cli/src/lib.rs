//! Terminal interaction layer for budgetlite
//!
//! Modules:
//! - prompts: validated line prompts over any `BufRead`/`Write` pair
//! - render: listing rows, summary lines and category tables
//! - menu: the interactive menu session
//! - commands: one-shot listing, report and export commands

pub mod commands;
pub mod error;
pub mod menu;
pub mod prompts;
pub mod render;

use budgetlite_config::Config;
use std::path::PathBuf;

pub use commands::OutputFormat;
pub use error::{CliError, CliResult};
pub use menu::Session;
pub use prompts::{Prompter, Selection};

/// Display and export settings taken from the configuration
#[derive(Debug, Clone)]
pub struct CliSettings {
    pub currency_symbol: String,
    pub export_path: PathBuf,
}

impl CliSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            currency_symbol: config.display.currency_symbol.clone(),
            export_path: config.export_path().to_path_buf(),
        }
    }
}
