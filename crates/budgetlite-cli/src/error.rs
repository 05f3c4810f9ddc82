//! Error types for budgetlite-cli

use budgetlite_core::CoreError;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    /// Input stream reached end of file while a prompt was waiting
    #[error("Input closed")]
    InputClosed,

    #[error("Terminal I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type with CliError
pub type CliResult<T> = Result<T, CliError>;
