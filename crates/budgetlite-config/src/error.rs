//! Error types for budgetlite-config

use std::io;
use thiserror::Error;

/// Why a configuration file could not be used
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("No configuration file at {path}")]
    FileNotFound { path: String },

    #[error("Could not read {path}: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Configuration is not valid YAML: {message}")]
    InvalidYaml { message: String },

    #[error("Bad value for `{field}`: {reason}")]
    InvalidValue { field: String, reason: String },
}

impl ConfigError {
    /// Stable identifier, printed in brackets in front of the message
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::FileNotFound { .. } => "CONFIG_NOT_FOUND",
            ConfigError::Unreadable { .. } => "CONFIG_UNREADABLE",
            ConfigError::InvalidYaml { .. } => "CONFIG_BAD_YAML",
            ConfigError::InvalidValue { .. } => "CONFIG_BAD_VALUE",
        }
    }

    /// What the user can do about it, if there is anything obvious
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            ConfigError::FileNotFound { .. } | ConfigError::InvalidYaml { .. } => {
                Some("`budgetlite init-config > budgetlite.yaml` writes a file with every key set")
            }
            ConfigError::Unreadable { .. } => Some("check the file permissions, or pass another file with --config"),
            ConfigError::InvalidValue { .. } => None,
        }
    }

    /// Multi-line message for the terminal
    pub fn report(&self) -> String {
        let mut report = format!("[{}] {}", self.code(), self);
        if let Some(hint) = self.hint() {
            report.push_str("\n  hint: ");
            report.push_str(hint);
        }
        report
    }
}
