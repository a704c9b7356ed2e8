//! Unified application error type.
//! Parser, exporters, config and CLI all return AppError so error handling
//! stays consistent. Validation findings are NOT errors: they are data
//! carried by `ValidationResult`.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Parsing errors (fatal: the whole batch is rejected)
    // ---------------------------
    #[error("CSV parse error: {0}")]
    Parse(String),

    #[error("Input is empty: a header row is required")]
    EmptyInput,

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    #[error("Invalid row selection: {0}")]
    InvalidRow(String),

    // ---------------------------
    // Validation outcome (CLI only)
    // ---------------------------
    #[error("Validation failed: {errors} error(s), {warnings} warning(s)")]
    ValidationFailed { errors: usize, warnings: usize },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl From<csv::Error> for AppError {
    fn from(e: csv::Error) -> Self {
        AppError::Parse(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
