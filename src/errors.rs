//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

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
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Format errors (user input)
    // ---------------------------
    #[error("Invalid date format: {0} (use DD/MM/YYYY)")]
    InvalidDate(String),

    #[error("Invalid time format: {0} (use HH:MM)")]
    InvalidTime(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("A record already exists for {0}")]
    DuplicateDate(String),

    #[error("No record selected")]
    NoSelection,

    #[error("Invalid record id: {0}")]
    InvalidRecordId(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Unexpected argument: {0}")]
    UnexpectedArgument(String),

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
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// Malformed HH:MM or DD/MM/YYYY input.
    pub fn is_format_error(&self) -> bool {
        matches!(self, AppError::InvalidDate(_) | AppError::InvalidTime(_))
    }

    /// Errors that are reported as warnings rather than failures.
    pub fn is_warning(&self) -> bool {
        matches!(self, AppError::DuplicateDate(_) | AppError::NoSelection)
    }
}

pub type AppResult<T> = Result<T, AppError>;
