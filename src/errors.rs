//! Unified application error type.
//! All modules (store, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

/// Rejections raised by the task editor before a record is committed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("All fields are required")]
    MissingFields,

    #[error("Invalid time format")]
    InvalidTime,
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Record store
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Malformed file {file}: unexpected columns [{found}]")]
    MalformedFile { file: String, found: String },

    // ---------------------------
    // User input
    // ---------------------------
    #[error("Please enter a valid date: {0}")]
    InvalidDate(String),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid task type: {0} (use planned or actual)")]
    InvalidTaskType(String),

    #[error("Invalid status: {0} (use done, active, crit or milestone)")]
    InvalidStatus(String),

    #[error("No task #{index} for {date}")]
    InvalidIndex { index: usize, date: String },

    // ---------------------------
    // Stopwatch
    // ---------------------------
    #[error("Timer is already running")]
    TimerAlreadyRunning,

    #[error("No timer running")]
    TimerNotRunning,

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

pub type AppResult<T> = Result<T, AppError>;
