//! Unified application error type.
//! Every module (db, core, cli, config) returns AppError so a failed command
//! always ends up as a single line on stderr and a non-zero exit status.

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
    // Store
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Corrupt rows
    // ---------------------------
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid action: {0}")]
    InvalidAction(String),

    // ---------------------------
    // Clock logic
    // ---------------------------
    #[error("{0}")]
    InvalidTransition(String),

    #[error("not enough records to calculate time elapsed")]
    InsufficientHistory,

    #[error("no records found, clock in first")]
    NoRecords,

    // ---------------------------
    // Config
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,
}

pub type AppResult<T> = Result<T, AppError>;
