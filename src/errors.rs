//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Record encoding error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration format error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Storage
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("Store is closed: {0}")]
    StoreClosed(String),

    // ---------------------------
    // Record lookups
    // ---------------------------
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("A record with key {0} already exists")]
    DuplicateKey(String),

    // ---------------------------
    // User input
    // ---------------------------
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    // ---------------------------
    // Sync
    // ---------------------------
    #[error("{0} does not exist or is not a directory")]
    NotADirectory(PathBuf),

    #[error("Aborted: {0}")]
    Aborted(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No configuration found at {0}, run `rreading init` first")]
    ConfigMissing(PathBuf),
}

pub type AppResult<T> = Result<T, AppError>;
