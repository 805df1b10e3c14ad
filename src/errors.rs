//! Unified application error type.
//! All modules (store, session, core, cli, utils) return AppError to keep
//! the error handling consistent and easy to manage.

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
    // Serialization
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid view mode: {0}")]
    InvalidViewMode(String),

    #[error("Invalid field: {0}")]
    InvalidField(String),

    // ---------------------------
    // Store errors
    // ---------------------------
    #[error("Record store error: {0}")]
    Store(String),

    // ---------------------------
    // Session errors
    // ---------------------------
    #[error("Session error: {0}")]
    Session(String),

    // ---------------------------
    // Project errors
    // ---------------------------
    #[error("Project error: {0}")]
    Project(String),

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
