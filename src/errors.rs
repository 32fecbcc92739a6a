//! Unified application error type.
//! All modules (db, core, cli, export) return AppError so the error
//! handling stays consistent across the whole binary.

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

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid role: {0}")]
    InvalidRole(String),

    // ---------------------------
    // Attendance rejections
    // ---------------------------
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Outside allowed location radius: {0}")]
    OutsideGeofence(String),

    #[error("No active clock-in found for user {0}")]
    NoActiveSession(String),

    #[error("Username already exists: {0}")]
    DuplicateUsername(String),

    // ---------------------------
    // Boundary (identity/authorization)
    // ---------------------------
    #[error("Unauthenticated: {0}")]
    Unauthenticated(String),

    #[error("Not permitted: {0}")]
    Forbidden(String),

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

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
