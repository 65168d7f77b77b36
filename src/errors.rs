//! Unified application error type.
//! All modules (store, db, core, cli) return AppError to keep the error
//! handling consistent and easy to manage.
//!
//! Domain outcomes a caller must act on (sheet missing, date not in the
//! table, unknown start name) are NOT errors: mutating operations return an
//! `Outcome` value instead, and only I/O, database or contract violations
//! travel through this enum.

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
    // Document store
    // ---------------------------
    #[error("Document error: {0}")]
    Document(#[from] serde_json::Error),

    #[error("Roster document not found: {0}")]
    DocumentMissing(String),

    // ---------------------------
    // Parsing / validation errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid shift literal: '{0}' (expected 'morning' or 'afternoon')")]
    InvalidShift(String),

    #[error("Invalid month key: '{0}' (expected 'm-yyyy')")]
    InvalidMonthKey(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
