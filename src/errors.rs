//! Unified application error type.
//! Ledger, session, export and cli code all return AppError so that every
//! failure can be reported the same way and the session keeps running.

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
    // Validation
    // ---------------------------
    #[error("{0}")]
    Validation(String),

    // ---------------------------
    // Index / selection errors
    // ---------------------------
    #[error("Invalid folder number: {0}")]
    InvalidFolder(usize),

    #[error("Invalid record number: {0}")]
    InvalidRecord(usize),

    #[error("No folder selected. Use 'folder select <N>' first.")]
    NoFolderSelected,

    // ---------------------------
    // Collaborators
    // ---------------------------
    #[error("Error scanning QR code: {0}")]
    Scan(String),

    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),

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
    // Session commands
    // ---------------------------
    #[error("{0}")]
    Command(String),
}

impl AppError {
    /// True for errors the user fixes by re-entering a value.
    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;
