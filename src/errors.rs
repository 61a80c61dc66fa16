//! Unified application error type.
//! All modules (import, verify, session, db, cli) return AppError so the
//! front end can surface any failure with a single `Display` call.

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
    // Local store
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Stored session data is corrupted: {0}")]
    Storage(#[from] serde_json::Error),

    // ---------------------------
    // Spreadsheet import
    // ---------------------------
    #[error("Please select a valid Excel file (.xls or .xlsx).")]
    UnsupportedFile(String),

    #[error("Unable to read workbook: {0}")]
    Workbook(String),

    // ---------------------------
    // Row editing
    // ---------------------------
    #[error("Invalid hours value: {0}")]
    InvalidHours(String),

    #[error("Row {0} does not exist")]
    RowNotFound(String),

    // ---------------------------
    // Submission
    // ---------------------------
    #[error("Email is required")]
    EmailRequired,

    #[error("Timesheet entries are required")]
    RowsRequired,

    #[error("A submission is already in progress")]
    SubmissionInFlight,

    /// Non-2xx answer from the verification service.
    #[error("{message}")]
    Verification { status: u16, message: String },

    /// Network failure or unreadable response body. The detail is logged,
    /// the user only sees the fixed message.
    #[error("An error occurred while sending data to the backend")]
    Transport(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Template export
    // ---------------------------
    #[error("Template error: {0}")]
    Template(String),
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Transport(e.to_string())
    }
}

impl From<calamine::Error> for AppError {
    fn from(e: calamine::Error) -> Self {
        AppError::Workbook(e.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(e: serde_yaml::Error) -> Self {
        AppError::Config(e.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for AppError {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        AppError::Template(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
