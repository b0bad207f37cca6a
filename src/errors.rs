//! Unified application error type.
//! All modules (api, core, cli, config, export) return AppError to keep the
//! error handling consistent and easy to manage.

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
    // Time-tracking service
    // ---------------------------
    #[error("Network error: {0}")]
    Http(String),

    #[error("Time-tracking API error: http {status}{}", format_body(.body))]
    Api { status: u16, body: String },

    #[error("Invalid API payload: {0}")]
    Payload(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid work window: {0}")]
    InvalidWindow(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing configuration value: {0}")]
    MissingConfig(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

fn format_body(body: &str) -> String {
    if body.trim().is_empty() {
        String::new()
    } else {
        format!("; body={body}")
    }
}

pub type AppResult<T> = Result<T, AppError>;
