//! Unified application error type.
//! All modules (core, provider, import, export, cli) return AppError to keep
//! the error handling consistent and easy to manage.

use crate::models::RecordId;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Workbook errors
    // ---------------------------
    #[error("Record #{0} not found")]
    RecordNotFound(RecordId),

    #[error("No record is being edited")]
    NotEditing,

    #[error("Field '{0}' cannot be edited")]
    FieldNotEditable(String),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Invalid email status: {0}")]
    InvalidStatus(String),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

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
    // Import / export errors
    // ---------------------------
    #[error("Import error: {0}")]
    Import(String),

    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Enrichment provider
    // ---------------------------
    #[error("Enrichment provider error: {0}")]
    Provider(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
