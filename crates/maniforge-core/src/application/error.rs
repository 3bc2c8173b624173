//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not business
//! logic. Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
///
/// The write-failure variants are deliberately split three ways
/// (directory missing / permission / other) because the batch report
/// surfaces each with its own message.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    // ── Template reading ───────────────────────────────────────────────────
    /// The template file does not exist.
    #[error("Template file '{path}' not found")]
    TemplateNotFound { path: PathBuf },

    /// The template file exists but could not be read.
    #[error("An error occurred while reading the template file '{path}': {reason}")]
    TemplateUnreadable { path: PathBuf, reason: String },

    // ── Rendering ──────────────────────────────────────────────────────────
    /// The rendering engine rejected the template.
    #[error("Template rendering failed: {reason}")]
    RenderFailed { reason: String },

    // ── Output writing ─────────────────────────────────────────────────────
    /// The destination directory does not exist.
    #[error("The directory for '{path}' does not exist")]
    DirectoryMissing { path: PathBuf },

    /// Writing was refused by the OS.
    #[error("Permission denied while writing '{path}'")]
    PermissionDenied { path: PathBuf },

    /// Any other I/O failure while writing.
    #[error("An error occurred while writing the output file '{path}': {reason}")]
    WriteFailed { path: PathBuf, reason: String },

    // ── Validation ─────────────────────────────────────────────────────────
    /// The output file is not a well-formed document.
    #[error("Invalid YAML format for file '{path}': {reason}")]
    InvalidDocument { path: PathBuf, reason: String },

    /// The output file to validate does not exist.
    #[error("The file '{path}' does not exist")]
    OutputMissing { path: PathBuf },

    /// Any other failure while validating.
    #[error("Error occurred while checking YAML file '{path}': {reason}")]
    ValidationFailed { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound { path } => vec![
                format!("No template at '{}'", path.display()),
                "Check the path is relative to the working directory".into(),
            ],
            Self::DirectoryMissing { path } => vec![
                format!("The parent directory of '{}' is missing", path.display()),
                "Create the output directory before running the batch".into(),
            ],
            Self::PermissionDenied { path } => vec![
                format!("Cannot write '{}'", path.display()),
                "Check write permissions on the output directory".into(),
            ],
            Self::InvalidDocument { path, .. } => vec![
                format!("'{}' did not parse as YAML", path.display()),
                "Inspect the rendered output for unbalanced indentation".into(),
                "Check the template for placeholders that render to invalid YAML".into(),
            ],
            Self::OutputMissing { path } => vec![
                format!("'{}' was never written", path.display()),
                "Validation runs over every requested output, including skipped items".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. } | Self::OutputMissing { .. } => ErrorCategory::NotFound,
            Self::TemplateUnreadable { .. }
            | Self::DirectoryMissing { .. }
            | Self::PermissionDenied { .. }
            | Self::WriteFailed { .. } => ErrorCategory::Io,
            Self::InvalidDocument { .. } => ErrorCategory::Validation,
            Self::RenderFailed { .. } | Self::ValidationFailed { .. } => ErrorCategory::Internal,
        }
    }
}
