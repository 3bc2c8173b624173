// ============================================================================
// domain/error.rs - DOMAIN ERROR TAXONOMY
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reports keep copies of their causes)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    /// The template text carries no `{{` / `}}` marker pair at all.
    #[error("No placeholders found in the template: {path}")]
    MissingPlaceholders { path: String },

    /// No substitution data is registered for the selected template.
    #[error("Template data is missing for the file: {path}")]
    MissingData { path: String },

    // ========================================================================
    // Not Found Errors (404-level equivalent)
    // ========================================================================
    /// The path does not match any of the known template identifiers.
    #[error("Unknown template file: {path}")]
    UnknownTemplate { path: String },

    // ========================================================================
    // Batch Preconditions
    // ========================================================================
    /// The template-path list and output-path list differ in length.
    /// Fatal to the whole run, checked before any file I/O.
    #[error(
        "Number of template files ({templates}) and output files ({outputs}) should be the same"
    )]
    CountMismatch { templates: usize, outputs: usize },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingPlaceholders { path } => vec![
                format!("'{}' contains no {{{{ }}}} interpolation sites", path),
                "A template must reference at least one variable".into(),
                "Check that the file is a template and not already rendered output".into(),
            ],
            Self::MissingData { path } => vec![
                format!("No substitution data set is registered for '{}'", path),
                "The data catalog only covers the known template identifiers".into(),
            ],
            Self::UnknownTemplate { path } => vec![
                format!("'{}' is not a recognized template identifier", path),
                "Known templates:".into(),
                "  • templates/service.j2".into(),
                "  • templates/deployment.j2".into(),
            ],
            Self::CountMismatch { templates, outputs } => vec![
                format!("{} template path(s) but {} output path(s)", templates, outputs),
                "Each template path must be paired with exactly one output path".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingPlaceholders { .. } | Self::MissingData { .. } => ErrorCategory::Validation,
            Self::UnknownTemplate { .. } => ErrorCategory::NotFound,
            Self::CountMismatch { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
}
