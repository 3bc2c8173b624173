//! YAML well-formedness validator backed by serde_yaml.

use std::io;
use std::path::Path;

use maniforge_core::{
    application::{ApplicationError, ports::DocumentValidator},
    error::ManiforgeResult,
};
use tracing::instrument;

/// Validates that a written output parses as a YAML document.
///
/// Well-formedness only — no schema is applied.
#[derive(Debug, Clone, Copy)]
pub struct YamlValidator;

impl YamlValidator {
    /// Create a new YAML validator.
    pub fn new() -> Self {
        Self
    }
}

impl Default for YamlValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentValidator for YamlValidator {
    #[instrument(skip_all, fields(path = %path.display()))]
    fn validate(&self, path: &Path) -> ManiforgeResult<()> {
        let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ApplicationError::OutputMissing {
                path: path.to_path_buf(),
            },
            _ => ApplicationError::ValidationFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            },
        })?;

        serde_yaml::from_str::<serde_yaml::Value>(&text)
            .map(|_| ())
            .map_err(|e| {
                ApplicationError::InvalidDocument {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                }
                .into()
            })
    }
}
