//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `maniforge-adapters` crate provides implementations.

use crate::domain::TemplateData;
use crate::error::ManiforgeResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `maniforge_adapters::filesystem::LocalFilesystem` (production)
/// - `maniforge_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Whole-file reads and writes only: every open is scoped and released on
///   all exit paths, error paths included
/// - Writes overwrite any existing file at the destination
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Read a whole file into a string.
    ///
    /// Errors distinguish a missing file (`TemplateNotFound`) from any
    /// other read failure (`TemplateUnreadable`).
    fn read_to_string(&self, path: &Path) -> ManiforgeResult<String>;

    /// Write content to a file, overwriting it if present.
    ///
    /// Errors distinguish a missing destination directory, a permission
    /// refusal, and any other I/O failure.
    fn write_file(&self, path: &Path, content: &str) -> ManiforgeResult<()>;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `maniforge_adapters::renderer::JinjaRenderer` (minijinja substitution)
pub trait TemplateRenderer: Send + Sync {
    /// Substitute placeholders in `source` using `data`.
    ///
    /// Undefined-key policy is the adapter's: the production renderer is
    /// lenient and substitutes the empty string. The null-mapping case never
    /// reaches this port — the orchestrator reports missing data first.
    fn render(&self, source: &str, data: &TemplateData) -> ManiforgeResult<String>;
}

/// Port for structural validation of written output files.
///
/// Implemented by:
/// - `maniforge_adapters::validator::YamlValidator`
pub trait DocumentValidator: Send + Sync {
    /// Parse the file at `path` as a structured document.
    ///
    /// `Ok(())` means well-formed. Errors distinguish a parse failure, a
    /// missing file, and a generic failure; the orchestrator collapses all
    /// three to "invalid" while keeping the message.
    fn validate(&self, path: &Path) -> ManiforgeResult<()>;
}
