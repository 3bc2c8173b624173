//! Batch Service - main application orchestrator.
//!
//! This service coordinates the whole batch workflow:
//! 1. Check the path-list precondition (counts must match)
//! 2. Drive each (template, output) pair through the item pipeline
//! 3. Run the validation pass over every requested output path
//!
//! A failure on one item never affects the others; only the count
//! precondition aborts the run, and it does so before any file I/O.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{DocumentValidator, Filesystem, TemplateRenderer},
    },
    domain::{
        BatchReport, DataCatalog, DomainError, ItemReport, ItemState, Stage, TemplateKind,
        ValidationOutcome, ValidationReport, has_placeholders,
    },
    error::{ManiforgeError, ManiforgeResult},
};

/// Main batch rendering service.
///
/// Orchestrates selection, rendering, writing, and the validation pass.
pub struct BatchService {
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
    validator: Box<dyn DocumentValidator>,
    catalog: DataCatalog,
}

impl BatchService {
    /// Create a new batch service with the given adapters.
    ///
    /// The data catalog defaults to the fixed service/deployment sets.
    pub fn new(
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
        validator: Box<dyn DocumentValidator>,
    ) -> Self {
        Self {
            renderer,
            filesystem,
            validator,
            catalog: DataCatalog::standard(),
        }
    }

    /// Replace the data catalog (sparse catalogs exercise the missing-data
    /// path in tests).
    pub fn with_catalog(mut self, catalog: DataCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Run one batch over positionally paired template and output paths.
    ///
    /// This is the main use case. Returns the aggregated report; the only
    /// error it can return is the fatal count-mismatch precondition.
    #[instrument(skip_all, fields(templates = templates.len(), outputs = outputs.len()))]
    pub fn run(&self, templates: &[PathBuf], outputs: &[PathBuf]) -> ManiforgeResult<BatchReport> {
        // Precondition: paired lists. Checked before any file I/O so a
        // mismatch has no partial effects.
        if templates.len() != outputs.len() {
            return Err(DomainError::CountMismatch {
                templates: templates.len(),
                outputs: outputs.len(),
            }
            .into());
        }

        info!(count = templates.len(), "Batch started");

        let items: Vec<ItemReport> = templates
            .iter()
            .zip(outputs)
            .map(|(template, output)| ItemReport {
                template: template.clone(),
                output: output.clone(),
                state: self.process_item(template, output),
            })
            .collect();

        // The validation pass covers every requested output path, not just
        // the writes that succeeded. Outputs of skipped items therefore
        // surface as "does not exist" and are labeled so the presenter can
        // tell an expected miss from a fresh failure.
        let skipped: HashSet<&Path> = items
            .iter()
            .filter(|i| !i.state.is_written())
            .map(|i| i.output.as_path())
            .collect();

        let validations = outputs
            .iter()
            .map(|output| ValidationReport {
                path: output.clone(),
                outcome: self.validate_output(output),
                item_skipped: skipped.contains(output.as_path()),
            })
            .collect();

        let report = BatchReport { items, validations };
        info!(
            written = report.written_count(),
            skipped = report.skipped_count(),
            valid = report.all_valid(),
            "Batch completed"
        );
        Ok(report)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Drive one item through the stage pipeline.
    ///
    /// `selection → existence → placeholders → data → render → write`,
    /// stopping at the first failing boundary. Unknown templates
    /// short-circuit at selection with no file I/O attempted.
    fn process_item(&self, template: &Path, output: &Path) -> ItemState {
        let Some(kind) = TemplateKind::from_path(template) else {
            return skip(
                Stage::Selection,
                DomainError::UnknownTemplate {
                    path: template.display().to_string(),
                },
            );
        };

        if !self.filesystem.exists(template) {
            return skip(
                Stage::Existence,
                ApplicationError::TemplateNotFound {
                    path: template.to_path_buf(),
                },
            );
        }
        let source = match self.filesystem.read_to_string(template) {
            Ok(source) => source,
            Err(e) => return skip(Stage::Existence, e),
        };

        if !has_placeholders(&source) {
            return skip(
                Stage::Placeholders,
                DomainError::MissingPlaceholders {
                    path: template.display().to_string(),
                },
            );
        }

        let Some(data) = self.catalog.get(kind) else {
            return skip(
                Stage::Data,
                DomainError::MissingData {
                    path: template.display().to_string(),
                },
            );
        };
        debug!(%kind, variables = data.len(), "Data selected");

        let rendered = match self.renderer.render(&source, data) {
            Ok(rendered) => rendered,
            Err(e) => return skip(Stage::Render, e),
        };

        match self.filesystem.write_file(output, &rendered) {
            Ok(()) => {
                info!(output = %output.display(), "Output file created");
                ItemState::Written
            }
            Err(e) => skip(Stage::Write, e),
        }
    }

    /// Parse one output file, collapsing every failure to an invalid
    /// outcome that keeps its diagnostic message.
    fn validate_output(&self, output: &Path) -> ValidationOutcome {
        match self.validator.validate(output) {
            Ok(()) => ValidationOutcome::Valid,
            Err(e) => ValidationOutcome::Invalid {
                reason: e.to_string(),
            },
        }
    }
}

/// Record a skip, logging it at the scope it happened.
fn skip(stage: Stage, error: impl Into<ManiforgeError>) -> ItemState {
    let error = error.into();
    warn!(%stage, %error, "Item skipped");
    ItemState::Skipped {
        stage,
        reason: error.to_string(),
    }
}
