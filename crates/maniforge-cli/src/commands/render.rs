//! Implementation of the `maniforge render` command.
//!
//! Responsibility: wire real adapters into the core batch service, run the
//! batch, and present the report. No business logic lives here.

use tracing::{debug, instrument};

use maniforge_adapters::{JinjaRenderer, LocalFilesystem, YamlValidator};
use maniforge_core::{
    application::BatchService,
    domain::{BatchReport, ItemState, ValidationOutcome},
};

use crate::{
    cli::{OutputFormat, RenderArgs},
    error::CliResult,
    output::OutputManager,
};

/// Execute the `maniforge render` command.
///
/// Dispatch sequence:
/// 1. Assemble the batch service from the production adapters
/// 2. Run the batch (the count precondition is the only fatal error)
/// 3. Present the report, human or JSON
///
/// Per-item failures are part of the report and do not fail the command.
#[instrument(skip_all, fields(templates = args.templates.len(), outputs = args.outputs.len()))]
pub fn execute(args: RenderArgs, output: OutputManager) -> CliResult<()> {
    // 1. Assemble service
    let service = BatchService::new(
        Box::new(JinjaRenderer::new()),
        Box::new(LocalFilesystem::new()),
        Box::new(YamlValidator::new()),
    );

    debug!("Batch service assembled");

    // 2. Run — the `?` here only fires on the count-mismatch precondition.
    let report = service.run(&args.templates, &args.outputs)?;

    // 3. Present
    match output.format() {
        OutputFormat::Json => present_json(&report, &output)?,
        _ => present_human(&report, &output)?,
    }

    Ok(())
}

/// Human-readable presentation of a batch report.
///
/// Item results first, then the validation section covering every requested
/// output path.
fn present_human(report: &BatchReport, output: &OutputManager) -> CliResult<()> {
    for item in &report.items {
        match &item.state {
            ItemState::Written => {
                output.success(&format!(
                    "Output File '{}' has been created.",
                    item.output.display()
                ))?;
            }
            ItemState::Skipped { stage, reason } => {
                output.error(&format!(
                    "Skipped '{}' at {}: {}",
                    item.template.display(),
                    stage,
                    reason
                ))?;
            }
        }
    }

    output.print("")?;
    output.header("YAML Validation of Output file")?;
    output.header("-------------------------------")?;

    for validation in &report.validations {
        match &validation.outcome {
            ValidationOutcome::Valid => {
                output.success(&format!(
                    "The '{}' is a valid YAML file.",
                    validation.path.display()
                ))?;
            }
            ValidationOutcome::Invalid { reason } => {
                // An invalid output whose item was skipped earlier is an
                // expected miss, not a fresh failure.
                if validation.item_skipped {
                    output.warning(&format!(
                        "The '{}' is an invalid YAML file. ({reason})",
                        validation.path.display()
                    ))?;
                } else {
                    output.error(&format!(
                        "The '{}' is an invalid YAML file. ({reason})",
                        validation.path.display()
                    ))?;
                }
            }
        }
    }

    Ok(())
}

/// JSON presentation: the serialised report on stdout, nothing else.
fn present_json(report: &BatchReport, output: &OutputManager) -> CliResult<()> {
    let json = serde_json::to_string_pretty(report).map_err(|e| crate::error::CliError::IoError {
        message: format!("Failed to serialise report: {e}"),
        source: std::io::Error::other(e),
    })?;
    output.print(&json)?;
    Ok(())
}
