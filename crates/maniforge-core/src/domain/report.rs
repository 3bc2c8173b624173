//! Batch run reporting model.
//!
//! Every batch item walks the stage pipeline and lands in exactly one
//! terminal state; validation outcomes are collected separately because the
//! validation pass runs over the whole output list, not just the items that
//! were written. Reports are plain values — produced fresh per run, never
//! stored.

use std::path::PathBuf;

use serde::Serialize;

/// Pipeline stage at which an item can be skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Verbatim match of the template path against the known identifiers.
    Selection,
    /// Template file existence / readability.
    Existence,
    /// Placeholder marker presence in the template text.
    Placeholders,
    /// Data catalog lookup.
    Data,
    /// Substitution by the rendering engine.
    Render,
    /// Writing the rendered text to the output path.
    Write,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Selection => write!(f, "selection"),
            Self::Existence => write!(f, "existence check"),
            Self::Placeholders => write!(f, "placeholder check"),
            Self::Data => write!(f, "data selection"),
            Self::Render => write!(f, "render"),
            Self::Write => write!(f, "write"),
        }
    }
}

/// Terminal state of one (template, output) pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "state")]
pub enum ItemState {
    /// The rendered output was written to its destination.
    Written,
    /// The item was dropped at a stage boundary; the rest of the batch is
    /// unaffected.
    Skipped { stage: Stage, reason: String },
}

impl ItemState {
    pub fn is_written(&self) -> bool {
        matches!(self, Self::Written)
    }
}

/// Report for one batch item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemReport {
    pub template: PathBuf,
    pub output: PathBuf,
    pub state: ItemState,
}

/// Result of parsing one output file as a structured document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum ValidationOutcome {
    Valid,
    /// Parse failure, missing file, or any other validation failure — all
    /// collapse to invalid, each keeping its own diagnostic message.
    Invalid { reason: String },
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Validation report for one requested output path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub path: PathBuf,
    pub outcome: ValidationOutcome,
    /// The item feeding this output was skipped earlier, so an invalid
    /// outcome here is expected rather than a new failure.
    pub item_skipped: bool,
}

/// Aggregated result of a whole batch run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchReport {
    pub items: Vec<ItemReport>,
    pub validations: Vec<ValidationReport>,
}

impl BatchReport {
    pub fn written_count(&self) -> usize {
        self.items.iter().filter(|i| i.state.is_written()).count()
    }

    pub fn skipped_count(&self) -> usize {
        self.items.len() - self.written_count()
    }

    /// `true` when every requested output parsed as a valid document.
    pub fn all_valid(&self) -> bool {
        self.validations.iter().all(|v| v.outcome.is_valid())
    }

    /// `true` when nothing was skipped and everything validated.
    pub fn is_clean(&self) -> bool {
        self.skipped_count() == 0 && self.all_valid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(template: &str, output: &str) -> ItemReport {
        ItemReport {
            template: PathBuf::from(template),
            output: PathBuf::from(output),
            state: ItemState::Written,
        }
    }

    fn skipped(template: &str, output: &str, stage: Stage) -> ItemReport {
        ItemReport {
            template: PathBuf::from(template),
            output: PathBuf::from(output),
            state: ItemState::Skipped {
                stage,
                reason: "boom".into(),
            },
        }
    }

    #[test]
    fn counts_split_written_and_skipped() {
        let report = BatchReport {
            items: vec![
                written("templates/service.j2", "out/service.yaml"),
                skipped("templates/bogus.j2", "out/bogus.yaml", Stage::Selection),
            ],
            validations: vec![],
        };
        assert_eq!(report.written_count(), 1);
        assert_eq!(report.skipped_count(), 1);
    }

    #[test]
    fn all_valid_requires_every_outcome_valid() {
        let mut report = BatchReport::default();
        report.validations.push(ValidationReport {
            path: PathBuf::from("out/service.yaml"),
            outcome: ValidationOutcome::Valid,
            item_skipped: false,
        });
        assert!(report.all_valid());

        report.validations.push(ValidationReport {
            path: PathBuf::from("out/bogus.yaml"),
            outcome: ValidationOutcome::Invalid {
                reason: "does not exist".into(),
            },
            item_skipped: true,
        });
        assert!(!report.all_valid());
    }

    #[test]
    fn clean_report_has_no_skips_and_all_valid() {
        let report = BatchReport {
            items: vec![written("templates/service.j2", "out/service.yaml")],
            validations: vec![ValidationReport {
                path: PathBuf::from("out/service.yaml"),
                outcome: ValidationOutcome::Valid,
                item_skipped: false,
            }],
        };
        assert!(report.is_clean());
    }

    #[test]
    fn stage_display_is_human_readable() {
        assert_eq!(Stage::Placeholders.to_string(), "placeholder check");
        assert_eq!(Stage::Selection.to_string(), "selection");
    }
}
