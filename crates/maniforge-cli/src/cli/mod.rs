//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "maniforge",
    bin_name = "maniforge",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{2699} Render manifest templates and validate the YAML output",
    long_about = "Maniforge renders the known manifest templates with their \
                  fixed data sets, writes the results, and checks every \
                  output parses as YAML.",
    after_help = "EXAMPLES:\n\
        \x20 maniforge render -t templates/service.j2 templates/deployment.j2 \
        -o out/service.yaml out/deployment.yaml\n\
        \x20 maniforge completions bash > /usr/share/bash-completion/completions/maniforge",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render templates and validate the outputs.
    #[command(
        visible_alias = "r",
        about = "Render templates into output files, then validate them",
        after_help = "EXAMPLES:\n\
            \x20 maniforge render --templates templates/service.j2 templates/deployment.j2 \
            --outputs out/service.yaml out/deployment.yaml"
    )]
    Render(RenderArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 maniforge completions bash > ~/.local/share/bash-completion/completions/maniforge\n\
            \x20 maniforge completions zsh  > ~/.zfunc/_maniforge\n\
            \x20 maniforge completions fish > ~/.config/fish/completions/maniforge.fish"
    )]
    Completions(CompletionsArgs),
}

// ── render ────────────────────────────────────────────────────────────────────

/// Arguments for `maniforge render`.
///
/// The two lists are paired positionally by index.  Their lengths are
/// deliberately *not* constrained here: the orchestrator owns the count
/// precondition so a mismatch surfaces as its own report, not as a clap
/// parse error.
#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Template file paths.
    #[arg(
        short = 't',
        long = "templates",
        value_name = "TEMPLATE",
        num_args = 1..,
        required = true,
        help = "Paths to the template files"
    )]
    pub templates: Vec<PathBuf>,

    /// Output file paths, paired with templates by position.
    #[arg(
        short = 'o',
        long = "outputs",
        value_name = "OUTPUT",
        num_args = 1..,
        required = true,
        help = "Paths to the output files"
    )]
    pub outputs: Vec<PathBuf>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `maniforge completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
