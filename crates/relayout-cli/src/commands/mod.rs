pub mod options;
pub mod recognize;
pub mod reconstruct;

use crate::output::OutputFormat;
use clap::Args;
use relayout_core::error::RelayoutError;
use relayout_core::options::{self as opts, builtin, ReconstructionOptions};
use std::path::PathBuf;

/// Options shared by every command that runs the engine.
#[derive(Args)]
pub struct LayoutArgs {
    /// JSON options file (overrides --preset)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Predefined options: standard, dense, loose
    #[arg(short, long, value_name = "NAME")]
    pub preset: Option<String>,

    /// Max vertical distance between fragments on one row
    #[arg(long, value_name = "F")]
    pub line_threshold: Option<f64>,

    /// Row gap that starts a new paragraph
    #[arg(long, value_name = "F")]
    pub paragraph_threshold: Option<f64>,

    /// Redact fragments below this confidence (0.0 - 1.0)
    #[arg(long, value_name = "F")]
    pub confidence_threshold: Option<f32>,

    /// Glyph used for redacted characters
    #[arg(long, value_name = "CHAR")]
    pub glyph: Option<char>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Include per-row diagnostics
    #[arg(long)]
    pub report: bool,
}

impl LayoutArgs {
    /// Resolve defaults, preset, config file and flag overrides, in that order.
    pub fn resolve(&self) -> Result<ReconstructionOptions, RelayoutError> {
        let mut options = match (&self.config, &self.preset) {
            (Some(path), _) => opts::load_options(path)?,
            (None, Some(name)) => builtin::load_preset(name)?.options,
            (None, None) => ReconstructionOptions::default(),
        };

        if let Some(v) = self.line_threshold {
            options.line_threshold = v;
        }
        if let Some(v) = self.paragraph_threshold {
            options.paragraph_threshold = v;
        }
        if let Some(v) = self.confidence_threshold {
            options.confidence_threshold = v;
        }
        if let Some(g) = self.glyph {
            options.redaction_glyph = g;
        }

        opts::validate_options(&options)?;
        Ok(options)
    }
}
