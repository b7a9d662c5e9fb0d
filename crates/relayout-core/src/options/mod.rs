pub mod builtin;
pub mod schema;

use crate::error::RelayoutError;
use std::path::Path;

pub use schema::{CoordinateOrigin, PresetDef, ReconstructionOptions};

/// Load reconstruction options from a JSON file.
pub fn load_options(path: &Path) -> Result<ReconstructionOptions, RelayoutError> {
    let content = std::fs::read_to_string(path).map_err(|e| RelayoutError::OptionsLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_options(&content, path)
}

/// Parse options from a JSON string read from `source`.
pub fn parse_options(json: &str, source: &Path) -> Result<ReconstructionOptions, RelayoutError> {
    let options: ReconstructionOptions =
        serde_json::from_str(json).map_err(|e| RelayoutError::OptionsLoad {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_options(&options)?;
    Ok(options)
}

/// Parse options from a JSON string (no file path context).
pub fn parse_options_str(json: &str) -> Result<ReconstructionOptions, RelayoutError> {
    let options: ReconstructionOptions = serde_json::from_str(json).map_err(RelayoutError::Json)?;
    validate_options(&options)?;
    Ok(options)
}

/// Validate that loaded options are usable.
///
/// The engine accepts any options; this check exists for configuration
/// coming from files or the command line.
pub fn validate_options(options: &ReconstructionOptions) -> Result<(), RelayoutError> {
    let distances = [
        ("line_threshold", options.line_threshold),
        ("paragraph_threshold", options.paragraph_threshold),
        ("small_gap_threshold", options.small_gap_threshold),
        ("space_unit", options.space_unit),
    ];
    for (name, value) in distances {
        if !value.is_finite() || value < 0.0 {
            return Err(RelayoutError::OptionsInvalid(format!(
                "{name} must be a finite, non-negative number (got {value})"
            )));
        }
    }

    if options.space_unit == 0.0 {
        return Err(RelayoutError::OptionsInvalid(
            "space_unit must be greater than zero".into(),
        ));
    }

    let ct = options.confidence_threshold;
    if !(0.0..=1.0).contains(&ct) {
        return Err(RelayoutError::OptionsInvalid(format!(
            "confidence_threshold must be within 0.0..=1.0 (got {ct})"
        )));
    }

    if options.redaction_glyph.is_whitespace() || options.redaction_glyph.is_control() {
        return Err(RelayoutError::OptionsInvalid(
            "redaction_glyph must be a visible character".into(),
        ));
    }

    if options.paragraph_threshold < options.line_threshold {
        tracing::warn!(
            line = options.line_threshold,
            paragraph = options.paragraph_threshold,
            "paragraph_threshold is below line_threshold; every row break will read as a paragraph"
        );
    }

    Ok(())
}
