use crate::layout::{Cell, RedactedRow, Row};
use crate::model::TextFragment;
use crate::options::ReconstructionOptions;

/// Whether a fragment with this confidence must be masked.
///
/// A threshold of 1.0 or more masks everything, including fragments that
/// report full confidence.
pub fn should_redact(confidence: f32, threshold: f32) -> bool {
    threshold >= 1.0 || confidence < threshold
}

/// Placeholder with one glyph per character of `text` (at least one).
pub fn placeholder(text: &str, glyph: char) -> String {
    let count = text.chars().count().max(1);
    std::iter::repeat(glyph).take(count).collect()
}

/// Produce the printable cell for one fragment.
pub fn redact_fragment(fragment: &TextFragment, options: &ReconstructionOptions) -> Cell {
    let redacted = should_redact(
        fragment.clamped_confidence(),
        options.confidence_threshold,
    );
    let text = if redacted {
        placeholder(&fragment.text, options.redaction_glyph)
    } else {
        fragment.text.clone()
    };
    Cell {
        text,
        bbox: fragment.bbox,
        redacted,
    }
}

pub fn redact_row(row: &Row, options: &ReconstructionOptions) -> RedactedRow {
    RedactedRow {
        y: row.y,
        cells: row
            .fragments
            .iter()
            .map(|f| redact_fragment(f, options))
            .collect(),
    }
}
