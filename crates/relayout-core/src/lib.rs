pub mod confidence;
pub mod error;
pub mod layout;
pub mod model;
pub mod options;
pub mod recognition;
pub mod redact;
pub mod report;

use confidence::mean_confidence;
use layout::assemble::assemble_row;
use layout::cluster::cluster_rows;
use layout::segment::{paragraph_breaks, segment_rows};
use recognition::Recognizer;
use redact::redact_row;

pub use error::{ReconstructionError, RelayoutError};
pub use model::{BoundingBox, ReconstructionResult, TextFragment};
pub use options::{CoordinateOrigin, ReconstructionOptions};
pub use report::{ReconstructionReport, RowSummary};

/// Main API entry point: rebuild layout-faithful text from unordered
/// recognizer fragments.
///
/// Fails only with [`RelayoutError::NoTextFound`], when the input is empty
/// or every fragment has blank text. Bad geometry is clamped, never
/// rejected.
pub fn reconstruct(
    fragments: &[TextFragment],
    options: &ReconstructionOptions,
) -> Result<ReconstructionResult, ReconstructionError> {
    reconstruct_detailed(fragments, options).map(|report| report.result)
}

/// Same pass as [`reconstruct`], also returning per-row diagnostics.
pub fn reconstruct_detailed(
    fragments: &[TextFragment],
    options: &ReconstructionOptions,
) -> Result<ReconstructionReport, ReconstructionError> {
    // Drop blank text and normalize geometry
    let mut geometry_clamped = 0;
    let usable: Vec<TextFragment> = fragments
        .iter()
        .filter(|f| !f.is_blank())
        .map(|f| {
            let bbox = f.bbox.clamped();
            if bbox != f.bbox {
                geometry_clamped += 1;
            }
            TextFragment { bbox, ..f.clone() }
        })
        .collect();

    let fragments_dropped = fragments.len() - usable.len();
    if usable.is_empty() {
        tracing::debug!(received = fragments.len(), "no usable fragments");
        return Err(RelayoutError::NoTextFound);
    }
    if geometry_clamped > 0 {
        tracing::warn!(count = geometry_clamped, "clamped out-of-range fragment geometry");
    }

    // Cluster into rows, top row first
    let rows = cluster_rows(&usable, options);
    tracing::debug!(
        fragments = usable.len(),
        dropped = fragments_dropped,
        rows = rows.len(),
        origin = %options.origin,
        "clustered fragments into rows"
    );

    // Redact, then assemble each row into a line
    let assembled: Vec<_> = rows
        .iter()
        .map(|row| assemble_row(&redact_row(row, options), options))
        .collect();
    let fragments_redacted: usize = assembled.iter().map(|r| r.redacted_count).sum();
    tracing::debug!(redacted = fragments_redacted, "assembled rows");

    // Paragraph segmentation
    let breaks = paragraph_breaks(&assembled, options);
    let text = segment_rows(&assembled, options).join("\n");

    // Aggregate over pre-redaction confidences, in reading order
    let confidences: Vec<f32> = rows
        .iter()
        .flat_map(|row| row.fragments.iter().map(|f| f.clamped_confidence()))
        .collect();
    let confidence = mean_confidence(&confidences);

    let summaries = assembled
        .into_iter()
        .zip(breaks)
        .enumerate()
        .map(|(index, (row, brk))| RowSummary {
            index,
            y: row.y,
            fragment_count: row.fragment_count,
            redacted_count: row.redacted_count,
            text: row.text,
            paragraph_break_before: brk,
        })
        .collect();

    Ok(ReconstructionReport {
        report_schema_version: report::REPORT_SCHEMA_VERSION.to_string(),
        result: ReconstructionResult { text, confidence },
        rows: summaries,
        fragments_used: usable.len(),
        fragments_dropped,
        fragments_redacted,
        geometry_clamped,
    })
}

/// Run a recognizer over `input` and reconstruct its fragments.
///
/// The recognizer's coordinate origin overrides `options.origin`.
/// Recognizer errors are returned unchanged.
pub fn recognize_and_reconstruct(
    input: &[u8],
    recognizer: &dyn Recognizer,
    options: &ReconstructionOptions,
) -> Result<ReconstructionResult, RelayoutError> {
    recognize_and_report(input, recognizer, options).map(|report| report.result)
}

pub fn recognize_and_report(
    input: &[u8],
    recognizer: &dyn Recognizer,
    options: &ReconstructionOptions,
) -> Result<ReconstructionReport, RelayoutError> {
    let fragments = recognizer.recognize(input)?;
    tracing::debug!(
        backend = recognizer.backend_name(),
        fragments = fragments.len(),
        "recognizer finished"
    );

    let options = ReconstructionOptions {
        origin: recognizer.origin(),
        ..options.clone()
    };
    reconstruct_detailed(&fragments, &options)
}
