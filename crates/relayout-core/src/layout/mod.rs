//! Geometric layout recovery: rows, intra-row spacing and paragraph breaks.
//!
//! The stages run in order: [`cluster::cluster_rows`] groups fragments into
//! rows, [`crate::redact::redact_row`] masks unreliable text,
//! [`assemble::assemble_row`] turns each row into one line, and
//! [`segment::segment_rows`] decides where blank lines go.

pub mod assemble;
pub mod cluster;
pub mod segment;

use crate::model::{BoundingBox, TextFragment};
use std::cmp::Ordering;

/// Fragments judged to share one horizontal text line.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Mean `y` of the member fragments.
    pub y: f64,
    pub fragments: Vec<TextFragment>,
}

impl Row {
    pub(crate) fn from_fragments(fragments: Vec<TextFragment>) -> Row {
        let y = fragments.iter().map(|f| f.bbox.y).sum::<f64>() / fragments.len().max(1) as f64;
        Row { y, fragments }
    }
}

/// A fragment after redaction: the text that will actually be printed.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub text: String,
    pub bbox: BoundingBox,
    pub redacted: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RedactedRow {
    pub y: f64,
    pub cells: Vec<Cell>,
}

impl RedactedRow {
    pub fn redacted_count(&self) -> usize {
        self.cells.iter().filter(|c| c.redacted).count()
    }
}

/// One assembled output line with the geometry needed for segmentation.
#[derive(Debug, Clone, PartialEq)]
pub struct AssembledRow {
    pub y: f64,
    pub text: String,
    pub fragment_count: usize,
    pub redacted_count: usize,
}

/// Total order on fragments by `x`, with every remaining field as a
/// tie-breaker so that equal-position fragments still sort the same way
/// regardless of input order.
pub(crate) fn cmp_horizontal(a: &BoundingBox, b: &BoundingBox) -> Ordering {
    a.x.total_cmp(&b.x)
        .then_with(|| a.width.total_cmp(&b.width))
        .then_with(|| a.y.total_cmp(&b.y))
        .then_with(|| a.height.total_cmp(&b.height))
}
