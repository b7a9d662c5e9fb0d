use crate::model::ReconstructionResult;
use serde::{Deserialize, Serialize};

pub const REPORT_SCHEMA_VERSION: &str = "1.0";

/// Diagnostics for one assembled row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowSummary {
    pub index: usize,
    /// Representative (mean) `y` of the row's fragments.
    pub y: f64,
    pub fragment_count: usize,
    pub redacted_count: usize,
    pub text: String,
    pub paragraph_break_before: bool,
}

/// The reconstruction result plus what happened on the way there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconstructionReport {
    pub report_schema_version: String,
    pub result: ReconstructionResult,
    pub rows: Vec<RowSummary>,
    pub fragments_used: usize,
    /// Fragments discarded because their text was blank.
    pub fragments_dropped: usize,
    pub fragments_redacted: usize,
    /// Fragments whose box had to be clamped into the unit square.
    pub geometry_clamped: usize,
}

impl ReconstructionReport {
    pub fn paragraph_count(&self) -> usize {
        if self.rows.is_empty() {
            return 0;
        }
        1 + self.rows.iter().filter(|r| r.paragraph_break_before).count()
    }
}
