use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

pub const DEFAULT_LINE_THRESHOLD: f64 = 0.02;
pub const DEFAULT_PARAGRAPH_THRESHOLD: f64 = 0.05;
pub const DEFAULT_SMALL_GAP_THRESHOLD: f64 = 0.01;
pub const DEFAULT_SPACE_UNIT: f64 = 0.015;
pub const DEFAULT_CONFIDENCE_THRESHOLD: f32 = 0.3;
pub const DEFAULT_REDACTION_GLYPH: char = '□';

/// Where `y = 0` sits in a recognizer's normalized coordinate space.
///
/// Apple Vision style recognizers report boxes with a bottom-left origin,
/// so `y` grows upward and top-to-bottom reading order is `y` descending.
/// Tesseract and most raster tools use a top-left origin instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoordinateOrigin {
    #[default]
    BottomLeft,
    TopLeft,
}

impl CoordinateOrigin {
    /// Orders two `y` values so that the one nearer the top of the page
    /// comes first.
    pub fn reading_order(self, a: f64, b: f64) -> Ordering {
        match self {
            CoordinateOrigin::BottomLeft => b.total_cmp(&a),
            CoordinateOrigin::TopLeft => a.total_cmp(&b),
        }
    }
}

impl fmt::Display for CoordinateOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateOrigin::BottomLeft => write!(f, "bottom-left"),
            CoordinateOrigin::TopLeft => write!(f, "top-left"),
        }
    }
}

/// Tuning knobs for one reconstruction pass.
///
/// All distances are in normalized image units. Missing fields in a JSON
/// options file fall back to the defaults above.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconstructionOptions {
    /// Max vertical distance between consecutive fragments on one row.
    pub line_threshold: f64,
    /// Row-to-row gap above which a blank line is emitted.
    pub paragraph_threshold: f64,
    /// Gaps at or below this width become a single space.
    pub small_gap_threshold: f64,
    /// Approximate width of one space character.
    pub space_unit: f64,
    /// Fragments below this confidence are redacted.
    pub confidence_threshold: f32,
    pub redaction_glyph: char,
    pub origin: CoordinateOrigin,
}

impl Default for ReconstructionOptions {
    fn default() -> Self {
        ReconstructionOptions {
            line_threshold: DEFAULT_LINE_THRESHOLD,
            paragraph_threshold: DEFAULT_PARAGRAPH_THRESHOLD,
            small_gap_threshold: DEFAULT_SMALL_GAP_THRESHOLD,
            space_unit: DEFAULT_SPACE_UNIT,
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            redaction_glyph: DEFAULT_REDACTION_GLYPH,
            origin: CoordinateOrigin::default(),
        }
    }
}

/// A named, embedded options preset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresetDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub options: ReconstructionOptions,
}
