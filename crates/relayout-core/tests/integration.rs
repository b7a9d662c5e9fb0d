//! Integration tests for the reconstruct() pipeline.
//!
//! Uses a MockRecognizer that returns pre-built fragments without
//! invoking tesseract, so these tests run without any OCR engine installed.

use relayout_core::error::RelayoutError;
use relayout_core::options::builtin::load_preset;
use relayout_core::recognition::json::JsonRecognizer;
use relayout_core::recognition::Recognizer;
use relayout_core::{
    reconstruct, reconstruct_detailed, recognize_and_reconstruct, BoundingBox, CoordinateOrigin,
    ReconstructionOptions, TextFragment,
};

struct MockRecognizer {
    fragments: Vec<TextFragment>,
    origin: CoordinateOrigin,
}

impl Recognizer for MockRecognizer {
    fn recognize(&self, _input: &[u8]) -> Result<Vec<TextFragment>, RelayoutError> {
        Ok(self.fragments.clone())
    }

    fn origin(&self) -> CoordinateOrigin {
        self.origin
    }

    fn backend_name(&self) -> &str {
        "mock"
    }
}

struct FailingRecognizer;

impl Recognizer for FailingRecognizer {
    fn recognize(&self, _input: &[u8]) -> Result<Vec<TextFragment>, RelayoutError> {
        Err(RelayoutError::InvalidImage("no pixels".into()))
    }

    fn origin(&self) -> CoordinateOrigin {
        CoordinateOrigin::BottomLeft
    }

    fn backend_name(&self) -> &str {
        "failing"
    }
}

fn frag(text: &str, confidence: f32, x: f64, y: f64, width: f64) -> TextFragment {
    TextFragment::new(text, confidence, BoundingBox::new(x, y, width, 0.05))
}

// ---------------------------------------------------------------------------
// Two fragments on the same row, separated by a wide gap
// ---------------------------------------------------------------------------
#[test]
fn same_row_wide_gap_keeps_spacing() {
    let fragments = vec![
        frag("Hello", 0.9, 0.05, 0.5, 0.15),
        frag("World", 0.9, 0.30, 0.5, 0.15),
    ];
    let result = reconstruct(&fragments, &ReconstructionOptions::default()).unwrap();

    assert!(result.text.starts_with("Hello "));
    assert!(result.text.ends_with(" World"));
    // gap 0.10 at 0.015 per space
    assert_eq!(result.text.matches(' ').count(), 7);
    assert!(!result.text.contains('\n'));
    assert!((result.confidence - 0.9).abs() < 1e-6);
}

// ---------------------------------------------------------------------------
// Rows with normal line spacing are consecutive lines
// ---------------------------------------------------------------------------
#[test]
fn close_rows_have_no_blank_line() {
    let fragments = vec![
        frag("second line", 0.9, 0.1, 0.77, 0.3),
        frag("first line", 0.9, 0.1, 0.80, 0.3),
    ];
    let result = reconstruct(&fragments, &ReconstructionOptions::default()).unwrap();
    assert_eq!(result.text, "first line\nsecond line");
}

// ---------------------------------------------------------------------------
// A large vertical gap starts a new paragraph
// ---------------------------------------------------------------------------
#[test]
fn distant_rows_get_blank_line() {
    let fragments = vec![
        frag("Title", 0.9, 0.1, 0.80, 0.2),
        frag("Body", 0.9, 0.1, 0.70, 0.2),
    ];
    let result = reconstruct(&fragments, &ReconstructionOptions::default()).unwrap();
    assert_eq!(result.text, "Title\n\nBody");
    assert!(result.text.lines().any(|l| l.is_empty()));
}

// ---------------------------------------------------------------------------
// A low-confidence fragment is replaced by glyphs of equal length
// ---------------------------------------------------------------------------
#[test]
fn low_confidence_fragment_is_redacted() {
    let fragments = vec![frag("abc", 0.1, 0.1, 0.5, 0.1)];
    let result = reconstruct(&fragments, &ReconstructionOptions::default()).unwrap();
    assert_eq!(result.text, "□□□");
}

#[test]
fn redaction_inside_a_line_keeps_neighbours() {
    let fragments = vec![
        frag("Total:", 0.95, 0.05, 0.5, 0.12),
        frag("1,234", 0.2, 0.18, 0.5, 0.10),
        frag("JPY", 0.95, 0.29, 0.5, 0.06),
    ];
    let result = reconstruct(&fragments, &ReconstructionOptions::default()).unwrap();
    assert_eq!(result.text, "Total: □□□□□ JPY");
}

#[test]
fn empty_input_is_no_text_found() {
    assert!(matches!(
        reconstruct(&[], &ReconstructionOptions::default()),
        Err(RelayoutError::NoTextFound)
    ));
}

#[test]
fn each_row_starts_at_its_first_fragment() {
    let fragments = vec![
        frag("fn main() {", 0.9, 0.05, 0.80, 0.33),
        frag("run();", 0.9, 0.11, 0.77, 0.18),
        frag("}", 0.9, 0.05, 0.74, 0.03),
    ];
    let result = reconstruct(&fragments, &ReconstructionOptions::default()).unwrap();
    assert_eq!(result.text, "fn main() {\nrun();\n}");
}

#[test]
fn table_columns_keep_relative_spacing() {
    let fragments = vec![
        frag("Item", 0.9, 0.05, 0.60, 0.08),
        frag("Qty", 0.9, 0.50, 0.60, 0.06),
        frag("Apples", 0.9, 0.05, 0.57, 0.12),
        frag("12", 0.9, 0.50, 0.57, 0.04),
    ];
    let result = reconstruct(&fragments, &ReconstructionOptions::default()).unwrap();
    let lines: Vec<&str> = result.text.lines().collect();
    assert_eq!(lines.len(), 2);
    // gap 0.37 -> 25 spaces, gap 0.33 -> 22 spaces
    assert_eq!(lines[0], format!("Item{}Qty", " ".repeat(25)));
    assert_eq!(lines[1], format!("Apples{}12", " ".repeat(22)));
}

#[test]
fn out_of_range_geometry_is_clamped_not_rejected() {
    let fragments = vec![
        TextFragment::new("edge", 0.9, BoundingBox::new(-0.5, 1.3, 0.2, -0.1)),
        TextFragment::new("inside", 0.9, BoundingBox::new(0.3, 0.99, 0.2, 0.05)),
    ];
    let report = reconstruct_detailed(&fragments, &ReconstructionOptions::default()).unwrap();
    assert_eq!(report.geometry_clamped, 1);
    assert_eq!(report.rows.len(), 1);
    assert!(report.result.text.starts_with("edge"));
}

#[test]
fn recognizer_origin_overrides_options() {
    // Top-left coordinates: the smaller y is the upper line.
    let recognizer = MockRecognizer {
        fragments: vec![
            frag("bottom", 0.9, 0.1, 0.40, 0.2),
            frag("top", 0.9, 0.1, 0.10, 0.2),
        ],
        origin: CoordinateOrigin::TopLeft,
    };
    let result =
        recognize_and_reconstruct(b"img", &recognizer, &ReconstructionOptions::default()).unwrap();
    assert_eq!(result.text, "top\n\nbottom");
}

#[test]
fn recognizer_errors_pass_through() {
    let err = recognize_and_reconstruct(b"", &FailingRecognizer, &ReconstructionOptions::default())
        .unwrap_err();
    assert!(matches!(err, RelayoutError::InvalidImage(_)));
}

#[test]
fn json_backend_feeds_the_same_engine() {
    let body = br#"{"fragments": [
        {"text": "World", "confidence": 0.9, "box": {"x": 0.30, "y": 0.5, "width": 0.15, "height": 0.05}},
        {"text": "Hello", "confidence": 0.9, "box": {"x": 0.05, "y": 0.5, "width": 0.15, "height": 0.05}}
    ]}"#;
    let result =
        recognize_and_reconstruct(body, &JsonRecognizer::new(), &ReconstructionOptions::default())
            .unwrap();
    assert_eq!(result.text, format!("Hello{}World", " ".repeat(7)));
}

#[test]
fn presets_change_grouping() {
    // 0.025 apart: separate rows by default, one row under "loose".
    let fragments = vec![
        frag("left", 0.9, 0.05, 0.500, 0.10),
        frag("right", 0.9, 0.50, 0.525, 0.10),
    ];
    let standard = load_preset("standard").unwrap().options;
    let loose = load_preset("loose").unwrap().options;

    let a = reconstruct(&fragments, &standard).unwrap();
    let b = reconstruct(&fragments, &loose).unwrap();
    assert_eq!(a.text.lines().count(), 2);
    assert_eq!(b.text.lines().count(), 1);
}

#[test]
fn json_single_fragment_is_still_redacted() {
    let body = br#"{"text": "secret", "confidence": 0.1, "box": {"x": 0.1, "y": 0.5, "width": 0.2, "height": 0.05}}"#;
    let result =
        recognize_and_reconstruct(body, &JsonRecognizer::new(), &ReconstructionOptions::default())
            .unwrap();
    assert_eq!(result.text, "□□□□□□");
    assert!((result.confidence - 0.1).abs() < 1e-6);
}

#[test]
fn tiny_space_unit_does_not_blow_up() {
    let options = ReconstructionOptions {
        space_unit: 1e-12,
        ..Default::default()
    };
    let fragments = vec![frag("a", 0.9, 0.0, 0.5, 0.0), frag("b", 0.9, 0.9, 0.5, 0.05)];
    let result = reconstruct(&fragments, &options).unwrap();
    assert_eq!(result.text.len(), 2 + relayout_core::layout::assemble::MAX_GAP_SPACES);
}

#[test]
fn thresholds_are_exact_at_the_boundary() {
    // Binary-exact distances: 0.015625 joins a row, 0.03125 starts a new
    // row, and a row gap of exactly 0.0625 is not yet a paragraph break.
    let options = ReconstructionOptions {
        line_threshold: 0.015625,
        paragraph_threshold: 0.0625,
        ..Default::default()
    };
    let fragments = vec![
        frag("a", 0.9, 0.1, 0.5, 0.1),
        frag("b", 0.9, 0.3, 0.484375, 0.1),
    ];
    let result = reconstruct(&fragments, &options).unwrap();
    assert_eq!(result.text.lines().count(), 1);

    let fragments = vec![
        frag("a", 0.9, 0.1, 0.5, 0.1),
        frag("b", 0.9, 0.1, 0.46875, 0.1),
        frag("c", 0.9, 0.1, 0.40625, 0.1),
    ];
    let result = reconstruct(&fragments, &options).unwrap();
    assert_eq!(result.text, "a\nb\nc");
}
