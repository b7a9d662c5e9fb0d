use crate::layout::{cmp_horizontal, Row};
use crate::model::TextFragment;
use crate::options::ReconstructionOptions;
use std::cmp::Ordering;

/// Group fragments into rows, top row first.
///
/// Fragments are sorted into reading order (vertical position per the
/// configured origin, then `x`) and walked once. A fragment joins the
/// current row while its `y` stays within `line_threshold` of the previous
/// fragment's `y`; otherwise the row is closed and a new one starts.
/// Rows are never empty.
pub fn cluster_rows(fragments: &[TextFragment], options: &ReconstructionOptions) -> Vec<Row> {
    let mut sorted: Vec<&TextFragment> = fragments.iter().collect();
    sorted.sort_by(|a, b| reading_order(a, b, options));

    let mut rows = Vec::new();
    let mut current: Vec<TextFragment> = Vec::new();
    let mut last_y: Option<f64> = None;

    for fragment in sorted {
        let y = fragment.bbox.y;
        if let Some(prev) = last_y {
            if (y - prev).abs() > options.line_threshold {
                rows.push(Row::from_fragments(std::mem::take(&mut current)));
            }
        }
        current.push(fragment.clone());
        last_y = Some(y);
    }

    if !current.is_empty() {
        rows.push(Row::from_fragments(current));
    }

    rows
}

fn reading_order(a: &TextFragment, b: &TextFragment, options: &ReconstructionOptions) -> Ordering {
    options
        .origin
        .reading_order(a.bbox.y, b.bbox.y)
        .then_with(|| cmp_horizontal(&a.bbox, &b.bbox))
        .then_with(|| a.text.cmp(&b.text))
        .then_with(|| a.confidence.total_cmp(&b.confidence))
}
