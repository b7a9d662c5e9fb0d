use crate::layout::AssembledRow;
use crate::options::ReconstructionOptions;

/// For each row, whether a blank line should precede it.
///
/// The first row never gets one. A later row does when its vertical
/// distance from the previous row exceeds `paragraph_threshold`.
pub fn paragraph_breaks(rows: &[AssembledRow], options: &ReconstructionOptions) -> Vec<bool> {
    let mut breaks = Vec::with_capacity(rows.len());
    let mut prev_y: Option<f64> = None;
    for row in rows {
        let brk = match prev_y {
            Some(prev) => (prev - row.y).abs() > options.paragraph_threshold,
            None => false,
        };
        breaks.push(brk);
        prev_y = Some(row.y);
    }
    breaks
}

/// Lay out assembled rows as output lines, inserting one empty line at
/// each paragraph break.
pub fn segment_rows(rows: &[AssembledRow], options: &ReconstructionOptions) -> Vec<String> {
    let breaks = paragraph_breaks(rows, options);
    let mut lines = Vec::with_capacity(rows.len() * 2);
    for (row, brk) in rows.iter().zip(breaks) {
        if brk {
            lines.push(String::new());
        }
        lines.push(row.text.clone());
    }
    lines
}
