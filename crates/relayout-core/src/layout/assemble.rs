use crate::layout::{cmp_horizontal, AssembledRow, Cell, RedactedRow};
use crate::options::ReconstructionOptions;

/// Upper bound on the spaces emitted for a single gap.
pub const MAX_GAP_SPACES: usize = 512;

/// Number of spaces that stand in for a horizontal gap between two cells.
///
/// Gaps at or below `small_gap_threshold` (including overlaps) get a single
/// space. Wider gaps are measured in `space_unit`s so that column alignment
/// and indentation survive. Never returns zero or more than
/// [`MAX_GAP_SPACES`].
pub fn gap_to_spaces(gap: f64, options: &ReconstructionOptions) -> usize {
    if gap <= options.small_gap_threshold || options.space_unit <= 0.0 {
        return 1;
    }
    let count = (gap / options.space_unit).round();
    if count.is_finite() && count >= 1.0 {
        count.min(MAX_GAP_SPACES as f64) as usize
    } else {
        1
    }
}

/// Join a row's cells left to right into one line of text.
pub fn assemble_row(row: &RedactedRow, options: &ReconstructionOptions) -> AssembledRow {
    let mut cells: Vec<&Cell> = row.cells.iter().collect();
    cells.sort_by(|a, b| cmp_horizontal(&a.bbox, &b.bbox).then_with(|| a.text.cmp(&b.text)));

    let mut text = String::new();
    let mut last_end_x: Option<f64> = None;

    for cell in &cells {
        if let Some(end) = last_end_x {
            let spaces = gap_to_spaces(cell.bbox.x - end, options);
            text.extend(std::iter::repeat(' ').take(spaces));
        }
        text.push_str(&cell.text);
        last_end_x = Some(cell.bbox.right());
    }

    AssembledRow {
        y: row.y,
        text,
        fragment_count: cells.len(),
        redacted_count: row.redacted_count(),
    }
}
