/// Arithmetic mean of the given confidences, or 0.0 for an empty slice.
///
/// Accumulates in `f64`; callers pass confidences in a canonical order so
/// the result does not depend on how the recognizer ordered its output.
pub fn mean_confidence(confidences: &[f32]) -> f32 {
    if confidences.is_empty() {
        return 0.0;
    }
    let sum: f64 = confidences.iter().map(|&c| f64::from(c)).sum();
    (sum / confidences.len() as f64) as f32
}
