use crate::model::Score;

/// Computes the arithmetic mean of a set of scores. Returns `None` for empty input.
pub fn mean(scores: impl ExactSizeIterator<Item = Score>) -> Option<f64> {
    let count = scores.len();
    if count == 0 {
        return None;
    }
    Some(scores.map(Score::as_f64).sum::<f64>() / count as f64)
}

/// Share of `part` in `total` as a percentage. Returns 0.0 when `total` is zero.
pub fn pct(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        (part as f64 / total as f64) * 100.0
    }
}
