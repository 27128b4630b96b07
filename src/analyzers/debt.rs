//! Academic debt counting.

use crate::model::{RosterData, Subject};

/// Lowest score that does not count as a debt.
pub const PASSING_SCORE: i64 = 61;

/// True if any score is below [`PASSING_SCORE`]. Stops at the first one.
pub fn has_debt(subjects: &[Subject]) -> bool {
    subjects.iter().any(|s| s.score.is_below(PASSING_SCORE))
}

/// Number of students with at least one score below [`PASSING_SCORE`].
pub fn count_with_debt(roster: &RosterData) -> usize {
    roster
        .iter()
        .filter(|(_, subjects)| has_debt(subjects))
        .count()
}
