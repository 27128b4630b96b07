//! Per-student average score.

use indexmap::IndexMap;

use crate::analyzers::utility::mean;
use crate::error::{Result, RosterError};
use crate::model::RosterData;

/// Student name -> average score, in roster order.
pub type Ratings = IndexMap<String, f64>;

/// Computes the arithmetic mean of every student's scores.
///
/// # Errors
///
/// Returns [`RosterError::NoSubjects`] for the first student with no scores;
/// no partial result is produced.
pub fn calculate_ratings(roster: &RosterData) -> Result<Ratings> {
    roster
        .iter()
        .map(|(student, subjects)| -> Result<(String, f64)> {
            let average = mean(subjects.iter().map(|s| s.score)).ok_or_else(|| {
                RosterError::NoSubjects {
                    student: student.to_string(),
                }
            })?;
            Ok((student.to_string(), average))
        })
        .collect()
}
