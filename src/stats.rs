use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::analyzers::utility::pct;
use crate::analyzers::{calculate_ratings, count_with_debt, has_debt};
use crate::error::Result;
use crate::model::RosterData;

/// Rating and debt status of one student.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentSummary {
    pub student: String,
    pub subjects: usize,
    pub rating: f64,
    pub has_debt: bool,
}

/// Everything reported about one roster file.
#[derive(Debug, Default, Serialize)]
pub struct RosterStats {
    pub timestamp: DateTime<Utc>,
    pub source: Option<String>,
    pub total_students: usize,
    pub students_with_debt: usize,
    pub students: Vec<StudentSummary>,
}

impl RosterStats {
    /// Rates every student and counts debts.
    ///
    /// # Errors
    ///
    /// Fails if any student has no subjects, see
    /// [`calculate_ratings`](crate::analyzers::calculate_ratings).
    pub fn from_roster(roster: &RosterData) -> Result<Self> {
        let ratings = calculate_ratings(roster)?;

        let students = roster
            .iter()
            .zip(ratings)
            .map(|((student, subjects), (_, rating))| StudentSummary {
                student: student.to_string(),
                subjects: subjects.len(),
                rating,
                has_debt: has_debt(subjects),
            })
            .collect();

        Ok(RosterStats {
            timestamp: Utc::now(),
            source: None,
            total_students: roster.len(),
            students_with_debt: count_with_debt(roster),
            students,
        })
    }

    /// Share of students with a debt, in percent.
    pub fn debt_pct(&self) -> f64 {
        pct(self.students_with_debt, self.total_students)
    }

    /// Set the file the roster was read from
    pub fn with_source(mut self, source: &str) -> Self {
        self.source = Some(source.to_string());
        self
    }
}
