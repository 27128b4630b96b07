//! Roster data shared by the readers and calculators.

use indexmap::IndexMap;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::fmt;

/// A single subject score. Integer and floating-point scores are kept
/// apart so that a roster written back out matches its source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Score {
    Integer(i64),
    Float(f64),
}

impl Score {
    pub fn as_f64(self) -> f64 {
        match self {
            Score::Integer(i) => i as f64,
            Score::Float(f) => f,
        }
    }

    /// Strict comparison against an integral threshold.
    pub fn is_below(self, threshold: i64) -> bool {
        match self {
            Score::Integer(i) => i < threshold,
            Score::Float(f) => f < threshold as f64,
        }
    }
}

impl From<i64> for Score {
    fn from(value: i64) -> Self {
        Score::Integer(value)
    }
}

impl From<i32> for Score {
    fn from(value: i32) -> Self {
        Score::Integer(value.into())
    }
}

impl From<f64> for Score {
    fn from(value: f64) -> Self {
        Score::Float(value)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Integer(i) => write!(f, "{i}"),
            Score::Float(v) => write!(f, "{v}"),
        }
    }
}

/// A `(subject, score)` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Subject {
    pub name: String,
    pub score: Score,
}

impl Subject {
    pub fn new(name: impl Into<String>, score: impl Into<Score>) -> Self {
        Self {
            name: name.into(),
            score: score.into(),
        }
    }
}

/// Student name -> subjects, in source order.
///
/// Serializes as a JSON object of objects:
/// ```json
/// { "Ivanov Ivan": { "math": 67, "literature": 100 } }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RosterData {
    students: IndexMap<String, Vec<Subject>>,
}

impl RosterData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a student. A replaced student keeps its
    /// original position.
    pub fn insert(&mut self, student: impl Into<String>, subjects: Vec<Subject>) {
        self.students.insert(student.into(), subjects);
    }

    pub fn get(&self, student: &str) -> Option<&[Subject]> {
        self.students.get(student).map(Vec::as_slice)
    }

    pub fn contains(&self, student: &str) -> bool {
        self.students.contains_key(student)
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Subject])> {
        self.students
            .iter()
            .map(|(name, subjects)| (name.as_str(), subjects.as_slice()))
    }
}

impl<S: Into<String>> FromIterator<(S, Vec<Subject>)> for RosterData {
    fn from_iter<I: IntoIterator<Item = (S, Vec<Subject>)>>(iter: I) -> Self {
        let mut roster = RosterData::new();
        for (student, subjects) in iter {
            roster.insert(student, subjects);
        }
        roster
    }
}

struct SubjectMap<'a>(&'a [Subject]);

impl Serialize for SubjectMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|s| (&s.name, s.score)))
    }
}

impl Serialize for RosterData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.students.len()))?;
        for (student, subjects) in &self.students {
            map.serialize_entry(student, &SubjectMap(subjects))?;
        }
        map.end()
    }
}
