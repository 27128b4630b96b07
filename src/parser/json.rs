//! JSON roster reader.
//!
//! Expected layout:
//! ```json
//! {
//!     "Ivanov Ivan": { "math": 67, "literature": 100, "programming": 91 },
//!     "Petrov Petr": { "math": 78, "chemistry": 87, "sociology": 61 }
//! }
//! ```

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::{debug, debug_span};

use super::RosterReader;
use crate::error::{Result, RosterError};
use crate::model::{RosterData, Score, Subject};

/// [`RosterReader`] for JSON files.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonReader;

impl RosterReader for JsonReader {
    fn read(&self, path: &Path) -> Result<RosterData> {
        read_structured(path)
    }
}

/// Reads a JSON roster file.
///
/// # Errors
///
/// - [`RosterError::NotFound`] if `path` does not exist
/// - [`RosterError::Syntax`] if the content is not valid UTF-8 JSON
/// - [`RosterError::Structure`] if the JSON is not an object of objects
///   with numeric leaves
pub fn read_structured(path: impl AsRef<Path>) -> Result<RosterData> {
    let path = path.as_ref();
    let _span = debug_span!("read_structured", path = %path.display()).entered();

    // Invalid UTF-8 is reported by serde_json as a positioned syntax error.
    let bytes = fs::read(path).map_err(|e| RosterError::from_io(path, e))?;
    debug!(bytes = bytes.len(), "Roster file read, parsing");

    let value: Value = serde_json::from_slice(&bytes).map_err(|source| RosterError::Syntax {
        path: path.to_path_buf(),
        source,
    })?;

    let roster = decode_roster(&value)?;
    debug!(students = roster.len(), "Roster decoded");
    Ok(roster)
}

/// Converts parsed JSON into a [`RosterData`], rejecting anything that is
/// not `{ student: { subject: number } }`.
///
/// Students are checked in document order; the first violation is returned.
pub fn decode_roster(value: &Value) -> Result<RosterData> {
    let Value::Object(students) = value else {
        return Err(RosterError::Structure(format!(
            "roster must be an object mapping student names to subjects, found {}",
            describe(value)
        )));
    };

    // JSON object keys are always strings, so student and subject names
    // need no separate type check here.
    let mut roster = RosterData::new();
    for (student, subjects) in students {
        let Value::Object(subjects) = subjects else {
            return Err(RosterError::Structure(format!(
                "subjects for student {student} must be an object, found {}",
                describe(subjects)
            )));
        };
        roster.insert(student.as_str(), decode_subjects(student, subjects)?);
    }

    Ok(roster)
}

fn decode_subjects(student: &str, subjects: &Map<String, Value>) -> Result<Vec<Subject>> {
    subjects
        .iter()
        .map(|(subject, value)| -> Result<Subject> {
            let score = decode_score(value).ok_or_else(|| {
                RosterError::Structure(format!(
                    "score must be a number for subject {subject} of student {student}, found {value}"
                ))
            })?;
            Ok(Subject::new(subject.as_str(), score))
        })
        .collect()
}

/// Integers that fit in an `i64` stay integers; everything else numeric
/// becomes a float.
fn decode_score(value: &Value) -> Option<Score> {
    let Value::Number(n) = value else {
        return None;
    };
    n.as_i64()
        .map(Score::Integer)
        .or_else(|| n.as_f64().map(Score::Float))
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
