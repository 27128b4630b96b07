//! Plain-text roster reader.
//!
//! A line that starts at column zero names a student. Indented lines below
//! it are `subject:score` pairs for that student:
//!
//! ```text
//! Ivanov Ivan
//!     math:67
//!     literature:100
//! Petrov Petr
//!     math:78
//! ```
//!
//! A subject repeated under one student keeps its first position and its
//! last score, the same way duplicate JSON keys are read.

use std::fs;
use std::path::Path;

use tracing::{debug, debug_span, warn};

use super::RosterReader;
use crate::error::{Result, RosterError};
use crate::model::{RosterData, Score, Subject};

/// [`RosterReader`] for the plain-text layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextReader;

impl RosterReader for TextReader {
    fn read(&self, path: &Path) -> Result<RosterData> {
        read_text(path)
    }
}

/// Reads a plain-text roster file.
///
/// # Errors
///
/// Returns [`RosterError::NotFound`] for a missing file and
/// [`RosterError::Format`] for the first malformed line.
pub fn read_text(path: impl AsRef<Path>) -> Result<RosterData> {
    let path = path.as_ref();
    let _span = debug_span!("read_text", path = %path.display()).entered();

    let content = fs::read_to_string(path).map_err(|e| RosterError::from_io(path, e))?;
    let roster = parse_text(&content)?;
    debug!(students = roster.len(), "Roster parsed");
    Ok(roster)
}

/// Parses plain-text roster content. Blank lines are ignored.
pub fn parse_text(content: &str) -> Result<RosterData> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let mut roster = RosterData::new();
    let mut current: Option<(String, Vec<Subject>)> = None;

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        if line.trim().is_empty() {
            continue;
        }

        if !line.starts_with(char::is_whitespace) {
            if let Some((student, subjects)) = current.take() {
                roster.insert(student, subjects);
            }
            let student = line.trim().to_string();
            if roster.contains(&student) {
                warn!(line = line_no, student = %student, "Student listed twice, keeping the later entry");
            }
            current = Some((student, Vec::new()));
            continue;
        }

        let Some((_, subjects)) = current.as_mut() else {
            return Err(format_error(line_no, "subject line appears before any student name"));
        };
        let subject = parse_subject(line_no, line)?;
        // A repeated subject keeps its first position and takes the later score.
        match subjects.iter_mut().find(|s| s.name == subject.name) {
            Some(existing) => existing.score = subject.score,
            None => subjects.push(subject),
        }
    }

    if let Some((student, subjects)) = current {
        roster.insert(student, subjects);
    }

    Ok(roster)
}

fn parse_subject(line_no: usize, line: &str) -> Result<Subject> {
    let Some((name, score)) = line.split_once(':') else {
        return Err(format_error(line_no, "expected `subject:score`"));
    };

    let name = name.trim();
    if name.is_empty() {
        return Err(format_error(line_no, "subject name is empty"));
    }

    let score = parse_score(score.trim()).ok_or_else(|| {
        format_error(
            line_no,
            format!("score must be a number for subject {name}, found `{}`", score.trim()),
        )
    })?;

    Ok(Subject::new(name, score))
}

fn parse_score(raw: &str) -> Option<Score> {
    if let Ok(i) = raw.parse::<i64>() {
        return Some(Score::Integer(i));
    }
    raw.parse::<f64>()
        .ok()
        .filter(|f| f.is_finite())
        .map(Score::Float)
}

fn format_error(line: usize, message: impl Into<String>) -> RosterError {
    RosterError::Format {
        line,
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_students() {
        let content = "Ivanov Ivan\n    math:67\n    literature:100\nPetrov Petr\n    math:78\n";
        let roster = parse_text(content).unwrap();

        assert_eq!(roster.len(), 2);
        assert_eq!(
            roster.get("Ivanov Ivan").unwrap(),
            [Subject::new("math", 67), Subject::new("literature", 100)]
        );
        assert_eq!(roster.get("Petrov Petr").unwrap(), [Subject::new("math", 78)]);
    }

    #[test]
    fn test_parse_trims_and_accepts_tabs() {
        let roster = parse_text("Sidorov Alexey  \n\tphysics : 95.5 \r\n").unwrap();
        assert_eq!(
            roster.get("Sidorov Alexey").unwrap(),
            [Subject::new("physics", 95.5)]
        );
    }

    #[test]
    fn test_parse_skips_blank_lines_and_bom() {
        let roster = parse_text("\u{feff}A\n\n    math:70\n   \nB\n").unwrap();
        assert_eq!(roster.get("A").unwrap().len(), 1);
        assert!(roster.get("B").unwrap().is_empty());
    }

    #[test]
    fn test_parse_empty_content() {
        assert!(parse_text("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_duplicate_student_keeps_later_entry() {
        let roster = parse_text("A\n    math:40\nB\n    math:80\nA\n    math:90\n").unwrap();

        let names: Vec<_> = roster.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["A", "B"]);
        assert_eq!(roster.get("A").unwrap(), [Subject::new("math", 90)]);
    }

    #[test]
    fn test_parse_repeated_subject_keeps_later_score() {
        let roster = parse_text("A\n    math:40\n    physics:70\n    math:90\n").unwrap();
        assert_eq!(
            roster.get("A").unwrap(),
            [Subject::new("math", 90), Subject::new("physics", 70)]
        );
    }

    #[test]
    fn test_parse_repeated_subject_matches_json_reader() {
        let roster = parse_text("A\n    math:40\n    math:90\n").unwrap();
        let json = serde_json::to_string(&roster).unwrap();
        let reread = crate::parser::decode_roster(&serde_json::from_str::<serde_json::Value>(&json).unwrap()).unwrap();

        assert_eq!(reread, roster);
        assert_eq!(
            crate::analyzers::calculate_ratings(&roster).unwrap()["A"],
            90.0
        );
    }

    #[test]
    fn test_parse_subject_before_student() {
        let err = parse_text("    math:70\n").unwrap_err();
        assert!(matches!(err, RosterError::Format { line: 1, .. }));
    }

    #[test]
    fn test_parse_missing_separator() {
        let err = parse_text("A\n    math 70\n").unwrap_err();
        assert!(matches!(err, RosterError::Format { line: 2, .. }));
    }

    #[test]
    fn test_parse_empty_subject_name() {
        let err = parse_text("A\n    :70\n").unwrap_err();
        assert!(err.to_string().contains("subject name is empty"));
    }

    #[test]
    fn test_parse_non_numeric_score() {
        let err = parse_text("A\n    math:70\n    physics:hundred\n").unwrap_err();
        assert_eq!(err.line(), Some(3));
        assert!(err.to_string().contains("must be a number"));
    }

    #[test]
    fn test_parse_rejects_non_finite_score() {
        assert!(parse_text("A\n    math:NaN\n").is_err());
        assert!(parse_text("A\n    math:inf\n").is_err());
    }

    #[test]
    fn test_read_text_missing_file() {
        let err = read_text("nonexistent_file.txt").unwrap_err();
        assert!(matches!(err, RosterError::NotFound { .. }));
    }
}
