//! Output formatting and persistence for roster statistics.
//!
//! Supports debug logging, plain-text and JSON rendering, and CSV append.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::stats::RosterStats;
use csv::WriterBuilder;
use std::fmt::Write;
use std::fs::OpenOptions;
use std::path::Path;

/// One CSV row per student.
#[derive(Serialize)]
struct StudentRecord<'a> {
    timestamp: DateTime<Utc>,
    source: &'a str,
    student: &'a str,
    subjects: usize,
    rating: f64,
    has_debt: bool,
}

/// Logs roster statistics using Rust's debug pretty-print format.
pub fn print_pretty(stats: &RosterStats) {
    debug!("{:#?}", stats);
}

/// Renders roster statistics as human-readable text.
pub fn render_text(stats: &RosterStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Rating:");
    for summary in &stats.students {
        let marker = if summary.has_debt { " (debt)" } else { "" };
        let _ = writeln!(out, "  {}: {:.2}{}", summary.student, summary.rating, marker);
    }
    let _ = writeln!(
        out,
        "Students with academic debt: {} of {}",
        stats.students_with_debt, stats.total_students
    );
    out
}

/// Renders roster statistics as pretty-printed JSON.
pub fn render_json(stats: &RosterStats) -> Result<String> {
    Ok(serde_json::to_string_pretty(stats)?)
}

/// Appends one row per student to a CSV file.
///
/// Creates the file with headers if it does not already exist.
pub fn append_records(path: &str, stats: &RosterStats) -> Result<()> {
    let file_exists = Path::new(path).exists();
    debug!(path, file_exists, rows = stats.students.len(), "Appending CSV records");

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists) // IMPORTANT when appending
        .from_writer(file);

    let source = stats.source.as_deref().unwrap_or("");
    for summary in &stats.students {
        writer.serialize(StudentRecord {
            timestamp: stats.timestamp,
            source,
            student: &summary.student,
            subjects: summary.subjects,
            rating: summary.rating,
            has_debt: summary.has_debt,
        })?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::StudentSummary;
    use std::fs;

    #[test]
    fn test_print_pretty_does_not_panic() {
        let stats = RosterStats::default();
        print_pretty(&stats);
    }

    #[test]
    fn test_render_text() {
        let text = render_text(&sample_stats());

        assert!(text.contains("  Ivanov Ivan: 86.00\n"));
        assert!(text.contains("  Kozlova Maria: 71.00 (debt)\n"));
        assert!(text.ends_with("Students with academic debt: 1 of 2\n"));
    }

    #[test]
    fn test_render_json() {
        let json = render_json(&sample_stats()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["students_with_debt"], 1);
        assert_eq!(value["students"][1]["student"], "Kozlova Maria");
        assert_eq!(value["source"], "students.json");
    }

    #[test]
    fn test_append_records_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ratings.csv");
        let path = path.to_str().unwrap();

        append_records(path, &sample_stats()).unwrap();

        let content = fs::read_to_string(path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "timestamp,source,student,subjects,rating,has_debt");
        assert!(lines[2].ends_with("students.json,Kozlova Maria,2,71.0,true"));
    }

    #[test]
    fn test_append_records_writes_header_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ratings.csv");
        let path = path.to_str().unwrap();

        let stats = sample_stats();
        append_records(path, &stats).unwrap();
        append_records(path, &stats).unwrap();

        let content = fs::read_to_string(path).unwrap();
        let header_count = content.lines().filter(|l| l.starts_with("timestamp")).count();
        assert_eq!(header_count, 1);
        // 1 header + 2 appends of 2 rows
        assert_eq!(content.lines().count(), 5);
    }

    // Helper functions for tests
    fn sample_stats() -> RosterStats {
        RosterStats {
            total_students: 2,
            students_with_debt: 1,
            students: vec![
                StudentSummary {
                    student: "Ivanov Ivan".to_string(),
                    subjects: 3,
                    rating: 86.0,
                    has_debt: false,
                },
                StudentSummary {
                    student: "Kozlova Maria".to_string(),
                    subjects: 2,
                    rating: 71.0,
                    has_debt: true,
                },
            ],
            ..Default::default()
        }
        .with_source("students.json")
    }
}
