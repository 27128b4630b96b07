//! Readers that turn roster files into [`RosterData`].
//!
//! Two formats are supported: a JSON object of objects ([`json`]) and a
//! line-oriented plain-text layout ([`text`]). [`reader_for_path`] picks
//! one by file extension.

pub mod json;
pub mod text;

use std::path::Path;

use crate::error::Result;
use crate::model::RosterData;

pub use json::{JsonReader, decode_roster, read_structured};
pub use text::{TextReader, parse_text, read_text};

/// Something that can load a roster from a file.
pub trait RosterReader {
    /// Reads and validates the roster at `path`. Either the whole roster is
    /// returned or nothing is.
    fn read(&self, path: &Path) -> Result<RosterData>;
}

/// Returns the JSON reader for `.json` files (any case) and the plain-text
/// reader for everything else.
pub fn reader_for_path(path: &Path) -> Box<dyn RosterReader> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        Box::new(JsonReader)
    } else {
        Box::new(TextReader)
    }
}

/// Reads `path` with the reader matching its extension.
pub fn read_roster(path: impl AsRef<Path>) -> Result<RosterData> {
    let path = path.as_ref();
    reader_for_path(path).read(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_read_roster_dispatches_on_extension() {
        let dir = tempfile::tempdir().unwrap();

        let json_path = dir.path().join("students.JSON");
        fs::write(&json_path, r#"{"A": {"math": 70}}"#).unwrap();

        let text_path = dir.path().join("students.txt");
        fs::write(&text_path, "A\n    math:70\n").unwrap();

        let from_json = read_roster(&json_path).unwrap();
        let from_text = read_roster(&text_path).unwrap();
        assert_eq!(from_json, from_text);
    }

    #[test]
    fn test_json_content_in_text_file_is_not_parsed_as_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("students.dat");
        fs::write(&path, "{\"A\": {\"math\": 70}}").unwrap();

        // A single unindented line reads as one student with no subjects.
        let roster = read_roster(&path).unwrap();
        assert_eq!(roster.len(), 1);
        assert!(roster.get("{\"A\": {\"math\": 70}}").unwrap().is_empty());
    }
}
