//! Shared test utilities for the reunion-book test suite.
//!
//! Provides profile builders, a recording [`Delivery`], a quoted-row parser
//! for checking tabular exports, and helpers that write fixture files into a
//! temp directory.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let mut omri = profile("Omri");
//! omri.yearbook_dedication = Some("Good luck!".into());
//!
//! let mut delivery = RecordingDelivery::default();
//! export_tabular(&[omri], Language::English, &mut delivery).unwrap();
//! let row = delivery.artifacts[0].contents.split("\r\n").nth(1).unwrap();
//! assert_eq!(parse_quoted_row(row)[0], "Omri");
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::export::{Artifact, Delivery, ExportError};
use crate::types::{Profile, ProfileId};

// =========================================================================
// Profile builders
// =========================================================================

/// A profile with every required field filled and nothing optional set.
///
/// The id is `test-{name}`; no other field mentions the name.
pub fn profile(name: &str) -> Profile {
    Profile {
        id: ProfileId::new(format!("test-{name}")),
        full_name: name.to_string(),
        date_of_birth: "1990-01-01".to_string(),
        class_names: "12B".to_string(),
        current_city: "Haifa".to_string(),
        workplace: String::new(),
        role: String::new(),
        social_link: String::new(),
        high_school_photo: None,
        current_photo: None,
        memory: String::new(),
        teacher: String::new(),
        embarrassing_moment: String::new(),
        song: String::new(),
        gallery_photos: Vec::new(),
        yearbook_dedication: None,
    }
}

// =========================================================================
// Delivery
// =========================================================================

/// Keeps delivered artifacts in memory instead of writing them.
#[derive(Debug, Default)]
pub struct RecordingDelivery {
    pub artifacts: Vec<Artifact>,
    /// File names passed to `withdraw`, in call order.
    pub withdrawn: Vec<String>,
}

impl Delivery for RecordingDelivery {
    fn deliver(&mut self, artifact: &Artifact) -> Result<PathBuf, ExportError> {
        self.artifacts.push(artifact.clone());
        Ok(PathBuf::from(artifact.file_name))
    }

    fn withdraw(&mut self, file_name: &str) -> Result<(), ExportError> {
        self.withdrawn.push(file_name.to_string());
        Ok(())
    }
}

// =========================================================================
// Tabular parsing
// =========================================================================

/// Split one row of fully-quoted fields back into values.
///
/// Every field must be wrapped in `"`; a doubled `""` inside a field is one
/// literal quote. Commas and line breaks inside quotes are field content.
pub fn parse_quoted_row(row: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut chars = row.chars().peekable();

    loop {
        assert_eq!(chars.next(), Some('"'), "field must open with a quote in {row:?}");
        let mut field = String::new();
        loop {
            match chars.next() {
                Some('"') if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                Some('"') => break,
                Some(c) => field.push(c),
                None => panic!("unterminated field in {row:?}"),
            }
        }
        fields.push(field);
        match chars.next() {
            Some(',') => continue,
            None => break,
            Some(c) => panic!("unexpected {c:?} after field in {row:?}"),
        }
    }
    fields
}

// =========================================================================
// Fixture files
// =========================================================================

/// PNG signature followed by filler. Enough for format sniffing; never decoded.
pub const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDRfixture";

/// Write [`PNG_BYTES`] to `dir/name` and return the path.
pub fn write_png(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, PNG_BYTES).unwrap();
    path
}

/// Write a submission file to `dir/name` and return the path.
pub fn write_submission(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_quoted_row_handles_escapes() {
        let parsed = parse_quoted_row("\"a\",\"b \"\"c\"\"\",\"d,e\",\"\"");
        assert_eq!(parsed, vec!["a", "b \"c\"", "d,e", ""]);
    }
}
