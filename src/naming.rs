//! Submission ordering by the `NNN-name` filename convention.
//!
//! Profiles are appended in submission order, and the submissions folder is
//! the record of that order. A numeric prefix (`001-dana.toml`,
//! `002-omri.toml`) fixes the position explicitly; files without a prefix
//! follow all numbered ones, ordered by name.

/// Result of parsing a submission file stem like `007-dana-levi`.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionName {
    /// Number prefix if present (e.g., `7` from `007-dana-levi`)
    pub number: Option<u32>,
    /// Stem after the `NNN-` prefix, or the whole stem if unnumbered.
    pub name: String,
}

impl SubmissionName {
    /// Sort key: numbered stems first by number, then by name.
    pub fn sort_key(&self) -> (u32, &str) {
        (self.number.unwrap_or(u32::MAX), &self.name)
    }
}

/// Parse a submission file stem.
///
/// - `"010-dana"` → number=Some(10), name="dana"
/// - `"010"` → number=Some(10), name=""
/// - `"dana-levi"` → number=None, name="dana-levi"
pub fn parse_submission_name(stem: &str) -> SubmissionName {
    if let Some((prefix, rest)) = stem.split_once('-')
        && let Ok(number) = prefix.parse::<u32>()
    {
        return SubmissionName {
            number: Some(number),
            name: rest.to_string(),
        };
    }
    if let Ok(number) = stem.parse::<u32>() {
        return SubmissionName {
            number: Some(number),
            name: String::new(),
        };
    }
    SubmissionName {
        number: None,
        name: stem.to_string(),
    }
}
