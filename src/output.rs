//! CLI output formatting for intake, rendering, and export.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. Each profile leads
//! with its positional index and name; the submission file and anything that
//! went missing during intake are indented context lines.
//!
//! # Output Format
//!
//! ## Intake
//!
//! ```text
//! Profiles
//! 001 Omri Levi (2 photos, 3 gallery)
//!     Source: 001-omri.toml
//!     Dedication: Good luck, everyone! See you in ten year...
//! 002 Dana Cohen (1 photo)
//!     Source: 002-dana/profile.json
//!     Missing: current_photo
//!
//! Config
//!     config.toml
//! ```
//!
//! ## Build
//!
//! ```text
//! Form → index.html
//! Profiles → profiles.html
//! ...
//! Tabular → dist/reunion_data.csv
//! Narrative skipped: No profiles to build a presentation from.
//! ```
//!
//! # Architecture
//!
//! Each section has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::config::CONFIG_FILENAME;
use crate::export::{ExportKind, ExportOutcome};
use crate::intake::Submission;
use crate::views::View;
use std::path::{Path, PathBuf};

// ============================================================================
// Shared helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{} {}", n, one)
    } else {
        format!("{} {}", n, many)
    }
}

/// Profile header: index, name, and photo counts.
///
/// ```text
/// 001 Omri Levi (2 photos, 3 gallery)
/// 002 Dana Cohen (no photos)
/// ```
fn profile_header(index: usize, submission: &Submission) -> String {
    let p = &submission.profile;
    let slots = usize::from(p.high_school_photo.is_some()) + usize::from(p.current_photo.is_some());
    let mut detail = if slots == 0 {
        "no photos".to_string()
    } else {
        plural(slots, "photo", "photos")
    };
    if !p.gallery_photos.is_empty() {
        detail.push_str(&format!(", {} gallery", p.gallery_photos.len()));
    }
    format!("{} {} ({})", format_index(index), p.full_name, detail)
}

// ============================================================================
// Intake output
// ============================================================================

/// Format the session inventory after intake.
pub fn format_intake_output(submissions: &[Submission], source_root: &Path) -> Vec<String> {
    let mut lines = vec!["Profiles".to_string()];

    if submissions.is_empty() {
        lines.push(format!("{}(none)", indent(1)));
    }

    for (i, submission) in submissions.iter().enumerate() {
        let p = &submission.profile;
        lines.push(profile_header(i + 1, submission));

        let source = submission
            .source
            .strip_prefix(source_root)
            .unwrap_or(&submission.source);
        lines.push(format!("{}Source: {}", indent(1), source.display()));

        if let Some(dedication) = p.yearbook_dedication.as_deref()
            && !dedication.trim().is_empty()
        {
            let one_line = dedication.split_whitespace().collect::<Vec<_>>().join(" ");
            lines.push(format!(
                "{}Dedication: {}",
                indent(1),
                truncate_desc(&one_line, 40)
            ));
        }

        let missing: Vec<&str> = [
            ("high_school_photo", p.high_school_photo.is_none()),
            ("current_photo", p.current_photo.is_none()),
        ]
        .into_iter()
        .filter_map(|(field, absent)| absent.then_some(field))
        .collect();
        if !missing.is_empty() {
            lines.push(format!("{}Missing: {}", indent(1), missing.join(", ")));
        }
    }

    lines.push(String::new());
    lines.push("Config".to_string());
    if source_root.join(CONFIG_FILENAME).exists() {
        lines.push(format!("{}{}", indent(1), CONFIG_FILENAME));
    } else {
        lines.push(format!("{}(defaults)", indent(1)));
    }

    lines
}

/// Print intake output to stdout.
pub fn print_intake_output(submissions: &[Submission], source_root: &Path) {
    for line in format_intake_output(submissions, source_root) {
        println!("{}", line);
    }
}

// ============================================================================
// Site output
// ============================================================================

/// Format the list of rendered pages, in tab order.
pub fn format_site_output(written: &[PathBuf], output_dir: &Path) -> Vec<String> {
    View::ALL
        .iter()
        .zip(written)
        .map(|(view, path)| {
            let shown = path.strip_prefix(output_dir).unwrap_or(path);
            format!("{:?} \u{2192} {}", view, shown.display())
        })
        .collect()
}

/// Print rendered pages to stdout.
pub fn print_site_output(written: &[PathBuf], output_dir: &Path) {
    for line in format_site_output(written, output_dir) {
        println!("{}", line);
    }
}

// ============================================================================
// Export output
// ============================================================================

/// Format one export result: where it went, or the notice if skipped.
pub fn format_export_outcome(kind: ExportKind, outcome: &ExportOutcome) -> Vec<String> {
    match outcome {
        ExportOutcome::Delivered(path) => {
            vec![format!("{} \u{2192} {}", kind.label(), path.display())]
        }
        ExportOutcome::Skipped { notice } => {
            vec![format!("{} skipped: {}", kind.label(), notice)]
        }
    }
}

/// Print an export result to stdout.
pub fn print_export_outcome(kind: ExportKind, outcome: &ExportOutcome) {
    for line in format_export_outcome(kind, outcome) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::profile;

    fn submission(name: &str, source: &str) -> Submission {
        Submission {
            source: PathBuf::from(source),
            profile: profile(name),
        }
    }

    // =========================================================================
    // Helper tests
    // =========================================================================

    #[test]
    fn format_index_pads() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(1234), "1234");
    }

    #[test]
    fn indent_levels() {
        assert_eq!(indent(0), "");
        assert_eq!(indent(2), "        ");
    }

    #[test]
    fn truncate_desc_short() {
        assert_eq!(truncate_desc("short", 10), "short");
    }

    #[test]
    fn truncate_desc_exact() {
        assert_eq!(truncate_desc("12345", 5), "12345");
    }

    #[test]
    fn truncate_desc_long() {
        assert_eq!(truncate_desc("hello world", 5), "hello...");
    }

    #[test]
    fn truncate_desc_counts_chars_not_bytes() {
        assert_eq!(truncate_desc("שלום עולם", 4), "שלום...");
    }

    // =========================================================================
    // Intake output
    // =========================================================================

    #[test]
    fn intake_lists_profiles_with_sources() {
        let mut omri = submission("Omri", "/subs/001-omri.toml");
        omri.profile.high_school_photo = Some("a".into());
        omri.profile.current_photo = Some("b".into());
        omri.profile.gallery_photos = vec!["c".into(), "d".into(), "e".into()];
        let dana = submission("Dana", "/subs/002-dana/profile.json");

        let lines = format_intake_output(&[omri, dana], Path::new("/subs"));
        assert_eq!(lines[0], "Profiles");
        assert_eq!(lines[1], "001 Omri (2 photos, 3 gallery)");
        assert_eq!(lines[2], "    Source: 001-omri.toml");
        assert_eq!(lines[3], "002 Dana (no photos)");
        assert_eq!(lines[4], "    Source: 002-dana/profile.json");
        assert_eq!(lines[5], "    Missing: high_school_photo, current_photo");
    }

    #[test]
    fn intake_shows_single_photo_and_missing_slot() {
        let mut omri = submission("Omri", "/subs/001-omri.toml");
        omri.profile.high_school_photo = Some("a".into());
        let lines = format_intake_output(&[omri], Path::new("/subs"));
        assert_eq!(lines[1], "001 Omri (1 photo)");
        assert!(lines.contains(&"    Missing: current_photo".to_string()));
    }

    #[test]
    fn intake_dedication_collapsed_and_truncated() {
        let mut omri = submission("Omri", "/subs/001-omri.toml");
        omri.profile.yearbook_dedication =
            Some("Good luck,\n  everyone! See you in ten years at the next one".into());
        let lines = format_intake_output(&[omri], Path::new("/subs"));
        assert!(lines.contains(
            &"    Dedication: Good luck, everyone! See you in ten year...".to_string()
        ));
    }

    #[test]
    fn intake_empty_session() {
        let lines = format_intake_output(&[], Path::new("/nonexistent"));
        assert_eq!(lines, vec!["Profiles", "    (none)", "", "Config", "    (defaults)"]);
    }

    // =========================================================================
    // Site and export output
    // =========================================================================

    #[test]
    fn site_output_in_tab_order() {
        let out = Path::new("/dist");
        let written: Vec<PathBuf> = View::ALL.iter().map(|v| out.join(v.file_name())).collect();
        let lines = format_site_output(&written, out);
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "Form \u{2192} index.html");
        assert_eq!(lines[4], "Outputs \u{2192} outputs.html");
    }

    #[test]
    fn export_delivered_shows_path() {
        let outcome = ExportOutcome::Delivered(PathBuf::from("dist/reunion_data.csv"));
        assert_eq!(
            format_export_outcome(ExportKind::Tabular, &outcome),
            vec!["Tabular \u{2192} dist/reunion_data.csv"]
        );
    }

    #[test]
    fn export_skipped_shows_notice() {
        let outcome = ExportOutcome::Skipped {
            notice: "No profiles to build a presentation from.",
        };
        assert_eq!(
            format_export_outcome(ExportKind::Narrative, &outcome),
            vec!["Narrative skipped: No profiles to build a presentation from."]
        );
    }
}
