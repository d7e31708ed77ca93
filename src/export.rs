//! Downloadable data artifacts.
//!
//! Two documents can be exported from the profile collection:
//!
//! | Kind | File | Format |
//! |------|------|--------|
//! | [`ExportKind::Tabular`] | `reunion_data.csv` | BOM + quoted comma-separated rows, CRLF line ends |
//! | [`ExportKind::Narrative`] | `presentation_data.txt` | one free-form text block per profile |
//!
//! The `*_document` functions are pure builders. The `export_*` operations
//! are what a user action triggers: they refuse an empty collection with a
//! notice instead of an error, and otherwise hand the finished document to a
//! [`Delivery`], the host's "offer this file to the user" mechanism.
//!
//! ## Tabular quoting
//!
//! Every row field is wrapped in `"` and any `"` inside it is doubled, so a
//! field may contain commas, quotes, and line breaks without breaking row
//! boundaries. The header row holds fixed names and is written unquoted.
//!
//! The document starts with a UTF-8 byte-order mark: spreadsheet tools use
//! it to detect the encoding, and profile text is often non-Latin.

use crate::locale::Language;
use crate::types::Profile;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

const BOM: char = '\u{FEFF}';
const CRLF: &str = "\r\n";
const QUOTE: char = '"';

/// The two export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Tabular,
    Narrative,
}

impl ExportKind {
    pub const ALL: [ExportKind; 2] = [ExportKind::Tabular, ExportKind::Narrative];

    /// Fixed name the artifact is offered under.
    pub fn file_name(self) -> &'static str {
        match self {
            ExportKind::Tabular => "reunion_data.csv",
            ExportKind::Narrative => "presentation_data.txt",
        }
    }

    pub fn media_type(self) -> &'static str {
        match self {
            ExportKind::Tabular => "text/csv;charset=utf-8",
            ExportKind::Narrative => "text/plain;charset=utf-8",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExportKind::Tabular => "Tabular",
            ExportKind::Narrative => "Narrative",
        }
    }
}

/// A finished document ready to hand to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub file_name: &'static str,
    pub media_type: &'static str,
    pub contents: String,
}

/// Host mechanism that offers a file to the user.
pub trait Delivery {
    /// Deliver the artifact and return where it ended up.
    fn deliver(&mut self, artifact: &Artifact) -> Result<PathBuf, ExportError>;

    /// Take back anything previously offered under `file_name`.
    ///
    /// Called when an export is skipped, so a stale artifact from an earlier
    /// session is not left behind. Nothing to withdraw is not an error.
    fn withdraw(&mut self, file_name: &str) -> Result<(), ExportError>;
}

/// Delivers artifacts by writing them into a directory.
#[derive(Debug, Clone)]
pub struct DirectoryDelivery {
    dir: PathBuf,
}

impl DirectoryDelivery {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl Delivery for DirectoryDelivery {
    fn deliver(&mut self, artifact: &Artifact) -> Result<PathBuf, ExportError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(artifact.file_name);
        fs::write(&path, artifact.contents.as_bytes())?;
        log::debug!(
            "wrote {} ({} bytes, {})",
            path.display(),
            artifact.contents.len(),
            artifact.media_type
        );
        Ok(path)
    }

    fn withdraw(&mut self, file_name: &str) -> Result<(), ExportError> {
        let path = self.dir.join(file_name);
        match fs::remove_file(&path) {
            Ok(()) => {
                log::debug!("removed stale {}", path.display());
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Result of an export request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The artifact was delivered to this location.
    Delivered(PathBuf),
    /// Nothing was generated; the notice tells the user why.
    Skipped { notice: &'static str },
}

// ============================================================================
// Tabular document
// ============================================================================

/// Wrap a field in quotes, doubling any quote inside it.
pub fn quote_field(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push(QUOTE);
    for c in value.chars() {
        if c == QUOTE {
            quoted.push(QUOTE);
        }
        quoted.push(c);
    }
    quoted.push(QUOTE);
    quoted
}

/// The twelve exported fields of a profile, in header order.
fn tabular_fields(p: &Profile) -> [&str; 12] {
    [
        p.full_name.as_str(),
        p.date_of_birth.as_str(),
        p.class_names.as_str(),
        p.current_city.as_str(),
        p.workplace.as_str(),
        p.role.as_str(),
        p.social_link.as_str(),
        p.memory.as_str(),
        p.teacher.as_str(),
        p.embarrassing_moment.as_str(),
        p.song.as_str(),
        p.yearbook_dedication.as_deref().unwrap_or(""),
    ]
}

fn tabular_row(p: &Profile) -> String {
    tabular_fields(p)
        .iter()
        .map(|field| quote_field(field))
        .collect::<Vec<_>>()
        .join(",")
}

/// Build the tabular document: BOM, header row, one row per profile.
///
/// Rows are separated by CRLF; the last row has no trailing separator.
pub fn tabular_document(profiles: &[Profile], language: Language) -> String {
    let labels = language.labels();
    let mut doc = String::new();
    doc.push(BOM);
    doc.push_str(&labels.tabular_headers.join(","));
    doc.push_str(CRLF);
    doc.push_str(
        &profiles
            .iter()
            .map(tabular_row)
            .collect::<Vec<_>>()
            .join(CRLF),
    );
    doc
}

// ============================================================================
// Narrative document
// ============================================================================

fn narrative_block(p: &Profile, language: Language) -> String {
    let l = language.labels();
    let presence = |slot: &Option<String>| {
        if slot.is_some() {
            l.narrative_present
        } else {
            l.narrative_absent
        }
    };

    let lines = [
        l.narrative_separator.to_string(),
        format!("{}{}", l.narrative_slide_for, p.full_name),
        l.narrative_separator.to_string(),
        format!(
            "{}{}",
            l.narrative_high_school_photo,
            presence(&p.high_school_photo)
        ),
        format!("{}{}", l.narrative_current_photo, presence(&p.current_photo)),
        String::new(),
        format!("{}{}", l.narrative_memory, p.memory),
        format!("{}{}", l.narrative_teacher, p.teacher),
        format!(
            "{}{}",
            l.narrative_embarrassing_moment, p.embarrassing_moment
        ),
        format!("{}{}", l.narrative_song, p.song),
    ];

    let mut block = lines.join("\n");
    block.push('\n');
    block
}

/// Build the narrative document: one block per profile, blank line between.
///
/// Answers are reproduced verbatim. The format is meant for copy-paste into
/// slides, not for parsing.
pub fn narrative_document(profiles: &[Profile], language: Language) -> String {
    profiles
        .iter()
        .map(|p| narrative_block(p, language))
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// Export operations
// ============================================================================

fn export_with(
    kind: ExportKind,
    profiles: &[Profile],
    language: Language,
    delivery: &mut dyn Delivery,
    notice: &'static str,
    build: fn(&[Profile], Language) -> String,
) -> Result<ExportOutcome, ExportError> {
    if profiles.is_empty() {
        log::info!("{} export skipped: no profiles", kind.label());
        delivery.withdraw(kind.file_name())?;
        return Ok(ExportOutcome::Skipped { notice });
    }

    let artifact = Artifact {
        file_name: kind.file_name(),
        media_type: kind.media_type(),
        contents: build(profiles, language),
    };
    let path = delivery.deliver(&artifact)?;
    Ok(ExportOutcome::Delivered(path))
}

/// Deliver the tabular export, or a notice if there are no profiles.
pub fn export_tabular(
    profiles: &[Profile],
    language: Language,
    delivery: &mut dyn Delivery,
) -> Result<ExportOutcome, ExportError> {
    export_with(
        ExportKind::Tabular,
        profiles,
        language,
        delivery,
        language.labels().tabular_empty_notice,
        tabular_document,
    )
}

/// Deliver the narrative export, or a notice if there are no profiles.
pub fn export_narrative(
    profiles: &[Profile],
    language: Language,
    delivery: &mut dyn Delivery,
) -> Result<ExportOutcome, ExportError> {
    export_with(
        ExportKind::Narrative,
        profiles,
        language,
        delivery,
        language.labels().narrative_empty_notice,
        narrative_document,
    )
}

/// Run the export for `kind`.
pub fn export(
    kind: ExportKind,
    profiles: &[Profile],
    language: Language,
    delivery: &mut dyn Delivery,
) -> Result<ExportOutcome, ExportError> {
    match kind {
        ExportKind::Tabular => export_tabular(profiles, language, delivery),
        ExportKind::Narrative => export_narrative(profiles, language, delivery),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{RecordingDelivery, parse_quoted_row, profile};
    use tempfile::TempDir;

    fn omri() -> Profile {
        let mut p = profile("Omri");
        p.memory = "The \"legendary\" trip to Eilat".into();
        p.song = "Shir \"Ha\"Shalom".into();
        p.yearbook_dedication = Some("Good luck!".into());
        p
    }

    // =========================================================================
    // quote_field
    // =========================================================================

    #[test]
    fn quote_plain_field() {
        assert_eq!(quote_field("Haifa"), "\"Haifa\"");
    }

    #[test]
    fn quote_doubles_inner_quotes() {
        assert_eq!(quote_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn quote_empty_field() {
        assert_eq!(quote_field(""), "\"\"");
    }

    #[test]
    fn quoted_values_parse_back_exactly() {
        let values = [
            "\"",
            "\"\"",
            "ends with quote\"",
            "\"starts with quote",
            "comma, inside",
            "line\r\nbreak",
            "מורה \"אהובה\"",
            "",
        ];
        let row = values
            .iter()
            .map(|v| quote_field(v))
            .collect::<Vec<_>>()
            .join(",");
        let parsed = parse_quoted_row(&row);
        assert_eq!(parsed, values);
    }

    // =========================================================================
    // tabular_document
    // =========================================================================

    #[test]
    fn tabular_starts_with_bom_and_header() {
        let doc = tabular_document(&[omri()], Language::English);
        assert!(doc.starts_with('\u{FEFF}'));
        let first_line = doc.trim_start_matches('\u{FEFF}').split("\r\n").next().unwrap();
        assert_eq!(
            first_line,
            "Full name,Date of birth,Classes,City,Workplace,Role,Social link,\
             Memory,Influential teacher,Embarrassing moment,Song,Dedication"
        );
    }

    #[test]
    fn tabular_has_one_row_per_profile() {
        let profiles = vec![omri(), profile("Dana"), profile("Yael")];
        let doc = tabular_document(&profiles, Language::English);
        let lines: Vec<&str> = doc.split("\r\n").collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("\"Omri\""));
        assert!(lines[2].starts_with("\"Dana\""));
        assert!(lines[3].starts_with("\"Yael\""));
        assert!(!doc.ends_with("\r\n"));
    }

    #[test]
    fn tabular_row_round_trips_every_field() {
        let p = omri();
        let doc = tabular_document(std::slice::from_ref(&p), Language::English);
        let row = doc.split("\r\n").nth(1).unwrap();
        let parsed = parse_quoted_row(row);
        assert_eq!(parsed.len(), 12);
        assert_eq!(parsed, tabular_fields(&p));
        assert_eq!(parsed[7], "The \"legendary\" trip to Eilat");
        assert_eq!(parsed[10], "Shir \"Ha\"Shalom");
    }

    #[test]
    fn tabular_quotes_every_column_not_just_answers() {
        let mut p = profile("Dana \"Dee\" Levi");
        p.workplace = "\"Acme\" Ltd".into();
        let doc = tabular_document(std::slice::from_ref(&p), Language::English);
        let row = doc.split("\r\n").nth(1).unwrap();
        assert!(row.starts_with("\"Dana \"\"Dee\"\" Levi\""));
        let parsed = parse_quoted_row(row);
        assert_eq!(parsed[0], "Dana \"Dee\" Levi");
        assert_eq!(parsed[4], "\"Acme\" Ltd");
    }

    #[test]
    fn missing_dedication_is_empty_field() {
        let doc = tabular_document(&[profile("Dana")], Language::English);
        let row = doc.split("\r\n").nth(1).unwrap();
        assert!(row.ends_with(",\"\""));
    }

    #[test]
    fn tabular_hebrew_headers() {
        let doc = tabular_document(&[omri()], Language::Hebrew);
        assert!(doc.starts_with("\u{FEFF}שם מלא,תאריך לידה,כיתות"));
        assert!(doc.contains(",הקדשה\r\n"));
    }

    // =========================================================================
    // narrative_document
    // =========================================================================

    #[test]
    fn narrative_block_layout() {
        let mut p = profile("Omri");
        p.high_school_photo = Some("data:image/png;base64,AAAA".into());
        p.memory = "Class trip".into();
        p.teacher = "Ms. Cohen".into();
        p.embarrassing_moment = "Fell off the stage".into();
        p.song = "Bohemian Rhapsody".into();

        let doc = narrative_document(std::slice::from_ref(&p), Language::English);
        let expected = "\
-----------------------------------------
Slide for: Omri
-----------------------------------------
High-school photo: present
Current photo: missing

Memory: Class trip
Influential teacher: Ms. Cohen
Embarrassing moment: Fell off the stage
Song of the era: Bohemian Rhapsody
";
        assert_eq!(doc, expected);
    }

    #[test]
    fn narrative_never_contains_image_data() {
        let mut p = profile("Omri");
        p.high_school_photo = Some("data:image/png;base64,SECRETPIXELS".into());
        p.current_photo = Some("data:image/png;base64,MOREPIXELS".into());
        let doc = narrative_document(&[p], Language::English);
        assert!(!doc.contains("PIXELS"));
    }

    #[test]
    fn narrative_blocks_separated_by_blank_line_in_order() {
        let profiles = vec![profile("Omri"), profile("Dana")];
        let doc = narrative_document(&profiles, Language::English);
        let omri_at = doc.find("Slide for: Omri").unwrap();
        let dana_at = doc.find("Slide for: Dana").unwrap();
        assert!(omri_at < dana_at);
        assert!(doc.contains("\n\n-----------------------------------------\nSlide for: Dana"));
    }

    #[test]
    fn narrative_keeps_answers_verbatim() {
        let mut p = profile("Omri");
        p.memory = "He said \"never again\", then did it again".into();
        let doc = narrative_document(&[p], Language::English);
        assert!(doc.contains("Memory: He said \"never again\", then did it again\n"));
    }

    #[test]
    fn narrative_hebrew_labels() {
        let mut p = profile("עומרי");
        p.current_photo = Some("x".into());
        let doc = narrative_document(&[p], Language::Hebrew);
        assert!(doc.contains("שקופית עבור: עומרי"));
        assert!(doc.contains("תמונת תיכון: לא קיימת"));
        assert!(doc.contains("תמונה עדכנית: קיימת"));
    }

    // =========================================================================
    // Export operations
    // =========================================================================

    #[test]
    fn empty_collection_gives_notice_and_no_file() {
        let mut delivery = RecordingDelivery::default();
        let outcome = export_tabular(&[], Language::English, &mut delivery).unwrap();
        assert_eq!(
            outcome,
            ExportOutcome::Skipped {
                notice: "No data to download."
            }
        );
        assert!(delivery.artifacts.is_empty());
    }

    #[test]
    fn empty_collection_narrative_notice() {
        let mut delivery = RecordingDelivery::default();
        let outcome = export_narrative(&[], Language::Hebrew, &mut delivery).unwrap();
        assert_eq!(
            outcome,
            ExportOutcome::Skipped {
                notice: "אין פרופילים ליצירת מצגת."
            }
        );
        assert!(delivery.artifacts.is_empty());
    }

    #[test]
    fn tabular_export_delivers_fixed_name() {
        let mut delivery = RecordingDelivery::default();
        let profiles = vec![omri()];
        let outcome = export_tabular(&profiles, Language::English, &mut delivery).unwrap();

        assert_eq!(
            outcome,
            ExportOutcome::Delivered(PathBuf::from("reunion_data.csv"))
        );
        assert_eq!(delivery.artifacts.len(), 1);
        let artifact = &delivery.artifacts[0];
        assert_eq!(artifact.file_name, "reunion_data.csv");
        assert_eq!(artifact.media_type, "text/csv;charset=utf-8");
        assert_eq!(
            artifact.contents,
            tabular_document(&profiles, Language::English)
        );
    }

    #[test]
    fn narrative_export_delivers_fixed_name() {
        let mut delivery = RecordingDelivery::default();
        let outcome =
            export(ExportKind::Narrative, &[omri()], Language::English, &mut delivery).unwrap();
        assert_eq!(
            outcome,
            ExportOutcome::Delivered(PathBuf::from("presentation_data.txt"))
        );
        assert_eq!(delivery.artifacts[0].file_name, "presentation_data.txt");
    }

    #[test]
    fn directory_delivery_writes_file() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("dist");
        let mut delivery = DirectoryDelivery::new(&out);

        let outcome = export_tabular(&[omri()], Language::English, &mut delivery).unwrap();
        let path = out.join("reunion_data.csv");
        assert_eq!(outcome, ExportOutcome::Delivered(path.clone()));

        let bytes = fs::read(&path).unwrap();
        assert_eq!(&bytes[..3], &[0xEF, 0xBB, 0xBF]);
    }

    #[test]
    fn directory_delivery_skips_write_when_empty() {
        let tmp = TempDir::new().unwrap();
        let mut delivery = DirectoryDelivery::new(tmp.path());
        export_narrative(&[], Language::English, &mut delivery).unwrap();
        assert!(!tmp.path().join("presentation_data.txt").exists());
    }

    #[test]
    fn empty_export_removes_previous_artifact() {
        let tmp = TempDir::new().unwrap();
        let mut delivery = DirectoryDelivery::new(tmp.path());
        let csv = tmp.path().join("reunion_data.csv");
        let txt = tmp.path().join("presentation_data.txt");

        for kind in ExportKind::ALL {
            export(kind, &[omri()], Language::English, &mut delivery).unwrap();
        }
        assert!(csv.exists() && txt.exists());

        for kind in ExportKind::ALL {
            let outcome = export(kind, &[], Language::English, &mut delivery).unwrap();
            assert!(matches!(outcome, ExportOutcome::Skipped { .. }));
        }
        assert!(!csv.exists());
        assert!(!txt.exists());
    }

    #[test]
    fn skipped_export_withdraws_fixed_name() {
        let mut delivery = RecordingDelivery::default();
        export_tabular(&[], Language::English, &mut delivery).unwrap();
        assert_eq!(delivery.withdrawn, vec!["reunion_data.csv"]);
    }
}
