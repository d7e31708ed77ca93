//! Submission intake: profile files on disk → [`Profile`]s.
//!
//! Each attendee's answers are one file in the submissions directory, either
//! TOML or JSON, with the same keys the form asks for:
//!
//! ```text
//! submissions/
//! ├── config.toml              # Reunion config (not a submission)
//! ├── 001-omri.toml            # Numbered = fixed position
//! ├── 002-dana/                # Folder name orders its files
//! │   ├── profile.json
//! │   ├── then.jpg             # Photo paths are relative to the file
//! │   └── now.png
//! └── late-entry.toml          # Unnumbered = after all numbered ones
//! ```
//!
//! ## Validation
//!
//! - Unknown keys are rejected, same as `config.toml`.
//! - `full_name`, `date_of_birth`, `class_names`, `current_city` and both
//!   photo paths are required and must not be blank.
//! - A photo that can't be encoded does not reject the submission: the
//!   profile is accepted with that photo unset (see [`encoding`]).
//!
//! [`encoding`]: crate::encoding

use crate::config::{CONFIG_FILENAME, ReunionConfig};
use crate::encoding::{encode_gallery_or_unset, encode_or_unset};
use crate::naming::parse_submission_name;
use crate::types::{Profile, ProfileId};
use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum IntakeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Invalid TOML in {path}: {source}")]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("{path} is not valid UTF-8: {source}")]
    Encoding {
        path: PathBuf,
        source: std::str::Utf8Error,
    },
    #[error("{path}: required field '{field}' is missing or blank")]
    MissingField { path: PathBuf, field: &'static str },
    #[error("Submissions directory not found: {0}")]
    SourceNotFound(PathBuf),
}

/// On-disk shape of a submission file.
///
/// Mirrors the form: text answers as strings, photos as paths.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SubmissionFile {
    pub full_name: String,
    pub date_of_birth: String,
    pub class_names: String,
    pub current_city: String,
    pub workplace: String,
    pub role: String,
    pub social_link: String,
    pub high_school_photo: Option<PathBuf>,
    pub current_photo: Option<PathBuf>,
    pub memory: String,
    pub teacher: String,
    pub embarrassing_moment: String,
    pub song: String,
    pub gallery_photos: Vec<PathBuf>,
    pub yearbook_dedication: Option<String>,
}

impl SubmissionFile {
    /// Check that every required answer is present.
    pub fn validate(&self, path: &Path) -> Result<(), IntakeError> {
        let required_text = [
            ("full_name", &self.full_name),
            ("date_of_birth", &self.date_of_birth),
            ("class_names", &self.class_names),
            ("current_city", &self.current_city),
        ];
        for (field, value) in required_text {
            if value.trim().is_empty() {
                return Err(missing(path, field));
            }
        }

        let required_photos = [
            ("high_school_photo", &self.high_school_photo),
            ("current_photo", &self.current_photo),
        ];
        for (field, value) in required_photos {
            match value {
                Some(p) if !p.as_os_str().is_empty() => {}
                _ => return Err(missing(path, field)),
            }
        }
        Ok(())
    }
}

fn missing(path: &Path, field: &'static str) -> IntakeError {
    IntakeError::MissingField {
        path: path.to_path_buf(),
        field,
    }
}

/// An accepted submission and the file it came from.
#[derive(Debug, Clone)]
pub struct Submission {
    pub source: PathBuf,
    pub profile: Profile,
}

/// Random-enough per-session value mixed into every profile id.
///
/// Two sessions reading the same files assign different ids.
pub fn session_nonce() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    format!("{}-{}", std::process::id(), nanos)
}

/// Derive a profile id from the session nonce, the submission's position,
/// and the raw file contents.
pub fn profile_id(nonce: &str, sequence: u64, contents: &[u8]) -> ProfileId {
    let mut hasher = Sha256::new();
    hasher.update(nonce.as_bytes());
    hasher.update(sequence.to_le_bytes());
    hasher.update(contents);
    let hex = format!("{:x}", hasher.finalize());
    ProfileId::new(&hex[..16])
}

fn is_submission_file(path: &Path) -> bool {
    if path.file_name().and_then(|n| n.to_str()) == Some(CONFIG_FILENAME) {
        return false;
    }
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("toml") | Some("json")
    )
}

/// Name that orders a submission: the stem of its top-level entry under
/// `root`, so `002-dana/profile.json` sorts as `002-dana`.
fn ordering_stem(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let top = relative.components().next().map(|c| Path::new(c.as_os_str()));
    top.and_then(|t| t.file_stem())
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Find every submission file under `root`, in submission order.
///
/// Entries sort by the `NNN-` prefix of their top-level file or folder name,
/// then by that name, then by full path.
pub fn discover_submissions(root: &Path) -> Result<Vec<PathBuf>, IntakeError> {
    if !root.is_dir() {
        return Err(IntakeError::SourceNotFound(root.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(true) {
        let entry = entry?;
        if entry.file_type().is_file() && is_submission_file(entry.path()) {
            files.push(entry.into_path());
        }
    }

    let mut keyed: Vec<_> = files
        .into_iter()
        .map(|path| (parse_submission_name(&ordering_stem(root, &path)), path))
        .collect();
    keyed.sort_by(|(name_a, a), (name_b, b)| {
        name_a
            .sort_key()
            .cmp(&name_b.sort_key())
            .then_with(|| a.cmp(b))
    });
    Ok(keyed.into_iter().map(|(_, path)| path).collect())
}

/// Parse a submission file by extension.
pub fn parse_submission(path: &Path, contents: &str) -> Result<SubmissionFile, IntakeError> {
    let file: SubmissionFile = if path.extension().and_then(|e| e.to_str()) == Some("json") {
        serde_json::from_str(contents).map_err(|source| IntakeError::Json {
            path: path.to_path_buf(),
            source,
        })?
    } else {
        toml::from_str(contents).map_err(|source| IntakeError::Toml {
            path: path.to_path_buf(),
            source,
        })?
    };
    file.validate(path)?;
    Ok(file)
}

/// Turn a validated submission into a profile, encoding its photos.
fn into_profile(file: SubmissionFile, path: &Path, id: ProfileId, max_bytes: u64) -> Profile {
    let base = path.parent().unwrap_or(Path::new(""));
    let resolve = |p: &PathBuf| base.join(p);

    let high_school = file.high_school_photo.as_ref().map(resolve);
    let current = file.current_photo.as_ref().map(resolve);
    let gallery: Vec<PathBuf> = file.gallery_photos.iter().map(resolve).collect();

    Profile {
        id,
        full_name: file.full_name,
        date_of_birth: file.date_of_birth,
        class_names: file.class_names,
        current_city: file.current_city,
        workplace: file.workplace,
        role: file.role,
        social_link: file.social_link,
        high_school_photo: encode_or_unset(high_school.as_deref(), "high_school_photo", max_bytes),
        current_photo: encode_or_unset(current.as_deref(), "current_photo", max_bytes),
        memory: file.memory,
        teacher: file.teacher,
        embarrassing_moment: file.embarrassing_moment,
        song: file.song,
        gallery_photos: encode_gallery_or_unset(&gallery, max_bytes),
        yearbook_dedication: file.yearbook_dedication,
    }
}

/// Read, validate, and encode every submission under `root`.
///
/// The first invalid submission aborts intake; nothing is partially loaded.
pub fn load_submissions(
    root: &Path,
    config: &ReunionConfig,
    nonce: &str,
) -> Result<Vec<Submission>, IntakeError> {
    let files = discover_submissions(root)?;
    log::info!("found {} submission file(s) in {}", files.len(), root.display());

    let mut submissions = Vec::with_capacity(files.len());
    for (sequence, path) in files.into_iter().enumerate() {
        let bytes = fs::read(&path)?;
        let contents = std::str::from_utf8(&bytes).map_err(|source| IntakeError::Encoding {
            path: path.clone(),
            source,
        })?;
        let file = parse_submission(&path, contents)?;
        let id = profile_id(nonce, sequence as u64, &bytes);
        log::debug!("{} → profile {}", path.display(), id);
        let profile = into_profile(file, &path, id, config.intake.max_photo_bytes);
        submissions.push(Submission {
            source: path,
            profile,
        });
    }
    Ok(submissions)
}

/// Returns a commented submission template.
///
/// Used by the `gen-profile` CLI command.
pub fn stock_profile_toml() -> &'static str {
    r##"# Reunion Profile
# ===============
# Save as NNN-your-name.toml in the submissions folder. The number sets the
# order profiles appear in; files without one come last.
# Photo paths are relative to this file.

# ---------------------------------------------------------------------------
# Personal and professional details (required unless marked optional)
# ---------------------------------------------------------------------------
full_name = ""
date_of_birth = ""          # e.g. "1990-04-12"
class_names = ""            # Comma-separated, e.g. "12B, Drama club"
current_city = ""
workplace = ""              # optional
role = ""                   # optional
social_link = ""            # optional

# ---------------------------------------------------------------------------
# Then and now (required)
# ---------------------------------------------------------------------------
high_school_photo = "then.jpg"
current_photo = "now.jpg"

# ---------------------------------------------------------------------------
# A little nostalgia (optional)
# ---------------------------------------------------------------------------
memory = ""
teacher = ""
embarrassing_moment = ""
song = ""

# ---------------------------------------------------------------------------
# Keepsakes (optional)
# ---------------------------------------------------------------------------
# More photos for the shared gallery, shown in this order.
gallery_photos = []

# A message for the digital yearbook.
# yearbook_dedication = ""
"##
}
