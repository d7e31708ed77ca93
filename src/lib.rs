//! # Reunion Book
//!
//! Collects class reunion profiles for a single session and turns them into
//! browsable pages, a digital yearbook, and two downloadable exports.
//! Each attendee's answers are one file in the submissions directory.
//!
//! # Architecture: Intake → Store → Views and Exports
//!
//! ```text
//! 1. Intake    submissions/  →  Profiles        (validate, encode photos)
//! 2. Store     Profiles      →  ProfileStore    (append-only, session-scoped)
//! 3. Output    ProfileStore  →  dist/*.html     (views, derived on demand)
//!                            →  dist/*.csv,txt  (exports)
//! ```
//!
//! The store is the only mutable state. Everything downstream reads it by
//! shared reference and recomputes what it needs: the gallery and yearbook
//! are derived from the profiles on every render, never stored.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`intake`] | Reads, validates, and identifies submission files |
//! | [`encoding`] | Photo file → `data:` URL, with size and format checks |
//! | [`store`] | Session-scoped, append-only profile collection |
//! | [`derive`] | Gallery photos and yearbook dedications projected from profiles |
//! | [`export`] | Tabular (CSV) and narrative (text) documents and their delivery |
//! | [`views`] | The five HTML pages, rendered with Maud |
//! | [`config`] | `config.toml` loading, validation, merging, and CSS generation |
//! | [`locale`] | English and Hebrew text tables |
//! | [`types`] | `Profile` and the derived entry types |
//! | [`naming`] | `NNN-name` filename convention that orders submissions |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Photos Travel as Data URLs
//!
//! Intake reads each photo once and embeds it as `data:{mime};base64,...`.
//! Pages and exports never go back to the filesystem, and the generated
//! HTML is self-contained. Pixels are never decoded: the media type is
//! sniffed from magic bytes.
//!
//! ## A Bad Photo Never Blocks a Profile
//!
//! Missing text answers reject a submission. A photo that is unreadable,
//! too large, or not an image only leaves that slot empty, with a warning.
//!
//! ## Exports Are Refused, Not Empty
//!
//! With no profiles, an export produces a user-facing notice and no file,
//! rather than a header-only CSV or a blank text file.

pub mod config;
pub mod derive;
pub mod encoding;
pub mod export;
pub mod intake;
pub mod locale;
pub mod naming;
pub mod output;
pub mod store;
pub mod types;
pub mod views;

#[cfg(test)]
pub(crate) mod test_helpers;
