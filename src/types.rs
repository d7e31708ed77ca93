//! Shared types for the profile session.
//!
//! [`Profile`] is the stored entity. [`PhotoEntry`] and [`DedicationEntry`]
//! are derived projections that borrow from the profiles they were built
//! from; they are recomputed on demand and never stored.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier assigned to a profile when its submission is accepted.
///
/// Opaque to everything except the intake stage that generates it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileId(String);

impl ProfileId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One attendee's submitted record.
///
/// Photo fields hold opaque encoded-image strings (data URLs), never paths.
/// A profile is never modified after it is appended to the
/// [`ProfileStore`](crate::store::ProfileStore), which only hands out shared
/// references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,
    pub full_name: String,
    pub date_of_birth: String,
    /// Comma-separated class names, kept exactly as entered.
    pub class_names: String,
    pub current_city: String,
    pub workplace: String,
    pub role: String,
    pub social_link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high_school_photo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_photo: Option<String>,
    pub memory: String,
    pub teacher: String,
    pub embarrassing_moment: String,
    pub song: String,
    /// Extra photos for the shared gallery, in upload order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub gallery_photos: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yearbook_dedication: Option<String>,
}

/// Which slot of a profile a gallery photo came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoKind {
    HighSchool,
    Current,
    Gallery,
}

/// A photo in the shared gallery, borrowed from its owning profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoEntry<'a> {
    pub image: &'a str,
    pub caption: String,
    pub kind: PhotoKind,
}

/// A yearbook dedication, borrowed from its author's profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DedicationEntry<'a> {
    pub author: &'a str,
    pub message: &'a str,
}
