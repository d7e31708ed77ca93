//! Read-only projections over the profile collection.
//!
//! Both functions are pure: same profiles in, same entries out. They are
//! called on every render rather than cached, since each pass is a single
//! linear walk over the profiles.
//!
//! Entries borrow their image and text from the profiles, so a gallery of
//! large encoded photos costs no copies.

use crate::locale::Language;
use crate::types::{DedicationEntry, PhotoEntry, PhotoKind, Profile};

/// Flatten every profile's photos into gallery entries.
///
/// Per profile the order is fixed: high-school photo, current photo, then
/// gallery photos in upload order. Missing photos produce no entry.
pub fn derive_photos(profiles: &[Profile], language: Language) -> Vec<PhotoEntry<'_>> {
    let labels = language.labels();
    let mut photos = Vec::new();

    for profile in profiles {
        let name = profile.full_name.as_str();

        if let Some(image) = profile.high_school_photo.as_deref() {
            photos.push(PhotoEntry {
                image,
                caption: format!("{}{}", labels.caption_high_school, name),
                kind: PhotoKind::HighSchool,
            });
        }
        if let Some(image) = profile.current_photo.as_deref() {
            photos.push(PhotoEntry {
                image,
                caption: format!("{}{}", labels.caption_current, name),
                kind: PhotoKind::Current,
            });
        }
        photos.extend(profile.gallery_photos.iter().map(|image| PhotoEntry {
            image: image.as_str(),
            caption: format!("{}{}", labels.caption_gallery, name),
            kind: PhotoKind::Gallery,
        }));
    }

    photos
}

/// Collect the yearbook dedications.
///
/// A dedication counts only if something is left after trimming, but the
/// message is emitted as written: authors' own leading and trailing
/// whitespace is kept.
pub fn derive_dedications(profiles: &[Profile]) -> Vec<DedicationEntry<'_>> {
    profiles
        .iter()
        .filter_map(|profile| {
            let message = profile.yearbook_dedication.as_deref()?;
            if message.trim().is_empty() {
                return None;
            }
            Some(DedicationEntry {
                author: &profile.full_name,
                message,
            })
        })
        .collect()
}
