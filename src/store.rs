//! Session-scoped profile collection.
//!
//! The store is created when a session starts, passed by reference to every
//! consumer, and dropped when the session ends. Appending is the only
//! mutation; readers get a shared slice, so nothing outside the store can
//! reorder or edit a profile.

use crate::types::{Profile, ProfileId};

#[derive(Debug, Default)]
pub struct ProfileStore {
    profiles: Vec<Profile>,
    /// Bumped on every append. Lets a caller tell whether anything changed
    /// since it last read the collection.
    version: u64,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a profile to the end of the collection.
    ///
    /// No validation happens here; submissions are checked by
    /// [`intake`](crate::intake) before they reach the store.
    pub fn append(&mut self, profile: Profile) {
        log::debug!("appending profile {} ({})", profile.id, profile.full_name);
        self.profiles.push(profile);
        self.version += 1;
    }

    /// All profiles in insertion order.
    pub fn all(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn get(&self, id: &ProfileId) -> Option<&Profile> {
        self.profiles.iter().find(|p| &p.id == id)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn version(&self) -> u64 {
        self.version
    }
}
