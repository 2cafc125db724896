//! Profile link storage

use std::collections::HashMap;
use std::sync::RwLock;

use uuid::Uuid;

use crate::models::ProfileLink;

/// Registered platform handles per user, in insertion order
#[derive(Debug, Default)]
pub struct ProfileStore {
    profiles: RwLock<HashMap<String, Vec<ProfileLink>>>,
}

/// Why a profile removal did not happen
///
/// An unknown user and an unknown profile id are distinct signals.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RemoveProfileError {
    #[error("user not found")]
    UnknownUser,
    #[error("profile not found")]
    UnknownProfile,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a link for the user, creating the user's list on first use.
    /// Duplicate (platform, username) pairs are allowed.
    pub fn add(&self, user_id: &str, link: ProfileLink) -> ProfileLink {
        let mut profiles = self.profiles.write().expect("profile store lock poisoned");
        profiles
            .entry(user_id.to_string())
            .or_default()
            .push(link.clone());
        link
    }

    /// The user's links in insertion order; empty for an unknown user
    pub fn links_for(&self, user_id: &str) -> Vec<ProfileLink> {
        let profiles = self.profiles.read().expect("profile store lock poisoned");
        profiles.get(user_id).cloned().unwrap_or_default()
    }

    /// Remove a link by id. A failed removal leaves the user's list
    /// untouched.
    pub fn remove(&self, user_id: &str, profile_id: &str) -> Result<(), RemoveProfileError> {
        let mut profiles = self.profiles.write().expect("profile store lock poisoned");
        let links = profiles
            .get_mut(user_id)
            .ok_or(RemoveProfileError::UnknownUser)?;

        // A malformed id can never match a stored link
        let id = Uuid::parse_str(profile_id).map_err(|_| RemoveProfileError::UnknownProfile)?;
        let position = links
            .iter()
            .position(|link| link.id == id)
            .ok_or(RemoveProfileError::UnknownProfile)?;
        links.remove(position);
        Ok(())
    }
}
