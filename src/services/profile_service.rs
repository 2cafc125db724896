//! Profile link service

use crate::error::{AppError, AppResult};
use crate::models::ProfileLink;
use crate::store::{ProfileStore, RemoveProfileError};

/// Profile link service
pub struct ProfileService;

impl ProfileService {
    /// Register a platform handle for a user
    pub fn add(store: &ProfileStore, user_id: &str, platform: &str, username: &str) -> ProfileLink {
        let link = store.add(user_id, ProfileLink::new(platform, username));
        tracing::info!(user_id, platform, username, profile_id = %link.id, "profile added");
        link
    }

    /// The user's registered links, in registration order
    pub fn list(store: &ProfileStore, user_id: &str) -> Vec<ProfileLink> {
        store.links_for(user_id)
    }

    /// Remove a registered link by id
    pub fn remove(store: &ProfileStore, user_id: &str, profile_id: &str) -> AppResult<()> {
        store
            .remove(user_id, profile_id)
            .map_err(|err| match err {
                RemoveProfileError::UnknownUser => {
                    AppError::NotFound("User not found.".to_string())
                }
                RemoveProfileError::UnknownProfile => {
                    AppError::NotFound("Profile not found.".to_string())
                }
            })
    }
}
