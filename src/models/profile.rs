//! Profile link model

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A platform handle registered by a user
///
/// Each link belongs to exactly one user identifier. Duplicate
/// (platform, username) pairs under the same user are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileLink {
    pub id: Uuid,
    pub platform: String,
    pub username: String,
}

impl ProfileLink {
    /// Create a link with a freshly generated id
    pub fn new(platform: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            platform: platform.into(),
            username: username.into(),
        }
    }
}
