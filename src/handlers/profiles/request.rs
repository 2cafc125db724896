//! Profile request DTOs

use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// Request to register a platform handle for a user
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddProfileRequest {
    pub user_id: Option<String>,
    pub platform: Option<String>,
    pub username: Option<String>,
}

impl AddProfileRequest {
    /// Unpack the fields, rejecting missing or empty ones
    pub fn into_parts(self) -> AppResult<(String, String, String)> {
        match (
            nonempty(self.user_id),
            nonempty(self.platform),
            nonempty(self.username),
        ) {
            (Some(user_id), Some(platform), Some(username)) => Ok((user_id, platform, username)),
            _ => Err(AppError::Validation(
                "Missing userId, platform, or username.".to_string(),
            )),
        }
    }
}

fn nonempty(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}
