//! Authentication response DTOs

use serde::Serialize;

/// Outcome of a successful registration or login
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub message: String,
    pub user_id: String,
}
