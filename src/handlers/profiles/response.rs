//! Profile response DTOs

use serde::Serialize;

/// Plain confirmation message
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
