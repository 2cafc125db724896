//! Profile handler implementations

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    error::AppResult,
    models::{PlatformStats, ProfileLink},
    services::{ProfileService, StatsService},
    state::AppState,
};

use super::{request::AddProfileRequest, response::MessageResponse};

/// Aggregated live stats for every profile the user has registered
///
/// Always 200: an unknown user simply has nothing registered and gets an
/// empty array.
pub async fn get_user_profiles(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Json<Vec<PlatformStats>> {
    let links = ProfileService::list(state.profiles(), &user_id);
    let results = StatsService::collect(&state, links).await;
    Json(results)
}

/// Register a platform handle for a user
pub async fn add_profile(
    State(state): State<AppState>,
    Json(payload): Json<AddProfileRequest>,
) -> AppResult<(StatusCode, Json<ProfileLink>)> {
    let (user_id, platform, username) = payload.into_parts()?;

    let link = ProfileService::add(state.profiles(), &user_id, &platform, &username);

    Ok((StatusCode::CREATED, Json(link)))
}

/// Remove a registered profile by id
pub async fn delete_profile(
    State(state): State<AppState>,
    Path((user_id, profile_id)): Path<(String, String)>,
) -> AppResult<Json<MessageResponse>> {
    ProfileService::remove(state.profiles(), &user_id, &profile_id)?;

    Ok(Json(MessageResponse {
        message: "Profile deleted successfully.".to_string(),
    }))
}
