//! Authentication handler implementations

use axum::{Json, extract::State, http::StatusCode};

use crate::{
    error::{AppError, AppResult},
    services::AuthService,
    state::AppState,
};

use super::{request::CredentialsRequest, response::AuthResponse};

/// Register a new user
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<CredentialsRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    let (username, password) = payload.into_credentials()?;

    AuthService::register(state.accounts(), &username, &password)?;

    let response = AuthResponse {
        message: "Registration successful.".to_string(),
        user_id: username,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// Login with username and password
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<CredentialsRequest>,
) -> AppResult<Json<AuthResponse>> {
    // An incomplete login attempt can never match an account
    let (username, password) = payload
        .into_credentials()
        .map_err(|_| AppError::InvalidCredentials)?;

    AuthService::login(state.accounts(), &username, &password)?;

    let response = AuthResponse {
        message: "Login successful.".to_string(),
        user_id: username,
    };

    Ok(Json(response))
}
