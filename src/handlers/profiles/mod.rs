//! Profile management handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::state::AppState;

/// Profile routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handler::add_profile))
        .route("/{user_id}", get(handler::get_user_profiles))
        .route("/{user_id}/{profile_id}", delete(handler::delete_profile))
}
