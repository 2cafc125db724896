//! Global leaderboard handlers

use axum::{Json, Router, routing::get};

use crate::models::RankingEntry;
use crate::state::AppState;

/// The reference leaderboard
///
/// A static list, independent of registered accounts and live platform
/// data.
fn global_rankings() -> Vec<RankingEntry> {
    [
        ("user1", 750, 2100),
        ("user2", 920, 2350),
        ("user3", 510, 1800),
        ("user4", 680, 2050),
        ("user5", 850, 2200),
    ]
    .into_iter()
    .map(
        |(username, total_problems_solved, average_contest_rating)| RankingEntry {
            username: username.to_string(),
            total_problems_solved,
            average_contest_rating,
        },
    )
    .collect()
}

/// Leaderboard endpoint
async fn get_rankings() -> Json<Vec<RankingEntry>> {
    Json(global_rankings())
}

/// Leaderboard routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/rankings", get(get_rankings))
}
