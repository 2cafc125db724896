//! Leaderboard model

use serde::{Deserialize, Serialize};

/// One row of the global leaderboard
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingEntry {
    pub username: String,
    pub total_problems_solved: u32,
    pub average_contest_rating: u32,
}
