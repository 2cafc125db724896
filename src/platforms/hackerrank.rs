//! HackerRank adapter (placeholder)
//!
//! HackerRank has no public profile API and the profile page is rendered
//! client-side, so there is no live source yet. The adapter exists so the
//! platform registry stays exhaustive; it performs no I/O and never fails.
//!
//! TODO: scrape the community leaderboard endpoint once its pagination is
//! understood.

use crate::models::{PlatformStats, unavailable_stats};

use super::Platform;

pub fn fetch(username: &str) -> PlatformStats {
    PlatformStats::success(Platform::HackerRank.name(), username, unavailable_stats())
}

pub(super) fn unavailable(username: &str) -> PlatformStats {
    PlatformStats::failed(Platform::HackerRank.name(), username, unavailable_stats())
}
