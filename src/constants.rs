//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

// =============================================================================
// UPSTREAM FETCH DEFAULTS
// =============================================================================

/// Default per-adapter timeout in seconds
pub const DEFAULT_FETCH_TIMEOUT_SECONDS: u64 = 10;

/// User agent sent with requests to scraped profile pages
pub const DEFAULT_FETCH_USER_AGENT: &str = "Mozilla/5.0";

// =============================================================================
// STATS
// =============================================================================

/// Marker for a statistic that could not be determined, distinct from zero
pub const NOT_AVAILABLE: &str = "N/A";

/// Stat field names shared across platforms
pub mod stat_fields {
    pub const PROBLEMS_SOLVED: &str = "problemsSolved";
    pub const CONTESTS_ATTENDED: &str = "contestsAttended";
    pub const CONTEST_RATING: &str = "contestRating";
}

// =============================================================================
// UPSTREAM BASE URLS
// =============================================================================

/// Default base URLs for the supported platforms, each overridable by
/// environment variable (see `config::UpstreamConfig`).
pub mod upstream_defaults {
    pub const CODEFORCES_API: &str = "https://codeforces.com/api";
    pub const LEETCODE_API: &str = "https://alfa-leetcode-api.onrender.com";
    pub const CODECHEF: &str = "https://www.codechef.com";
    pub const SPOJ: &str = "https://www.spoj.com";
    pub const INTERVIEWBIT: &str = "https://www.interviewbit.com";
}
