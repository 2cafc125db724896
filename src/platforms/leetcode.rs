//! LeetCode adapter (unofficial stats API)
//!
//! LeetCode has no official API, so this goes through a community
//! aggregator with separate solved-count and contest endpoints, queried
//! concurrently and merged into one record.

use serde::Deserialize;

use crate::constants::stat_fields;
use crate::models::{PlatformStats, StatValue, stat_map, unavailable_stats};

use super::{FetchError, Platform, get_json};

#[derive(Debug, Deserialize)]
struct SolvedResponse {
    #[serde(rename = "solvedProblem", default)]
    solved_problem: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct ContestResponse {
    #[serde(rename = "contestAttend", default)]
    contest_attend: Option<i64>,
    // The aggregator reports the rating as a float, occasionally as a string
    #[serde(rename = "contestRating", default)]
    contest_rating: Option<serde_json::Value>,
}

pub async fn fetch(client: &reqwest::Client, base: &str, username: &str) -> PlatformStats {
    match try_fetch(client, base, username).await {
        Ok(stats) => stats,
        Err(err) => {
            tracing::warn!(
                platform = Platform::LeetCode.name(),
                username,
                error = %err,
                "upstream fetch failed"
            );
            unavailable(username)
        }
    }
}

pub(super) fn unavailable(username: &str) -> PlatformStats {
    PlatformStats::failed(Platform::LeetCode.name(), username, unavailable_stats())
}

async fn try_fetch(
    client: &reqwest::Client,
    base: &str,
    username: &str,
) -> Result<PlatformStats, FetchError> {
    let solved_url = format!("{base}/{username}/solved");
    let contest_url = format!("{base}/{username}/contest");

    let (solved, contest) = tokio::try_join!(
        get_json::<SolvedResponse>(client, &solved_url),
        get_json::<ContestResponse>(client, &contest_url),
    )?;

    Ok(PlatformStats::success(
        Platform::LeetCode.name(),
        username,
        stat_map([
            (
                stat_fields::PROBLEMS_SOLVED,
                solved
                    .solved_problem
                    .map(StatValue::Number)
                    .unwrap_or_else(StatValue::na),
            ),
            (
                stat_fields::CONTESTS_ATTENDED,
                contest
                    .contest_attend
                    .map(StatValue::Number)
                    .unwrap_or_else(StatValue::na),
            ),
            (
                stat_fields::CONTEST_RATING,
                rounded_rating(contest.contest_rating.as_ref()),
            ),
        ]),
    ))
}

/// Round a rating to the nearest integer when parseable
fn rounded_rating(value: Option<&serde_json::Value>) -> StatValue {
    let parsed = match value {
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        Some(serde_json::Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed
        .map(|rating| StatValue::Number(rating.round() as i64))
        .unwrap_or_else(StatValue::na)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounded_rating_handles_floats_and_strings() {
        let float = serde_json::json!(1852.49);
        assert_eq!(rounded_rating(Some(&float)), StatValue::Number(1852));

        let float_up = serde_json::json!(1852.5);
        assert_eq!(rounded_rating(Some(&float_up)), StatValue::Number(1853));

        let string = serde_json::json!("2011.7");
        assert_eq!(rounded_rating(Some(&string)), StatValue::Number(2012));

        let junk = serde_json::json!("unrated");
        assert!(rounded_rating(Some(&junk)).is_na());
        assert!(rounded_rating(None).is_na());
    }

    #[test]
    fn test_contest_response_tolerates_missing_fields() {
        let contest: ContestResponse = serde_json::from_str("{}").unwrap();
        assert!(contest.contest_attend.is_none());
        assert!(contest.contest_rating.is_none());
    }
}
