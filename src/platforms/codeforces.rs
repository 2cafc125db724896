//! Codeforces adapter (official REST API)
//!
//! Two independent API calls, issued concurrently: the rating history gives
//! the contests-attended count and the latest rating, the submission
//! history gives the distinct solved-problem count.

use std::collections::HashSet;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::constants::stat_fields;
use crate::models::{PlatformStats, StatValue, stat_map, unavailable_stats};

use super::{FetchError, Platform, get_json};

/// Envelope wrapped around every Codeforces API result
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct ApiResponse<T> {
    status: String,
    #[serde(default)]
    result: Option<T>,
    #[serde(default)]
    comment: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RatingChange {
    #[serde(rename = "newRating")]
    new_rating: i64,
}

#[derive(Debug, Deserialize)]
struct Submission {
    #[serde(default)]
    verdict: Option<String>,
    problem: ProblemRef,
}

#[derive(Debug, Deserialize)]
struct ProblemRef {
    // Absent for problems outside regular contests
    #[serde(rename = "contestId", default)]
    contest_id: Option<i64>,
    index: String,
}

pub async fn fetch(client: &reqwest::Client, base: &str, username: &str) -> PlatformStats {
    match try_fetch(client, base, username).await {
        Ok(stats) => stats,
        Err(err) => {
            tracing::warn!(
                platform = Platform::Codeforces.name(),
                username,
                error = %err,
                "upstream fetch failed"
            );
            unavailable(username)
        }
    }
}

pub(super) fn unavailable(username: &str) -> PlatformStats {
    PlatformStats::failed(Platform::Codeforces.name(), username, unavailable_stats())
}

async fn try_fetch(
    client: &reqwest::Client,
    base: &str,
    username: &str,
) -> Result<PlatformStats, FetchError> {
    let rating_url = format!("{base}/user.rating?handle={username}");
    let status_url = format!("{base}/user.status?handle={username}");

    let (changes, submissions) = tokio::try_join!(
        call_api::<Vec<RatingChange>>(client, &rating_url),
        call_api::<Vec<Submission>>(client, &status_url),
    )?;

    let contest_rating = changes
        .last()
        .map(|change| StatValue::Number(change.new_rating))
        .unwrap_or_else(StatValue::na);

    Ok(PlatformStats::success(
        Platform::Codeforces.name(),
        username,
        stat_map([
            (
                stat_fields::PROBLEMS_SOLVED,
                StatValue::Number(distinct_solved(&submissions) as i64),
            ),
            (
                stat_fields::CONTESTS_ATTENDED,
                StatValue::Number(changes.len() as i64),
            ),
            (stat_fields::CONTEST_RATING, contest_rating),
        ]),
    ))
}

/// Unwrap the API envelope, treating a non-OK payload status as an error
async fn call_api<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
) -> Result<T, FetchError> {
    let body: ApiResponse<T> = get_json(client, url).await?;
    if body.status != "OK" {
        let reason = body.comment.unwrap_or(body.status);
        return Err(FetchError::Rejected {
            url: url.to_string(),
            reason,
        });
    }
    body.result.ok_or(FetchError::ElementNotFound {
        context: "codeforces api result",
    })
}

/// Count distinct problems with an accepted verdict, keyed by
/// contest id + problem index
fn distinct_solved(submissions: &[Submission]) -> usize {
    submissions
        .iter()
        .filter(|submission| submission.verdict.as_deref() == Some("OK"))
        .map(|submission| {
            format!(
                "{}-{}",
                submission.problem.contest_id.unwrap_or_default(),
                submission.problem.index
            )
        })
        .collect::<HashSet<_>>()
        .len()
}
