//! CodeChef adapter (profile page scrape)
//!
//! CodeChef exposes no public API for user stats, so this scrapes the
//! public profile page. A missing element degrades that one field to
//! `"N/A"`; only transport errors fail the whole record.

use scraper::{Html, Selector};

use crate::constants::stat_fields;
use crate::models::{PlatformStats, StatValue, stat_map, unavailable_stats};

use super::{FetchError, Platform, element_text, extract_integer, get_text};

/// Fields scraped from a profile page, each independently best-effort
#[derive(Debug, Default, PartialEq, Eq)]
struct CodechefProfile {
    contest_rating: Option<i64>,
    problems_solved: Option<i64>,
    contests_attended: Option<i64>,
}

pub async fn fetch(client: &reqwest::Client, base: &str, username: &str) -> PlatformStats {
    match try_fetch(client, base, username).await {
        Ok(stats) => stats,
        Err(err) => {
            tracing::warn!(
                platform = Platform::CodeChef.name(),
                username,
                error = %err,
                "upstream fetch failed"
            );
            unavailable(username)
        }
    }
}

pub(super) fn unavailable(username: &str) -> PlatformStats {
    PlatformStats::failed(Platform::CodeChef.name(), username, unavailable_stats())
}

async fn try_fetch(
    client: &reqwest::Client,
    base: &str,
    username: &str,
) -> Result<PlatformStats, FetchError> {
    let url = format!("{base}/users/{username}");
    let page = get_text(client, &url).await?;
    let profile = parse_profile(&page)?;

    Ok(PlatformStats::success(
        Platform::CodeChef.name(),
        username,
        stat_map([
            (
                stat_fields::PROBLEMS_SOLVED,
                profile
                    .problems_solved
                    .map(StatValue::Number)
                    .unwrap_or_else(StatValue::na),
            ),
            (
                stat_fields::CONTESTS_ATTENDED,
                profile
                    .contests_attended
                    .map(StatValue::Number)
                    .unwrap_or_else(StatValue::na),
            ),
            (
                stat_fields::CONTEST_RATING,
                profile
                    .contest_rating
                    .map(StatValue::Number)
                    .unwrap_or_else(StatValue::na),
            ),
        ]),
    ))
}

/// Extract the stats from raw profile markup
fn parse_profile(page: &str) -> Result<CodechefProfile, FetchError> {
    let document = Html::parse_document(page);

    let rating_selector = Selector::parse("div.rating-number")?;
    let contest_rating = document
        .select(&rating_selector)
        .next()
        .and_then(|el| extract_integer(&element_text(&el)));

    let heading_selector = Selector::parse("h3")?;
    let problems_solved = document
        .select(&heading_selector)
        .find(|el| element_text(el).contains("Total Problems Solved"))
        .and_then(|el| extract_integer(&element_text(&el)));

    let contests_selector = Selector::parse("div.contest-participated-count b")?;
    let contests_attended = document
        .select(&contests_selector)
        .next()
        .and_then(|el| extract_integer(&element_text(&el)));

    Ok(CodechefProfile {
        contest_rating,
        problems_solved,
        contests_attended,
    })
}
