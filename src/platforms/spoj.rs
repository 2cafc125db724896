//! SPOJ adapter (profile page scrape)
//!
//! SPOJ profile pages carry their stats as loosely structured labeled
//! text, so matching is heuristic: every paragraph is scanned for text
//! beginning with a known label. The solved and to-do problem lists are
//! the first and second table of the profile-tables container.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::models::{PlatformStats, StatValue, stat_map};

use super::{FetchError, Platform, element_text, extract_integer, get_text};

/// SPOJ stat field names
mod fields {
    pub const JOIN_DATE: &str = "joinDate";
    pub const WORLD_RANK: &str = "worldRank";
    pub const POINTS: &str = "points";
    pub const INSTITUTION: &str = "institution";
    pub const SOLVED_PROBLEMS: &str = "solvedProblems";
    pub const TODO_PROBLEMS: &str = "todoProblems";
}

#[derive(Debug, Default, PartialEq)]
struct SpojProfile {
    join_date: Option<String>,
    world_rank: Option<i64>,
    points: Option<f64>,
    institution: Option<String>,
    solved_problems: Vec<String>,
    todo_problems: Vec<String>,
}

pub async fn fetch(client: &reqwest::Client, base: &str, username: &str) -> PlatformStats {
    match try_fetch(client, base, username).await {
        Ok(stats) => stats,
        Err(err) => {
            tracing::warn!(
                platform = Platform::Spoj.name(),
                username,
                error = %err,
                "upstream fetch failed"
            );
            unavailable(username)
        }
    }
}

pub(super) fn unavailable(username: &str) -> PlatformStats {
    PlatformStats::failed(
        Platform::Spoj.name(),
        username,
        stat_map([
            (fields::JOIN_DATE, StatValue::na()),
            (fields::WORLD_RANK, StatValue::na()),
            (fields::POINTS, StatValue::na()),
            (fields::INSTITUTION, StatValue::na()),
            (fields::SOLVED_PROBLEMS, StatValue::na()),
            (fields::TODO_PROBLEMS, StatValue::na()),
        ]),
    )
}

async fn try_fetch(
    client: &reqwest::Client,
    base: &str,
    username: &str,
) -> Result<PlatformStats, FetchError> {
    let url = format!("{base}/users/{username}/");
    let page = get_text(client, &url).await?;
    let profile = parse_profile(&page)?;

    Ok(PlatformStats::success(
        Platform::Spoj.name(),
        username,
        stat_map([
            (
                fields::JOIN_DATE,
                profile
                    .join_date
                    .map(StatValue::Text)
                    .unwrap_or_else(StatValue::na),
            ),
            (
                fields::WORLD_RANK,
                profile
                    .world_rank
                    .map(StatValue::Number)
                    .unwrap_or_else(StatValue::na),
            ),
            (
                fields::POINTS,
                profile
                    .points
                    .map(StatValue::Float)
                    .unwrap_or_else(StatValue::na),
            ),
            (
                fields::INSTITUTION,
                profile
                    .institution
                    .map(StatValue::Text)
                    .unwrap_or_else(StatValue::na),
            ),
            (
                fields::SOLVED_PROBLEMS,
                StatValue::Codes(profile.solved_problems),
            ),
            (
                fields::TODO_PROBLEMS,
                StatValue::Codes(profile.todo_problems),
            ),
        ]),
    ))
}

static POINTS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+(?:\.[0-9]+)?)\s*point").expect("valid points pattern"));

/// Extract the stats from raw profile markup
fn parse_profile(page: &str) -> Result<SpojProfile, FetchError> {
    let document = Html::parse_document(page);
    let paragraph_selector = Selector::parse("p")?;
    let paragraphs: Vec<String> = document
        .select(&paragraph_selector)
        .map(|el| element_text(&el))
        .collect();

    let join_date = labeled_value(&paragraphs, "Joined");
    let institution = labeled_value(&paragraphs, "Institution");

    let rank_text = paragraphs.iter().find(|t| t.starts_with("World Rank"));
    let world_rank = rank_text.and_then(|t| extract_integer(t));
    let points = rank_text
        .and_then(|t| POINTS_RE.captures(t))
        .and_then(|caps| caps[1].parse().ok());

    let table_selector = Selector::parse("#user-profile-tables table")?;
    let anchor_selector = Selector::parse("a")?;
    let mut tables = document.select(&table_selector);
    let solved_problems = tables
        .next()
        .map(|table| problem_codes(&table, &anchor_selector))
        .unwrap_or_default();
    let todo_problems = tables
        .next()
        .map(|table| problem_codes(&table, &anchor_selector))
        .unwrap_or_default();

    Ok(SpojProfile {
        join_date,
        world_rank,
        points,
        institution,
        solved_problems,
        todo_problems,
    })
}

/// The remainder of the first paragraph starting with `label`
fn labeled_value(paragraphs: &[String], label: &str) -> Option<String> {
    paragraphs
        .iter()
        .find_map(|text| text.strip_prefix(label))
        .map(|rest| rest.trim_start_matches(':').trim().to_string())
        .filter(|rest| !rest.is_empty())
}

fn problem_codes(table: &ElementRef, anchor_selector: &Selector) -> Vec<String> {
    table
        .select(anchor_selector)
        .map(|a| element_text(&a))
        .filter(|code| !code.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROFILE_FIXTURE: &str = r#"
        <html><body>
          <div id="user-profile-left">
            <h3>mitsos</h3>
            <p>Joined Jan 15, 2015</p>
            <p>World Rank: #1,234 (45.5 points)</p>
            <p>Institution: National Technical University</p>
          </div>
          <div id="user-profile-tables">
            <h5>List of solved classical problems</h5>
            <table><tr>
              <td><a href="/status/TEST">TEST</a></td>
              <td><a href="/status/PRIME1">PRIME1</a></td>
            </tr></table>
            <h5>List of not yet solved classical problems</h5>
            <table><tr>
              <td><a href="/status/ACODE">ACODE</a></td>
            </tr></table>
          </div>
        </body></html>
    "#;

    #[test]
    fn test_parse_profile() {
        let profile = parse_profile(PROFILE_FIXTURE).unwrap();
        assert_eq!(profile.join_date.as_deref(), Some("Jan 15, 2015"));
        assert_eq!(profile.world_rank, Some(1234));
        assert_eq!(profile.points, Some(45.5));
        assert_eq!(
            profile.institution.as_deref(),
            Some("National Technical University")
        );
        assert_eq!(profile.solved_problems, vec!["TEST", "PRIME1"]);
        assert_eq!(profile.todo_problems, vec!["ACODE"]);
    }

    #[test]
    fn test_parse_profile_with_nothing_recognizable() {
        let profile = parse_profile("<html><body><p>hello</p></body></html>").unwrap();
        assert_eq!(profile, SpojProfile::default());
    }

    #[test]
    fn test_labeled_value_requires_prefix_match() {
        let paragraphs = vec!["Recently Joined users".to_string()];
        // "Joined" appears mid-text, not as a prefix
        assert_eq!(labeled_value(&paragraphs, "Joined"), None);
    }
}
