//! Platform adapters
//!
//! One module per external platform, each translating that platform's
//! upstream contract (official API, unofficial API, or HTML scrape) into
//! the normalized [`PlatformStats`] shape.
//!
//! Adapters never fail: any upstream error (network, non-success status,
//! malformed body, missing markup) is swallowed and degraded to a failure
//! record carrying the same platform/username with every schema field set
//! to `"N/A"`. One unreachable platform must never abort the aggregation
//! of the others.
//!
//! Scrape and parse logic lives in pure per-platform functions that take
//! raw markup and return a `Result`, kept separate from transport so each
//! parser is independently testable.

pub mod codechef;
pub mod codeforces;
pub mod hackerrank;
pub mod interviewbit;
pub mod leetcode;
pub mod spoj;

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, error::SelectorErrorKind};
use serde::de::DeserializeOwned;

use crate::config::UpstreamConfig;
use crate::models::PlatformStats;

/// The set of supported platforms
///
/// Dispatch goes through this registry instead of ad-hoc string matching,
/// so an unhandled platform is a compile error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Codeforces,
    LeetCode,
    CodeChef,
    Spoj,
    InterviewBit,
    HackerRank,
}

impl Platform {
    /// Canonical display name, used as the `platform` field of every record
    pub fn name(self) -> &'static str {
        match self {
            Platform::Codeforces => "Codeforces",
            Platform::LeetCode => "LeetCode",
            Platform::CodeChef => "CodeChef",
            Platform::Spoj => "SPOJ",
            Platform::InterviewBit => "InterviewBit",
            Platform::HackerRank => "HackerRank",
        }
    }

    /// Case-insensitive lookup of a platform identifier
    pub fn parse(identifier: &str) -> Option<Self> {
        match identifier.to_ascii_lowercase().as_str() {
            "codeforces" => Some(Platform::Codeforces),
            "leetcode" => Some(Platform::LeetCode),
            "codechef" => Some(Platform::CodeChef),
            "spoj" => Some(Platform::Spoj),
            "interviewbit" => Some(Platform::InterviewBit),
            "hackerrank" => Some(Platform::HackerRank),
            _ => None,
        }
    }

    /// Fetch this platform's stats for `username`
    pub async fn fetch(
        self,
        client: &reqwest::Client,
        upstream: &UpstreamConfig,
        username: &str,
    ) -> PlatformStats {
        match self {
            Platform::Codeforces => {
                codeforces::fetch(client, &upstream.codeforces_api, username).await
            }
            Platform::LeetCode => leetcode::fetch(client, &upstream.leetcode_api, username).await,
            Platform::CodeChef => codechef::fetch(client, &upstream.codechef, username).await,
            Platform::Spoj => spoj::fetch(client, &upstream.spoj, username).await,
            Platform::InterviewBit => {
                interviewbit::fetch(client, &upstream.interviewbit, username).await
            }
            Platform::HackerRank => hackerrank::fetch(username),
        }
    }

    /// The failure record for this platform, used when an adapter hangs or
    /// panics and there is no record to salvage
    pub fn failure(self, username: &str) -> PlatformStats {
        match self {
            Platform::Codeforces => codeforces::unavailable(username),
            Platform::LeetCode => leetcode::unavailable(username),
            Platform::CodeChef => codechef::unavailable(username),
            Platform::Spoj => spoj::unavailable(username),
            Platform::InterviewBit => interviewbit::unavailable(username),
            Platform::HackerRank => hackerrank::unavailable(username),
        }
    }
}

/// All errors that can occur while talking to or parsing an upstream
///
/// These never cross the adapter boundary; they exist so transport and
/// parsing stay composable with `?` inside an adapter.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// HTTP request failed (network, DNS, TLS, timeout) or the body could
    /// not be read/decoded
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success HTTP status
    #[error("unexpected status {status} from {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The upstream answered but rejected the request in its payload
    #[error("upstream {url} rejected the request: {reason}")]
    Rejected { url: String, reason: String },

    /// A CSS selector string could not be parsed
    #[error("invalid CSS selector: {0}")]
    Selector(String),

    /// An expected HTML element was not found on the page
    #[error("expected element not found: {context}")]
    ElementNotFound { context: &'static str },
}

impl<'a> From<SelectorErrorKind<'a>> for FetchError {
    fn from(err: SelectorErrorKind<'a>) -> Self {
        FetchError::Selector(err.to_string())
    }
}

/// GET a JSON body, treating non-2xx statuses as errors
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
) -> Result<T, FetchError> {
    let response = client.get(url).send().await.map_err(|source| FetchError::Http {
        url: url.to_string(),
        source,
    })?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::UnexpectedStatus {
            url: url.to_string(),
            status,
        });
    }
    response.json().await.map_err(|source| FetchError::Http {
        url: url.to_string(),
        source,
    })
}

/// GET a page body as text, treating non-2xx statuses as errors
///
/// Parsing happens on the returned string; `scraper::Html` is not `Send`,
/// so it must never be held across an await point inside a spawned adapter
/// task.
pub(crate) async fn get_text(client: &reqwest::Client, url: &str) -> Result<String, FetchError> {
    let response = client.get(url).send().await.map_err(|source| FetchError::Http {
        url: url.to_string(),
        source,
    })?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::UnexpectedStatus {
            url: url.to_string(),
            status,
        });
    }
    response.text().await.map_err(|source| FetchError::Http {
        url: url.to_string(),
        source,
    })
}

/// Concatenated, whitespace-normalized text of an element
pub(crate) fn element_text(element: &ElementRef) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

static INTEGER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d[\d,]*").expect("valid integer pattern"));

/// First integer embedded in scraped text, tolerating thousands separators
/// ("1,672 problems" -> 1672)
pub(crate) fn extract_integer(text: &str) -> Option<i64> {
    INTEGER_RE
        .find(text)?
        .as_str()
        .replace(',', "")
        .parse()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Platform::parse("LeetCode"), Some(Platform::LeetCode));
        assert_eq!(Platform::parse("CODEFORCES"), Some(Platform::Codeforces));
        assert_eq!(Platform::parse("spoj"), Some(Platform::Spoj));
        assert_eq!(Platform::parse("atcoder"), None);
    }

    #[test]
    fn test_extract_integer() {
        assert_eq!(extract_integer("Total Problems Solved: 742"), Some(742));
        assert_eq!(extract_integer("#12,345 (45.5 points)"), Some(12345));
        assert_eq!(extract_integer("no digits here"), None);
    }
}
