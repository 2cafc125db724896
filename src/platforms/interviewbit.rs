//! InterviewBit adapter (profile page scrape)
//!
//! The profile page groups its numbers under a section headed exactly
//! "Stats", as repeated items of a value element followed by a label
//! element. The extracted record maps each label to its value, so the
//! schema follows whatever the page shows.

use scraper::{ElementRef, Html, Selector};

use crate::models::{PlatformStats, StatMap, StatValue, unavailable_stats};

use super::{FetchError, Platform, element_text, get_text};

pub async fn fetch(client: &reqwest::Client, base: &str, username: &str) -> PlatformStats {
    match try_fetch(client, base, username).await {
        Ok(stats) => stats,
        Err(err) => {
            tracing::warn!(
                platform = Platform::InterviewBit.name(),
                username,
                error = %err,
                "upstream fetch failed"
            );
            unavailable(username)
        }
    }
}

pub(super) fn unavailable(username: &str) -> PlatformStats {
    PlatformStats::failed(Platform::InterviewBit.name(), username, unavailable_stats())
}

async fn try_fetch(
    client: &reqwest::Client,
    base: &str,
    username: &str,
) -> Result<PlatformStats, FetchError> {
    let url = format!("{base}/profile/{username}");
    let page = get_text(client, &url).await?;
    let data = parse_stats(&page)?;

    Ok(PlatformStats::success(
        Platform::InterviewBit.name(),
        username,
        data,
    ))
}

/// Extract the label-to-value mapping from the "Stats" section of raw
/// profile markup; a page without that section is unparseable
fn parse_stats(page: &str) -> Result<StatMap, FetchError> {
    let document = Html::parse_document(page);
    let heading_selector = Selector::parse("h2, h3, h4, h5")?;

    let heading = document
        .select(&heading_selector)
        .find(|el| element_text(el) == "Stats")
        .ok_or(FetchError::ElementNotFound {
            context: "interviewbit stats heading",
        })?;

    let section = heading
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .next()
        .ok_or(FetchError::ElementNotFound {
            context: "interviewbit stats section",
        })?;

    let mut data = StatMap::new();
    for item in section.children().filter_map(ElementRef::wrap) {
        let mut parts = item
            .children()
            .filter_map(ElementRef::wrap)
            .map(|el| element_text(&el))
            .filter(|text| !text.is_empty());
        let (Some(value), Some(label)) = (parts.next(), parts.next()) else {
            continue;
        };
        data.insert(label, item_value(value));
    }

    if data.is_empty() {
        return Err(FetchError::ElementNotFound {
            context: "interviewbit stats items",
        });
    }
    Ok(data)
}

/// Keep purely numeric values as numbers, everything else as text
fn item_value(value: String) -> StatValue {
    let numeric = value.replace(',', "");
    match numeric.parse::<i64>() {
        Ok(number) => StatValue::Number(number),
        Err(_) => StatValue::Text(value),
    }
}
