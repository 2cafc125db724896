//! Normalized platform statistics
//!
//! Every platform adapter, whatever its upstream contract, produces a
//! [`PlatformStats`] record. Records are built fresh on every query and
//! never cached.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{NOT_AVAILABLE, stat_fields};
use crate::models::ProfileLink;

/// A single statistic value
///
/// The string `"N/A"` is the sentinel for "could not be determined",
/// distinct from zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Number(i64),
    Float(f64),
    Text(String),
    Codes(Vec<String>),
}

impl StatValue {
    /// The "not available" sentinel
    pub fn na() -> Self {
        StatValue::Text(NOT_AVAILABLE.to_string())
    }

    pub fn is_na(&self) -> bool {
        matches!(self, StatValue::Text(t) if t == NOT_AVAILABLE)
    }
}

/// Stat field name to value
pub type StatMap = BTreeMap<String, StatValue>;

/// Build a stat map from field/value pairs
pub fn stat_map<const N: usize>(entries: [(&str, StatValue); N]) -> StatMap {
    entries
        .into_iter()
        .map(|(field, value)| (field.to_string(), value))
        .collect()
}

/// The three fields shared by most platforms, all set to `"N/A"`
pub fn unavailable_stats() -> StatMap {
    stat_map([
        (stat_fields::PROBLEMS_SOLVED, StatValue::na()),
        (stat_fields::CONTESTS_ATTENDED, StatValue::na()),
        (stat_fields::CONTEST_RATING, StatValue::na()),
    ])
}

/// Outcome flag carried by fetched records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FetchStatus {
    Success,
    Failed,
}

/// Normalized statistics for one (platform, username) pair
///
/// Always keyed by the same (platform, username) as the [`ProfileLink`]
/// that produced it, even on failure. The `id` is only present on
/// passthrough records for links whose platform has no adapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub platform: String,
    pub username: String,
    pub data: StatMap,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<FetchStatus>,
}

impl PlatformStats {
    /// A successfully fetched record
    pub fn success(platform: &str, username: &str, data: StatMap) -> Self {
        Self {
            id: None,
            platform: platform.to_string(),
            username: username.to_string(),
            data,
            status: Some(FetchStatus::Success),
        }
    }

    /// A failure record with every schema field set to `"N/A"`
    pub fn failed(platform: &str, username: &str, data: StatMap) -> Self {
        Self {
            id: None,
            platform: platform.to_string(),
            username: username.to_string(),
            data,
            status: Some(FetchStatus::Failed),
        }
    }

    /// The original link echoed back with an empty data object, used when
    /// no adapter matches the link's platform
    pub fn passthrough(link: &ProfileLink) -> Self {
        Self {
            id: Some(link.id),
            platform: link.platform.clone(),
            username: link.username.clone(),
            data: StatMap::new(),
            status: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_value_serialization() {
        assert_eq!(
            serde_json::to_string(&StatValue::Number(42)).unwrap(),
            "42"
        );
        assert_eq!(
            serde_json::to_string(&StatValue::na()).unwrap(),
            "\"N/A\""
        );
        assert_eq!(
            serde_json::to_string(&StatValue::Codes(vec!["TEST".into()])).unwrap(),
            "[\"TEST\"]"
        );
    }

    #[test]
    fn test_passthrough_keeps_link_identity() {
        let link = ProfileLink::new("atcoder", "tourist");
        let stats = PlatformStats::passthrough(&link);

        assert_eq!(stats.id, Some(link.id));
        assert_eq!(stats.platform, "atcoder");
        assert_eq!(stats.username, "tourist");
        assert!(stats.data.is_empty());
        assert!(stats.status.is_none());

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["data"], serde_json::json!({}));
        assert!(json.get("status").is_none());
    }

    #[test]
    fn test_unavailable_stats_are_all_na() {
        let data = unavailable_stats();
        assert_eq!(data.len(), 3);
        assert!(data.values().all(StatValue::is_na));
    }
}
