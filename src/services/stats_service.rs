//! Stats aggregation service
//!
//! Fans out across the platform adapters for one user's registered links.
//! Every link runs on its own supervised task: a panicked or hung adapter
//! degrades to a failure record and can never cancel or discard a sibling.
//! Results come back in registration order, collected in full before the
//! response is produced.

use crate::models::{PlatformStats, ProfileLink};
use crate::platforms::Platform;
use crate::state::AppState;

/// Stats aggregation service
pub struct StatsService;

impl StatsService {
    /// Fetch stats for every link concurrently, preserving input order.
    /// The output length always equals the input length.
    pub async fn collect(state: &AppState, links: Vec<ProfileLink>) -> Vec<PlatformStats> {
        let timeout = state.config().fetch.timeout();

        let handles: Vec<_> = links
            .iter()
            .map(|link| {
                let link = link.clone();
                let client = state.http().clone();
                let upstream = state.config().upstream.clone();
                tokio::spawn(async move {
                    let Some(platform) = Platform::parse(&link.platform) else {
                        return PlatformStats::passthrough(&link);
                    };
                    match tokio::time::timeout(
                        timeout,
                        platform.fetch(&client, &upstream, &link.username),
                    )
                    .await
                    {
                        Ok(stats) => stats,
                        Err(_) => {
                            tracing::warn!(
                                platform = platform.name(),
                                username = %link.username,
                                "adapter timed out"
                            );
                            platform.failure(&link.username)
                        }
                    }
                })
            })
            .collect();

        let outcomes = futures::future::join_all(handles).await;

        outcomes
            .into_iter()
            .zip(links)
            .map(|(outcome, link)| match outcome {
                Ok(stats) => stats,
                Err(err) => {
                    tracing::error!(
                        platform = %link.platform,
                        username = %link.username,
                        error = %err,
                        "adapter task failed"
                    );
                    match Platform::parse(&link.platform) {
                        Some(platform) => platform.failure(&link.username),
                        None => PlatformStats::passthrough(&link),
                    }
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, FetchConfig, ServerConfig, UpstreamConfig};
    use crate::models::FetchStatus;

    fn test_state(upstream_base: &str) -> AppState {
        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                rust_log: "info".to_string(),
            },
            fetch: FetchConfig {
                timeout_seconds: 2,
                user_agent: "codehub-tests".to_string(),
            },
            upstream: UpstreamConfig {
                codeforces_api: upstream_base.to_string(),
                leetcode_api: upstream_base.to_string(),
                codechef: upstream_base.to_string(),
                spoj: upstream_base.to_string(),
                interviewbit: upstream_base.to_string(),
            },
        };
        AppState::new(reqwest::Client::new(), config)
    }

    #[tokio::test]
    async fn test_collect_preserves_order_and_length() {
        let state = test_state("http://127.0.0.1:9");
        let links = vec![
            ProfileLink::new("hackerrank", "first"),
            ProfileLink::new("atcoder", "second"),
            ProfileLink::new("HackerRank", "third"),
        ];

        let results = StatsService::collect(&state, links.clone()).await;

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].platform, "HackerRank");
        assert_eq!(results[0].username, "first");
        // Unknown platforms come back as the original link with empty data
        assert_eq!(results[1].platform, "atcoder");
        assert_eq!(results[1].id, Some(links[1].id));
        assert!(results[1].data.is_empty());
        assert_eq!(results[2].username, "third");
    }

    #[tokio::test]
    async fn test_collect_isolates_an_unreachable_platform() {
        // Nothing listens on port 9; the codeforces fetch fails fast
        let state = test_state("http://127.0.0.1:9");
        let links = vec![
            ProfileLink::new("codeforces", "broken"),
            ProfileLink::new("hackerrank", "fine"),
        ];

        let results = StatsService::collect(&state, links).await;

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].status, Some(FetchStatus::Failed));
        assert!(results[0].data.values().all(|v| v.is_na()));
        assert_eq!(results[1].status, Some(FetchStatus::Success));
    }

    #[tokio::test]
    async fn test_collect_with_no_links_is_empty() {
        let state = test_state("http://127.0.0.1:9");
        let results = StatsService::collect(&state, Vec::new()).await;
        assert!(results.is_empty());
    }
}
