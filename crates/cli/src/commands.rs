//! Command implementations
//!
//! Written against [`SearchApi`] so they work with any backend client.

use anyhow::{Context, Result};
use notesearch_core::search_models::{SearchQuery, SearchResultItem, VideoInfo};
use notesearch_core::SearchApi;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Run one search and return the backend's results unchanged
pub async fn search<A: SearchApi>(
    api: &A,
    query: &str,
    top_k: usize,
) -> Result<Vec<SearchResultItem>> {
    let query = SearchQuery::new(query).with_top_k(top_k);
    api.search(&query)
        .await
        .with_context(|| format!("Search for '{}' failed", query.query))
}

/// Look up one video
pub async fn video<A: SearchApi>(api: &A, video_id: &str) -> Result<VideoInfo> {
    api.get_video_info(video_id)
        .await
        .with_context(|| format!("Failed to fetch video {video_id}"))
}

/// Outcome of a health watch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HealthSummary {
    /// Number of probes sent
    pub checks: usize,
    /// Probes that came back healthy
    pub healthy: usize,
    /// Changes between healthy and unhealthy after the first probe
    pub transitions: usize,
    /// Result of the most recent probe
    pub last: bool,
}

/// Poll the backend health endpoint
///
/// Runs `count` probes, or forever when `count` is `None`. Each change of
/// state is logged.
pub async fn watch_health<A: SearchApi>(
    api: &A,
    interval: Duration,
    count: Option<usize>,
) -> HealthSummary {
    let mut summary = HealthSummary::default();
    let mut previous: Option<bool> = None;

    while count.map_or(true, |limit| summary.checks < limit) {
        if summary.checks > 0 {
            tokio::time::sleep(interval).await;
        }

        let healthy = api.check_health().await;
        summary.checks += 1;
        if healthy {
            summary.healthy += 1;
        }
        summary.last = healthy;

        match previous {
            Some(was) if was == healthy => debug!("Backend still {}", state_label(healthy)),
            Some(_) => {
                summary.transitions += 1;
                if healthy {
                    info!("Backend recovered");
                } else {
                    warn!("Backend became unavailable");
                }
            }
            None => info!("Backend is {}", state_label(healthy)),
        }
        previous = Some(healthy);
    }

    summary
}

fn state_label(healthy: bool) -> &'static str {
    if healthy {
        "healthy"
    } else {
        "unavailable"
    }
}
