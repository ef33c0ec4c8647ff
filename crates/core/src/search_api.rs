//! Search API trait definition
//!
//! This trait defines the operations the backend search service offers.
//! The HTTP implementation lives in the client crate.

use async_trait::async_trait;

pub use super::search_models::*;

/// Trait defining search API operations
#[async_trait]
pub trait SearchApi: Send + Sync {
    /// Error surfaced by failing operations, returned as-is
    type Error: std::error::Error + Send + Sync + 'static;

    /// Search comments semantically
    ///
    /// Results are returned in backend order with no client-side sorting,
    /// filtering or deduplication.
    async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchResultItem>, Self::Error>;

    /// Probe the backend
    ///
    /// Total: any failure reads as unhealthy, so this is safe to poll.
    async fn check_health(&self) -> bool;

    /// Fetch metadata for a single video note
    async fn get_video_info(&self, video_id: &str) -> Result<VideoInfo, Self::Error>;
}
