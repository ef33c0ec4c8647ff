//! HTTP gateway to the comment search backend

use crate::error::{ClientError, Result};
use crate::operation::{
    ADD_COMMENT_EMBEDDING, CHECK_HEALTH, GET_VIDEO_INFO, INIT_INDEX, RESET_INDEX, SEARCH,
};
use async_trait::async_trait;
use notesearch_core::config::BackendConfig;
use notesearch_core::search_models::{
    EmbeddingRequest, HealthStatus, IndexMessage, SearchQuery, SearchResponse, SearchResultItem,
    VideoInfo,
};
use notesearch_core::SearchApi;
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info};

/// Client for the backend search service
///
/// Holds one HTTP transport bound to a base URL and timeout. Both are fixed
/// at construction. Clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: Client,
    base_url: String,
    timeout: Duration,
}

impl SearchClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `config` - Base URL (including the `/api` path) and request timeout
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        let timeout = config.timeout();

        Url::parse(&base_url).map_err(|e| {
            ClientError::Config(format!("Invalid backend base URL '{base_url}': {e}"))
        })?;

        info!("Initializing search client");
        info!("  Base URL: {base_url}");
        info!("  Timeout: {}ms", timeout.as_millis());

        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url,
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Send one request and decode its JSON body
    async fn execute<T: DeserializeOwned>(
        &self,
        operation: &str,
        request: RequestBuilder,
    ) -> Result<T> {
        let response = request.send().await.map_err(ClientError::Transport)?;
        let status = response.status();
        debug!("{operation}: backend answered {status}");

        let body = response.bytes().await.map_err(ClientError::Transport)?;
        if !status.is_success() {
            return Err(ClientError::status(status.as_u16(), &body));
        }

        serde_json::from_slice(&body).map_err(ClientError::Decode)
    }

    /// Search comments, returning results in backend order
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchResultItem>> {
        debug!("Sending search request (top_k={}): {}", query.top_k, query.query);

        let request = self.http.get(self.endpoint("/search")).query(query);
        let result = self
            .execute::<SearchResponse>(SEARCH.name, request)
            .await
            .map(|response| response.results);

        if let Ok(results) = &result {
            debug!("Search returned {} results", results.len());
        }
        SEARCH.settle(result)
    }

    /// Search with the default result limit
    pub async fn search_text(&self, query: &str) -> Result<Vec<SearchResultItem>> {
        self.search(&SearchQuery::new(query)).await
    }

    /// Search with an explicit result limit
    pub async fn search_with_limit(
        &self,
        query: &str,
        top_k: usize,
    ) -> Result<Vec<SearchResultItem>> {
        self.search(&SearchQuery::new(query).with_top_k(top_k)).await
    }

    /// Check whether the backend reports itself healthy
    ///
    /// Never fails: transport, protocol and decode errors all read as `false`.
    pub async fn check_health(&self) -> bool {
        debug!("Checking backend health");

        let request = self.http.get(self.endpoint("/health"));
        let result = self
            .execute::<HealthStatus>(CHECK_HEALTH.name, request)
            .await
            .map(|health| health.is_ok());

        CHECK_HEALTH.settle(result).unwrap_or_default()
    }

    /// Fetch metadata for one video
    ///
    /// `video_id` is placed into the path as given.
    pub async fn get_video_info(&self, video_id: &str) -> Result<VideoInfo> {
        debug!("Fetching video info for {video_id}");

        let request = self.http.get(self.endpoint(&format!("/video/{video_id}")));
        let result = self.execute(GET_VIDEO_INFO.name, request).await;
        GET_VIDEO_INFO.settle(result)
    }

    /// Rebuild the backend vector index from every stored comment
    pub async fn init_index(&self) -> Result<IndexMessage> {
        info!("Requesting full index rebuild");
        let request = self.http.post(self.endpoint("/init"));
        let result = self.execute(INIT_INDEX.name, request).await;
        INIT_INDEX.settle(result)
    }

    /// Embed a single stored comment and add it to the index
    pub async fn add_comment_embedding(&self, comment_id: &str) -> Result<IndexMessage> {
        debug!("Adding embedding for comment {comment_id}");
        let body = EmbeddingRequest {
            comment_id: comment_id.to_string(),
        };
        let request = self.http.post(self.endpoint("/embeddings")).json(&body);
        let result = self.execute(ADD_COMMENT_EMBEDDING.name, request).await;
        ADD_COMMENT_EMBEDDING.settle(result)
    }

    /// Clear the backend vector index
    pub async fn reset_index(&self) -> Result<IndexMessage> {
        info!("Requesting index reset");
        let request = self.http.post(self.endpoint("/reset"));
        let result = self.execute(RESET_INDEX.name, request).await;
        RESET_INDEX.settle(result)
    }
}

#[async_trait]
impl SearchApi for SearchClient {
    type Error = ClientError;

    async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchResultItem>> {
        SearchClient::search(self, query).await
    }

    async fn check_health(&self) -> bool {
        SearchClient::check_health(self).await
    }

    async fn get_video_info(&self, video_id: &str) -> Result<VideoInfo> {
        SearchClient::get_video_info(self, video_id).await
    }
}
