//! Request and response models for the comment search backend
//!
//! These types form the wire contract with the backend search service and
//! are shared by the client and the CLI without circular dependencies.

use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Number of results requested when the caller gives no explicit limit
pub const DEFAULT_TOP_K: usize = 10;

/// Decode an opaque text field.
///
/// Rows come out of SQL joins, so identifiers may be integers and missing
/// join partners are `null`. Scalars are kept as their string form and
/// `null` becomes the empty string.
fn opaque_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Null => Ok(String::new()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Array(_) => Err(de::Error::invalid_type(
            Unexpected::Seq,
            &"a string, number or null",
        )),
        Value::Object(_) => Err(de::Error::invalid_type(
            Unexpected::Map,
            &"a string, number or null",
        )),
    }
}

/// Search parameters sent to `/search`
///
/// Serializes to the query string `q=<query>&top_k=<top_k>`. Neither field
/// is validated client-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(rename = "q")]
    pub query: String,
    pub top_k: usize,
}

impl SearchQuery {
    /// Create a query with the default result limit
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            top_k: DEFAULT_TOP_K,
        }
    }

    /// Override the result-count hint
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }
}

/// One matched comment with its note, commenter and author
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultItem {
    #[serde(deserialize_with = "opaque_string")]
    pub note_id: String,
    #[serde(deserialize_with = "opaque_string")]
    pub note_title: String,
    #[serde(deserialize_with = "opaque_string")]
    pub note_content: String,
    #[serde(deserialize_with = "opaque_string")]
    pub publish_time: String,
    #[serde(deserialize_with = "opaque_string")]
    pub commenter_name: String,
    #[serde(deserialize_with = "opaque_string")]
    pub commenter_red_id: String,
    #[serde(deserialize_with = "opaque_string")]
    pub commenter_location: String,
    #[serde(deserialize_with = "opaque_string")]
    pub author_name: String,
    #[serde(deserialize_with = "opaque_string")]
    pub author_red_id: String,
    #[serde(deserialize_with = "opaque_string")]
    pub author_location: String,
    #[serde(deserialize_with = "opaque_string")]
    pub comment_content: String,
    #[serde(deserialize_with = "opaque_string")]
    pub comment_time: String,
    #[serde(deserialize_with = "opaque_string")]
    pub comment_id: String,
    /// Backend relevance score, higher is more relevant
    pub similarity: f64,
}

/// Body returned by `/search`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Query echoed back by the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    pub results: Vec<SearchResultItem>,
}

/// Metadata for one video note
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoInfo {
    #[serde(deserialize_with = "opaque_string")]
    pub sec_uid: String,
    #[serde(deserialize_with = "opaque_string")]
    pub nickname: String,
    #[serde(deserialize_with = "opaque_string")]
    pub title: String,
    #[serde(deserialize_with = "opaque_string")]
    pub desc: String,
    /// Epoch seconds; must be an integer on the wire
    pub create_time: i64,
    /// `None` means there is no playable source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_download_url: Option<String>,
    #[serde(deserialize_with = "opaque_string")]
    pub source_keyword: String,
}

impl VideoInfo {
    /// Whether the backend reported a download URL
    pub fn has_playable_source(&self) -> bool {
        self.video_download_url.is_some()
    }
}

/// Body returned by `/health`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: Option<String>,
}

impl HealthStatus {
    pub const OK: &'static str = "ok";

    /// The backend is healthy only when it reports exactly `"ok"`
    pub fn is_ok(&self) -> bool {
        self.status.as_deref() == Some(Self::OK)
    }
}

/// Acknowledgement returned by the index maintenance endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexMessage {
    pub msg: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_id: Option<String>,
}

/// Body posted to `/embeddings`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddingRequest {
    pub comment_id: String,
}
