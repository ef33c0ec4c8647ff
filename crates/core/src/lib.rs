//! Core types and traits for the notesearch comment search client
//!
//! This crate provides the foundational abstractions shared by the client
//! and the CLI:
//!
//! - **Models**: wire types exchanged with the backend search service
//! - **Traits**: the `SearchApi` operation set
//! - **Configuration**: backend connection and search defaults
//! - **Error handling**: unified error types
//!

pub mod config;
pub mod error;
pub mod search_api;
pub mod search_models;

// Re-export main types for convenience
pub use config::{BackendConfig, Config, SearchConfig};
pub use error::{Error, Result};
pub use search_api::SearchApi;
pub use search_models::{
    HealthStatus, IndexMessage, SearchQuery, SearchResponse, SearchResultItem, VideoInfo,
    DEFAULT_TOP_K,
};
