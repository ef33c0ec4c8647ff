//! Per-operation failure policy
//!
//! Every backend call is described by an [`Operation`]. Its policy decides
//! what happens to a failure once it has been logged.

use crate::error::Result;
use notesearch_core::search_models::{IndexMessage, SearchResultItem, VideoInfo};
use tracing::{error, warn};

/// What to do with a failed call producing a `T`
#[derive(Debug)]
pub enum FailurePolicy<T> {
    /// Log, then hand the error back to the caller unchanged
    Propagate,
    /// Log, then return the fallback value instead
    Swallow(fn() -> T),
}

impl<T> FailurePolicy<T> {
    pub fn propagates(&self) -> bool {
        matches!(self, Self::Propagate)
    }
}

/// A named backend call with its failure policy
#[derive(Debug)]
pub struct Operation<T> {
    pub name: &'static str,
    pub policy: FailurePolicy<T>,
}

impl<T> Operation<T> {
    pub const fn propagate(name: &'static str) -> Self {
        Self {
            name,
            policy: FailurePolicy::Propagate,
        }
    }

    pub const fn swallow(name: &'static str, fallback: fn() -> T) -> Self {
        Self {
            name,
            policy: FailurePolicy::Swallow(fallback),
        }
    }

    /// Apply the policy to a finished call
    pub fn settle(&self, result: Result<T>) -> Result<T> {
        let err = match result {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };

        match self.policy {
            FailurePolicy::Propagate => {
                error!(operation = self.name, kind = ?err.kind(), "{} failed: {err}", self.name);
                Err(err)
            }
            FailurePolicy::Swallow(fallback) => {
                warn!(operation = self.name, kind = ?err.kind(), "{} failed: {err}", self.name);
                Ok(fallback())
            }
        }
    }
}

fn unhealthy() -> bool {
    false
}

pub(crate) const SEARCH: Operation<Vec<SearchResultItem>> = Operation::propagate("search");
pub(crate) const CHECK_HEALTH: Operation<bool> = Operation::swallow("check_health", unhealthy);
pub(crate) const GET_VIDEO_INFO: Operation<VideoInfo> = Operation::propagate("get_video_info");
pub(crate) const INIT_INDEX: Operation<IndexMessage> = Operation::propagate("init_index");
pub(crate) const ADD_COMMENT_EMBEDDING: Operation<IndexMessage> =
    Operation::propagate("add_comment_embedding");
pub(crate) const RESET_INDEX: Operation<IndexMessage> = Operation::propagate("reset_index");
