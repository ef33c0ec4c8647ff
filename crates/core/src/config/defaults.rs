//! Default values and functions for configuration

use crate::search_models::DEFAULT_TOP_K;

// Default constants
pub(crate) const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

pub(crate) fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

pub(crate) fn default_timeout_ms() -> u64 {
    10_000
}

pub(crate) fn default_top_k() -> usize {
    DEFAULT_TOP_K
}
