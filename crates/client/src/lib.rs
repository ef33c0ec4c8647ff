//! HTTP client for the comment search backend
//!
//! This crate provides the gateway the CLI and other front-ends use to reach
//! the backend search service: semantic comment search, health probing,
//! video metadata lookup and index maintenance.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

mod client;
pub mod error;
pub mod operation;

pub use client::SearchClient;
pub use error::{ClientError, FailureKind, Result};
pub use operation::{FailurePolicy, Operation};
