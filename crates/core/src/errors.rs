//! Error types

use thiserror::Error;

/// Feed error taxonomy
///
/// Only `UnknownPair` propagates to callers of the client API;
/// `UpstreamUnavailable` is caught at the per-pair level and reported as a
/// tagged lookup failure instead.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("unknown pair: {0}")]
    UnknownPair(String),

    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias
pub type FeedResult<T> = Result<T, FeedError>;
