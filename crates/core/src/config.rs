//! Configuration types

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::{FeedId, FeedResult, PairRegistry};

/// A single configured pair entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairConfig {
    pub pair: String,
    pub feed: String,
}

/// Price feed configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Upstream oracle HTTP base URL
    pub endpoint: String,

    /// Per-request timeout in milliseconds; a single failed attempt is final
    pub request_timeout_ms: u64,

    /// Tracked pairs, in order. Empty means the built-in default set.
    #[serde(default)]
    pub pairs: Vec<PairConfig>,
}

impl FeedConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Build the immutable registry this configuration describes
    pub fn registry(&self) -> FeedResult<PairRegistry> {
        if self.pairs.is_empty() {
            return Ok(PairRegistry::default_feeds());
        }

        PairRegistry::from_pairs(
            self.pairs
                .iter()
                .map(|p| (p.pair.clone(), FeedId::new(p.feed.clone()))),
        )
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://hermes.pyth.network".to_string(),
            request_timeout_ms: 5_000,
            pairs: vec![],
        }
    }
}
