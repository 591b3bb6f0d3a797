//! Price feed client - resolves registered pairs against the upstream oracle

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use agent_core::{FeedError, FeedId, FeedResult, PairRegistry, PriceObservation};

use crate::source::{PriceSource, UpstreamPrice};

/// Outcome of a single-pair lookup.
///
/// `NotFound` (upstream has no data for the feed) and `FetchFailed`
/// (communication or parse error, already logged) are deliberately distinct
/// so callers can make retry/alerting decisions.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", content = "data", rename_all = "snake_case")]
pub enum PriceLookup {
    Found(PriceObservation),
    NotFound,
    FetchFailed(String),
}

impl PriceLookup {
    pub fn observation(&self) -> Option<&PriceObservation> {
        match self {
            PriceLookup::Found(obs) => Some(obs),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, PriceLookup::Found(_))
    }
}

/// Client for current price observations over a fixed pair registry.
///
/// Stateless between calls: every operation performs upstream I/O and
/// observations are never cached. A single failed attempt is final; there
/// are no retries.
pub struct PriceFeedClient {
    registry: Arc<PairRegistry>,
    source: Arc<dyn PriceSource>,
}

impl PriceFeedClient {
    pub fn new(registry: Arc<PairRegistry>, source: Arc<dyn PriceSource>) -> Self {
        Self { registry, source }
    }

    pub fn registry(&self) -> &PairRegistry {
        &self.registry
    }

    /// Look up a single feed by its resolved upstream identifier.
    ///
    /// Upstream errors never propagate out of here; they are logged and
    /// reported as `FetchFailed`.
    pub async fn get_price(&self, feed: &FeedId) -> PriceLookup {
        match self.source.latest(std::slice::from_ref(feed)).await {
            Ok(mut prices) => match prices.remove(feed) {
                Some(upstream) => PriceLookup::Found(self.observe(feed, upstream)),
                None => {
                    debug!(feed = %feed, "no upstream data for feed");
                    PriceLookup::NotFound
                }
            },
            Err(e) => {
                warn!(feed = %feed, error = %e, "price fetch failed");
                PriceLookup::FetchFailed(e.to_string())
            }
        }
    }

    /// Fetch the whole registry in one bulk upstream request.
    ///
    /// The returned map's key set always equals the registry's pair names,
    /// whatever the per-pair outcomes. A request-level failure marks every
    /// pair `FetchFailed`.
    pub async fn get_all_prices(&self) -> HashMap<String, PriceLookup> {
        let ids = self.registry.feed_ids();

        match self.source.latest(&ids).await {
            Ok(mut prices) => self
                .registry
                .iter()
                .map(|(pair, feed)| {
                    let lookup = match prices.remove(feed) {
                        Some(upstream) => PriceLookup::Found(self.observe(feed, upstream)),
                        None => PriceLookup::NotFound,
                    };
                    (pair.to_string(), lookup)
                })
                .collect(),
            Err(e) => {
                warn!(error = %e, "bulk price fetch failed");
                let reason = e.to_string();
                self.registry
                    .iter()
                    .map(|(pair, _)| (pair.to_string(), PriceLookup::FetchFailed(reason.clone())))
                    .collect()
            }
        }
    }

    /// Resolve a human-readable pair name, then look up its feed.
    ///
    /// The only propagating error in the API: an unregistered name is a
    /// configuration error, not data absence, and no upstream call is made.
    pub async fn get_price_for_pair(&self, pair: &str) -> FeedResult<PriceLookup> {
        let feed = self
            .registry
            .resolve(pair)
            .ok_or_else(|| FeedError::UnknownPair(pair.to_string()))?
            .clone();

        Ok(self.get_price(&feed).await)
    }

    fn observe(&self, feed: &FeedId, upstream: UpstreamPrice) -> PriceObservation {
        let pair = self.registry.pair_name(feed).unwrap_or(feed.as_str());
        PriceObservation::new(pair, upstream.price, upstream.confidence, upstream.status)
    }
}
