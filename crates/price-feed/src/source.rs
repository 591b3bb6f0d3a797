//! Upstream oracle source abstraction
//!
//! The oracle protocol is a black box behind [`PriceSource`]: a bulk
//! "current price data" retrieval keyed by feed account identifiers. A feed
//! id absent from the returned map means the upstream has no data for it.

use std::collections::HashMap;
use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use agent_core::{FeedError, FeedId, FeedResult, PriceStatus};

/// Raw per-feed record reported by the oracle network
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamPrice {
    pub price: f64,
    pub confidence: f64,
    pub status: PriceStatus,
}

/// Bulk current-price retrieval from an oracle network
#[async_trait::async_trait]
pub trait PriceSource: Send + Sync {
    async fn latest(&self, feeds: &[FeedId]) -> FeedResult<HashMap<FeedId, UpstreamPrice>>;
}

/// Pyth HTTP price service source
pub struct PythHttpSource {
    endpoint: String,
    http: reqwest::Client,
}

impl PythHttpSource {
    pub fn new(endpoint: impl Into<String>, request_timeout: Duration) -> FeedResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|e| FeedError::InvalidConfig(format!("http client: {e}")))?;

        Ok(Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            http,
        })
    }
}

#[async_trait::async_trait]
impl PriceSource for PythHttpSource {
    async fn latest(&self, feeds: &[FeedId]) -> FeedResult<HashMap<FeedId, UpstreamPrice>> {
        if feeds.is_empty() {
            return Ok(HashMap::new());
        }

        let url = format!("{}/api/latest_price_feeds", self.endpoint);
        let query: Vec<(&str, &str)> = feeds.iter().map(|f| ("ids[]", f.as_str())).collect();

        debug!(url = %url, feeds = feeds.len(), "fetching latest price feeds");

        let records: Vec<PriceFeedRecord> = self
            .http
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(upstream_err)?
            .error_for_status()
            .map_err(upstream_err)?
            .json()
            .await
            .map_err(upstream_err)?;

        let mut prices = HashMap::with_capacity(records.len());
        for record in records {
            let id = record.id.clone();
            prices.insert(FeedId::new(id), record.into_upstream()?);
        }

        Ok(prices)
    }
}

fn upstream_err(e: reqwest::Error) -> FeedError {
    FeedError::UpstreamUnavailable(e.to_string())
}

/// Wire format of a single feed in the price service response
#[derive(Debug, Deserialize)]
struct PriceFeedRecord {
    id: String,
    price: WirePrice,
    #[serde(default)]
    status: Option<String>,
}

/// Fixed-point price: mantissa string scaled by 10^expo
#[derive(Debug, Deserialize)]
struct WirePrice {
    price: String,
    conf: String,
    expo: i32,
}

impl PriceFeedRecord {
    fn into_upstream(self) -> FeedResult<UpstreamPrice> {
        let status = self
            .status
            .as_deref()
            .map(PriceStatus::from_upstream)
            .unwrap_or(PriceStatus::Unknown);

        Ok(UpstreamPrice {
            price: scale(&self.price.price, self.price.expo)?,
            confidence: scale(&self.price.conf, self.price.expo)?.max(0.0),
            status,
        })
    }
}

fn scale(mantissa: &str, expo: i32) -> FeedResult<f64> {
    let raw: f64 = mantissa
        .parse()
        .map_err(|e| FeedError::UpstreamUnavailable(format!("bad mantissa {mantissa:?}: {e}")))?;
    Ok(raw * 10f64.powi(expo))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_fixed_point() {
        assert_eq!(scale("14500000000", -8).unwrap(), 145.0);
        assert_eq!(scale("5", 2).unwrap(), 500.0);
        assert!(scale("not-a-number", -8).is_err());
    }

    #[test]
    fn test_record_deserialization() {
        let json = r#"{
            "id": "H6ARHf6YXhGYeQfUzQNGk6rDNnLBQKrenN712j4tJ8xm",
            "price": {"price": "15012345678", "conf": "9000000", "expo": -8, "publish_time": 1700000000},
            "status": "trading"
        }"#;

        let record: PriceFeedRecord = serde_json::from_str(json).unwrap();
        let upstream = record.into_upstream().unwrap();

        assert!((upstream.price - 150.12345678).abs() < 1e-9);
        assert!((upstream.confidence - 0.09).abs() < 1e-9);
        assert_eq!(upstream.status, PriceStatus::Trading);
    }

    #[test]
    fn test_missing_status_is_unknown() {
        let json = r#"{
            "id": "abc",
            "price": {"price": "100", "conf": "1", "expo": 0}
        }"#;

        let record: PriceFeedRecord = serde_json::from_str(json).unwrap();
        let upstream = record.into_upstream().unwrap();

        assert_eq!(upstream.status, PriceStatus::Unknown);
        assert_eq!(upstream.price, 100.0);
    }

    #[test]
    fn test_negative_confidence_clamped() {
        let record = PriceFeedRecord {
            id: "abc".to_string(),
            price: WirePrice {
                price: "100".to_string(),
                conf: "-5".to_string(),
                expo: 0,
            },
            status: None,
        };

        assert_eq!(record.into_upstream().unwrap().confidence, 0.0);
    }
}
