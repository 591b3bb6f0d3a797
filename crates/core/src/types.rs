//! Core type definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Upstream feed account identifier (opaque; base58 for Pyth price accounts)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeedId(pub String);

impl FeedId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FeedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for FeedId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Upstream health state for a feed, passed through as reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceStatus {
    Trading,
    Halted,
    Auction,
    Unknown,
}

impl PriceStatus {
    pub fn name(&self) -> &'static str {
        match self {
            PriceStatus::Trading => "trading",
            PriceStatus::Halted => "halted",
            PriceStatus::Auction => "auction",
            PriceStatus::Unknown => "unknown",
        }
    }

    /// Parse an upstream status string; anything unrecognized is Unknown.
    pub fn from_upstream(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "trading" => PriceStatus::Trading,
            "halted" => PriceStatus::Halted,
            "auction" => PriceStatus::Auction,
            _ => PriceStatus::Unknown,
        }
    }
}

impl fmt::Display for PriceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A single point-in-time price reading for a pair.
///
/// Only constructed when the upstream lookup succeeded; absence of data is
/// never represented by a zero-valued observation. `observed_at` is the
/// retrieval time, not the upstream publish time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceObservation {
    pub pair: String,
    pub price: f64,
    pub confidence: f64,
    pub observed_at: DateTime<Utc>,
    pub status: PriceStatus,
}

impl PriceObservation {
    pub fn new(pair: impl Into<String>, price: f64, confidence: f64, status: PriceStatus) -> Self {
        Self {
            pair: pair.into(),
            price,
            // Confidence is an uncertainty band; negative values are meaningless
            confidence: confidence.max(0.0),
            observed_at: Utc::now(),
            status,
        }
    }

    pub fn is_trading(&self) -> bool {
        self.status == PriceStatus::Trading
    }
}
