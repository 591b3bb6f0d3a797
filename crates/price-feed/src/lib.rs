//! Oracle price-feed client
//!
//! Features:
//! - Bulk current-price retrieval keyed by upstream feed identifiers
//! - Uniform Found / NotFound / FetchFailed contract per pair
//! - Stateless between calls; no caching, no retries
//! - Configurable request timeout

pub mod client;
pub mod source;

pub use client::{PriceFeedClient, PriceLookup};
pub use source::{PriceSource, PythHttpSource, UpstreamPrice};
