//! Pair registry: fixed name -> upstream feed identifier mapping
//!
//! Built once at startup from configuration and shared immutably with the
//! client. Lookups for unregistered names fail identifiably.

use std::collections::HashMap;

use crate::{FeedError, FeedId, FeedResult};

/// Pyth devnet price accounts for the default pair set
const DEFAULT_FEEDS: &[(&str, &str)] = &[
    ("SOL/USD", "H6ARHf6YXhGYeQfUzQNGk6rDNnLBQKrenN712j4tJ8xm"),
    ("BTC/USD", "GVXRSBjFk6e6J3NbVPXohRJauUXq8aP7i9P2rpZUGpyL"),
    ("ETH/USD", "JBu1AL4obLsCMwKcNEfB84fxQUaX6w1kFUx6EQJQ5Xc"),
    ("JUP/USD", "7tb3UvHiiHGqgw2tErTeEW56N8Yt4w8mQe9Rbf3Y1NU"),
    ("USDC/USD", "Gnt27xtC473ZT2Mw5u8wZ68Z3gUESjMWEjZ6k6uC2pH"),
];

/// Immutable registry of tracked pairs, preserving insertion order
#[derive(Debug, Clone)]
pub struct PairRegistry {
    entries: Vec<(String, FeedId)>,
    by_name: HashMap<String, usize>,
}

impl PairRegistry {
    /// Build a registry from an ordered pair list.
    ///
    /// Duplicate pair names are a configuration error.
    pub fn from_pairs<I, S>(pairs: I) -> FeedResult<Self>
    where
        I: IntoIterator<Item = (S, FeedId)>,
        S: Into<String>,
    {
        let mut entries = Vec::new();
        let mut by_name = HashMap::new();

        for (name, feed) in pairs {
            let name = name.into();
            if by_name.contains_key(&name) {
                return Err(FeedError::InvalidConfig(format!(
                    "duplicate pair in registry: {name}"
                )));
            }
            by_name.insert(name.clone(), entries.len());
            entries.push((name, feed));
        }

        Ok(Self { entries, by_name })
    }

    /// Registry with the well-known default feed set
    pub fn default_feeds() -> Self {
        Self::from_pairs(
            DEFAULT_FEEDS
                .iter()
                .map(|(pair, feed)| (*pair, FeedId::from(*feed))),
        )
        .expect("default feed table has no duplicates")
    }

    /// Resolve a pair name to its upstream feed identifier
    pub fn resolve(&self, pair: &str) -> Option<&FeedId> {
        self.by_name.get(pair).map(|&i| &self.entries[i].1)
    }

    /// Reverse lookup: the pair name registered for a feed identifier
    pub fn pair_name(&self, feed: &FeedId) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, f)| f == feed)
            .map(|(name, _)| name.as_str())
    }

    /// Iterate entries in insertion order
    pub fn iter<'a>(&'a self) -> impl Iterator<Item = (&'a str, &'a FeedId)> + 'a {
        self.entries.iter().map(|(n, f)| (n.as_str(), f))
    }

    /// All registered pair names, in insertion order
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// All feed identifiers, in insertion order
    pub fn feed_ids(&self) -> Vec<FeedId> {
        self.entries.iter().map(|(_, f)| f.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for PairRegistry {
    fn default() -> Self {
        Self::default_feeds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_contents() {
        let registry = PairRegistry::default_feeds();
        assert_eq!(registry.len(), 5);
        assert_eq!(
            registry.resolve("SOL/USD").map(FeedId::as_str),
            Some("H6ARHf6YXhGYeQfUzQNGk6rDNnLBQKrenN712j4tJ8xm")
        );
        assert!(registry.resolve("DOGE/USD").is_none());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let registry = PairRegistry::from_pairs([
            ("B/USD", FeedId::from("feed-b")),
            ("A/USD", FeedId::from("feed-a")),
            ("C/USD", FeedId::from("feed-c")),
        ])
        .unwrap();

        assert_eq!(registry.names(), vec!["B/USD", "A/USD", "C/USD"]);
    }

    #[test]
    fn test_duplicate_pair_rejected() {
        let result = PairRegistry::from_pairs([
            ("SOL/USD", FeedId::from("feed-1")),
            ("SOL/USD", FeedId::from("feed-2")),
        ]);

        assert!(matches!(result, Err(FeedError::InvalidConfig(_))));
    }

    #[test]
    fn test_reverse_lookup() {
        let registry = PairRegistry::default_feeds();
        let feed = registry.resolve("ETH/USD").unwrap().clone();
        assert_eq!(registry.pair_name(&feed), Some("ETH/USD"));
        assert_eq!(registry.pair_name(&FeedId::from("nope")), None);
    }
}
