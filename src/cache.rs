//! Bounded in-memory cache keyed by media identity.
//!
//! Scraped results are cached under the identity of the media they were
//! scraped for, so differently named files of the same item share an entry.

use dashmap::DashMap;
use std::time::Instant;
use tracing::trace;

/// Default number of cached entries.
pub const DEFAULT_CAPACITY: usize = 512;

/// Entry in the identity cache.
struct CacheEntry<V> {
    value: V,
    last_accessed: Instant,
}

/// Thread-safe cache of values keyed by identity string.
///
/// Inserting a new key into a full cache evicts the least recently accessed
/// entry.
pub struct IdentityCache<V> {
    entries: DashMap<String, CacheEntry<V>>,
    max_entries: usize,
}

impl<V: Clone> IdentityCache<V> {
    /// Create a new cache holding at most `max_entries` values.
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: DashMap::new(),
            max_entries: max_entries.max(1),
        }
    }

    /// Get a value if it exists in cache.
    pub fn get(&self, identity: &str) -> Option<V> {
        self.entries.get_mut(identity).map(|mut entry| {
            trace!(identity, "Identity cache hit");
            entry.last_accessed = Instant::now();
            entry.value.clone()
        })
    }

    /// Insert a value, replacing any previous value for the identity.
    pub fn insert(&self, identity: impl Into<String>, value: V) {
        let identity = identity.into();
        if !self.entries.contains_key(&identity) && self.entries.len() >= self.max_entries {
            self.evict_oldest();
        }

        self.entries.insert(
            identity,
            CacheEntry {
                value,
                last_accessed: Instant::now(),
            },
        );
    }

    /// Remove an entry from the cache.
    pub fn remove(&self, identity: &str) -> Option<V> {
        self.entries.remove(identity).map(|(_, entry)| entry.value)
    }

    /// Clear all entries.
    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Get the number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.max_entries
    }

    fn evict_oldest(&self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|entry| entry.last_accessed)
            .map(|entry| entry.key().clone());

        if let Some(key) = oldest {
            trace!(identity = %key, "Evicting identity cache entry");
            self.entries.remove(&key);
        }
    }
}

impl<V: Clone> Default for IdentityCache<V> {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn test_cache_insert_and_get() {
        let cache = IdentityCache::new(10);
        cache.insert("heat:1995", "Heat");

        assert_eq!(cache.get("heat:1995"), Some("Heat"));
        assert_eq!(cache.get("ronin:1998"), None);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_remove_and_clear() {
        let cache = IdentityCache::new(10);
        cache.insert("a", 1);
        cache.insert("b", 2);

        assert_eq!(cache.remove("a"), Some(1));
        assert_eq!(cache.len(), 1);
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_cache_eviction_prefers_least_recently_accessed() {
        let cache = IdentityCache::new(2);
        cache.insert("a", 1);
        sleep(Duration::from_millis(2));
        cache.insert("b", 2);
        sleep(Duration::from_millis(2));
        cache.get("a");
        sleep(Duration::from_millis(2));
        cache.insert("c", 3);

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("a"), Some(1));
        assert_eq!(cache.get("b"), None);
        assert_eq!(cache.get("c"), Some(3));
    }

    #[test]
    fn test_replacing_does_not_evict() {
        let cache = IdentityCache::new(2);
        cache.insert("a", 1);
        cache.insert("b", 2);
        cache.insert("a", 10);

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("a"), Some(10));
        assert_eq!(cache.get("b"), Some(2));
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let cache = IdentityCache::new(0);
        cache.insert("a", 1);
        assert_eq!(cache.capacity(), 1);
        assert_eq!(cache.get("a"), Some(1));
    }
}
