//! Path resolution caching.
//!
//! This module provides [`RouteCache`], an LRU cache from normalized request
//! paths to the [`MatchStack`] they resolved to. It is gated behind the
//! `cache` feature flag and uses the [`lru`] crate internally.
//!
//! Only successful descents are cached. A path that hit `NotFound` or a
//! loader failure is resolved again next time, so a retried load can succeed.
//! Registries never change after construction and resolved loaders stay
//! resolved, so a cached stack never goes stale.
//!
//! # Examples
//!
//! ```
//! use lazy_route_registry::cache::RouteCache;
//! use lazy_route_registry::MatchStack;
//!
//! let mut cache = RouteCache::with_capacity(8);
//! assert!(cache.get("/meta").is_none());
//!
//! cache.insert("/meta".to_string(), MatchStack::new());
//! assert!(cache.get("/meta").is_some());
//! assert_eq!(cache.stats().hits, 1);
//! assert_eq!(cache.stats().misses, 1);
//! ```

use crate::resolve::MatchStack;
use crate::{debug_log, trace_log};
use lru::LruCache;
use std::num::NonZeroUsize;

/// Counters tracking cache hit/miss rates and invalidations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of lookups answered from the cache.
    pub hits: usize,
    /// Number of lookups that found nothing.
    pub misses: usize,
    /// Number of full cache invalidations (via [`RouteCache::clear`]).
    pub invalidations: usize,
}

impl CacheStats {
    /// Return the hit rate as a value in `0.0..=1.0`.
    ///
    /// Returns `0.0` if no lookups have been performed.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// LRU cache of resolved match stacks keyed by normalized path.
#[derive(Debug)]
pub struct RouteCache {
    stacks: LruCache<String, MatchStack>,
    stats: CacheStats,
}

impl RouteCache {
    /// Default number of cached paths.
    pub const DEFAULT_CAPACITY: usize = 256;

    /// Create a cache with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Create a cache holding at most `capacity` paths.
    ///
    /// A capacity of zero is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            stacks: LruCache::new(cap),
            stats: CacheStats::default(),
        }
    }

    /// Look up the stack cached for `path`, updating hit/miss stats.
    pub fn get(&mut self, path: &str) -> Option<MatchStack> {
        if let Some(stack) = self.stacks.get(path) {
            self.stats.hits += 1;
            trace_log!("Resolution cache hit for path: '{}'", path);
            Some(stack.clone())
        } else {
            self.stats.misses += 1;
            trace_log!("Resolution cache miss for path: '{}'", path);
            None
        }
    }

    /// Cache the stack resolved for `path`, evicting the least recently used entry if full.
    pub fn insert(&mut self, path: String, stack: MatchStack) {
        trace_log!("Caching {} levels for path '{}'", stack.len(), path);
        self.stacks.push(path, stack);
    }

    /// Drop every cached stack and increment the invalidation counter.
    pub fn clear(&mut self) {
        let len = self.stacks.len();
        self.stacks.clear();
        self.stats.invalidations += 1;
        debug_log!(
            "Resolution cache cleared: {} entries removed ({} total invalidations, hit rate: {:.1}%)",
            len,
            self.stats.invalidations,
            self.stats.hit_rate() * 100.0
        );
    }

    /// Return a reference to the current cache statistics.
    pub const fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Reset all counters in [`CacheStats`] to zero.
    pub fn reset_stats(&mut self) {
        self.stats = CacheStats::default();
    }

    /// Return the number of cached paths.
    pub fn len(&self) -> usize {
        self.stacks.len()
    }

    /// Return `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }

    /// Return the maximum number of cached paths.
    pub fn capacity(&self) -> usize {
        self.stacks.cap().get()
    }
}

impl Default for RouteCache {
    fn default() -> Self {
        Self::new()
    }
}
