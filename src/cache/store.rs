//! In-memory resolution cache.

use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::resolved::ResolvedTemplate;

/// A cached resolution. `None` means the site has no template for the name.
pub type CachedResolution = Option<Arc<ResolvedTemplate>>;

type SiteBucket = DashMap<String, CachedResolution>;

/// Counters describing cache usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
pub struct CacheStats {
    /// Sites with a bucket.
    pub sites: usize,
    /// Cached (site, name) entries, including cached `None`s.
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
}

/// Two-level memoization: site identifier, then template name.
///
/// Entries are never recomputed once stored; a site's entries only go away
/// through [`invalidate`](Self::invalidate) or [`clear`](Self::clear).
#[derive(Debug, Default)]
pub struct ResolutionCache {
    sites: DashMap<String, Arc<SiteBucket>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl ResolutionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the bucket for a site, creating an empty one if needed.
    fn bucket(&self, site_key: &str) -> Arc<SiteBucket> {
        if let Some(bucket) = self.sites.get(site_key) {
            return Arc::clone(bucket.value());
        }
        Arc::clone(
            self.sites
                .entry(site_key.to_string())
                .or_default()
                .value(),
        )
    }

    /// Look up a cached resolution.
    ///
    /// The outer `Option` is presence of the key; the inner one is the cached
    /// outcome, so `Some(None)` is a hit on "no template".
    pub fn get(&self, site_key: &str, name: &str) -> Option<CachedResolution> {
        let cached = self
            .bucket(site_key)
            .get(name)
            .map(|entry| entry.value().clone());

        match cached {
            Some(_) => self.hits.fetch_add(1, Ordering::Relaxed),
            None => self.misses.fetch_add(1, Ordering::Relaxed),
        };

        cached
    }

    /// Store a resolution unless one is already present, returning the stored value.
    ///
    /// The first write wins, so concurrent callers that raced on a miss all
    /// end up holding the same value.
    pub fn insert(&self, site_key: &str, name: &str, value: CachedResolution) -> CachedResolution {
        self.bucket(site_key)
            .entry(name.to_string())
            .or_insert(value)
            .value()
            .clone()
    }

    /// Drop every cached resolution for a site.
    pub fn invalidate(&self, site_key: &str) -> bool {
        self.sites.remove(site_key).is_some()
    }

    /// Drop every cached resolution.
    pub fn clear(&self) {
        self.sites.clear();
    }

    pub fn contains(&self, site_key: &str, name: &str) -> bool {
        self.sites
            .get(site_key)
            .map(|bucket| bucket.contains_key(name))
            .unwrap_or(false)
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            sites: self.sites.len(),
            entries: self.sites.iter().map(|b| b.value().len()).sum(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}
