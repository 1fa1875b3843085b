//! Resolution caching.
//!
//! This module memoizes template resolutions per site for the lifetime of
//! a [`Mapper`](crate::resolver::Mapper). There is no TTL and no size
//! eviction; a site's entries are dropped only by explicit invalidation.

pub mod store;

pub use store::{CacheStats, CachedResolution, ResolutionCache};
