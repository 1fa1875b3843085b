//! Sites (tenants) and the directory that resolves them.
//!
//! A site is identified by a string identifier and owns a filesystem
//! namespace: the directory under the overrides root that holds its
//! template overrides.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A resolved site.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Site {
    /// Stable identity, used as the cache key.
    pub identifier: String,
    /// Directory name under the overrides root.
    pub namespace: String,
}

impl Site {
    pub fn new(identifier: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            namespace: namespace.into(),
        }
    }
}

/// Reference to a site, either already resolved or by identifier.
///
/// An identifier is only looked up in the [`SiteDirectory`] when a
/// resolution actually misses the cache.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SiteRef {
    Entity(Site),
    Identifier(String),
}

impl SiteRef {
    /// Cache key for this site.
    pub fn key(&self) -> &str {
        match self {
            SiteRef::Entity(site) => &site.identifier,
            SiteRef::Identifier(id) => id,
        }
    }
}

impl From<Site> for SiteRef {
    fn from(site: Site) -> Self {
        SiteRef::Entity(site)
    }
}

impl From<&str> for SiteRef {
    fn from(id: &str) -> Self {
        SiteRef::Identifier(id.to_string())
    }
}

impl From<String> for SiteRef {
    fn from(id: String) -> Self {
        SiteRef::Identifier(id)
    }
}

impl std::fmt::Display for SiteRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Outcome of a site lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteLookup {
    Found(Site),
    NotFound,
}

/// Source of site records.
pub trait SiteDirectory: Send + Sync {
    /// Find a site by identifier.
    fn find_site(&self, identifier: &str) -> SiteLookup;
}

/// In-memory site directory, usually built from configuration.
#[derive(Debug, Clone, Default)]
pub struct StaticSiteDirectory {
    sites: BTreeMap<String, String>,
}

impl StaticSiteDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style: register a site.
    pub fn with_site(mut self, identifier: impl Into<String>, namespace: impl Into<String>) -> Self {
        self.insert(identifier, namespace);
        self
    }

    pub fn insert(&mut self, identifier: impl Into<String>, namespace: impl Into<String>) {
        self.sites.insert(identifier.into(), namespace.into());
    }

    /// All sites, ordered by identifier.
    pub fn sites(&self) -> impl Iterator<Item = Site> + '_ {
        self.sites
            .iter()
            .map(|(id, namespace)| Site::new(id.clone(), namespace.clone()))
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }
}

impl From<BTreeMap<String, String>> for StaticSiteDirectory {
    fn from(sites: BTreeMap<String, String>) -> Self {
        Self { sites }
    }
}

impl SiteDirectory for StaticSiteDirectory {
    fn find_site(&self, identifier: &str) -> SiteLookup {
        match self.sites.get(identifier) {
            Some(namespace) => SiteLookup::Found(Site::new(identifier, namespace.clone())),
            None => SiteLookup::NotFound,
        }
    }
}
