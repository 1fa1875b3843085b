//! Template resolution with per-site memoization.
//!
//! The [`Mapper`] answers "which view should site S render for template N":
//! 1. Site override (`<overrides_dir>/<namespace>/<probe_path>.*` exists)
//! 2. Shared default (the descriptor's canonical path)
//! 3. Nothing, for templates without a default
//!
//! Every answer, including "nothing", is cached per site.

use crate::cache::{CacheStats, CachedResolution, ResolutionCache};
use crate::config::Settings;
use crate::error::{Result, SiteViewsError};
use crate::overrides::{FileProber, GlobProber, SiteOverrideResolver, ViewLayout};
use crate::registry::TemplateRegistry;
use crate::resolved::ResolvedTemplate;
use crate::sites::{SiteDirectory, SiteLookup, SiteRef, StaticSiteDirectory};
use std::path::Path;
use std::sync::Arc;

/// Resolution context owned by the host application.
///
/// Cheap to share behind an `Arc`; all methods take `&self`.
pub struct Mapper {
    registry: Arc<TemplateRegistry>,
    overrides: SiteOverrideResolver,
    directory: Box<dyn SiteDirectory>,
    cache: ResolutionCache,
}

impl Mapper {
    /// Create a mapper from its collaborators.
    pub fn new(
        registry: TemplateRegistry,
        layout: ViewLayout,
        directory: Box<dyn SiteDirectory>,
        prober: Box<dyn FileProber>,
    ) -> Self {
        let registry = Arc::new(registry);
        Self {
            overrides: SiteOverrideResolver::new(Arc::clone(&registry), layout, prober),
            registry,
            directory,
            cache: ResolutionCache::new(),
        }
    }

    /// Create a mapper from loaded settings, probing the local filesystem.
    ///
    /// Relative view roots are taken relative to `project_root`.
    pub fn from_settings(settings: &Settings, project_root: &Path) -> Result<Self> {
        let registry = TemplateRegistry::builtin()?.with_templates(&settings.templates)?;
        let directory = StaticSiteDirectory::from(settings.sites.clone());
        Ok(Self::new(
            registry,
            settings.layout(project_root),
            Box::new(directory),
            Box::new(GlobProber::new()),
        ))
    }

    pub fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }

    pub fn layout(&self) -> &ViewLayout {
        self.overrides.layout()
    }

    /// Look up a site in the directory.
    pub fn find_site(&self, identifier: &str) -> SiteLookup {
        self.directory.find_site(identifier)
    }

    /// Resolve a template for a site.
    ///
    /// Returns `Ok(None)` when the template has no default and the site does
    /// not override it.
    ///
    /// # Errors
    ///
    /// - `UnknownTemplate` if `name` is not registered (checked first, for every site)
    /// - `SiteNotFound` if a raw identifier misses the cache and is not in the directory
    pub fn resolve(&self, site: &SiteRef, name: &str) -> Result<CachedResolution> {
        let descriptor = self.registry.get(name)?;
        let site_key = site.key();

        if let Some(cached) = self.cache.get(site_key, name) {
            return Ok(cached);
        }

        let namespace = match site {
            SiteRef::Entity(site) => site.namespace.clone(),
            SiteRef::Identifier(id) => match self.directory.find_site(id) {
                SiteLookup::Found(site) => site.namespace,
                SiteLookup::NotFound => {
                    return Err(SiteViewsError::SiteNotFound {
                        identifier: id.clone(),
                    })
                }
            },
        };

        tracing::debug!("Resolving '{}' for site '{}' ({})", name, site_key, namespace);

        let resolved = match self.overrides.probe(&namespace, descriptor)? {
            Some(path) => Some(Arc::new(ResolvedTemplate::with_override(
                Arc::clone(descriptor),
                path,
            ))),
            None if descriptor.has_no_default() => None,
            None => Some(Arc::new(ResolvedTemplate::with_default(Arc::clone(
                descriptor,
            )))),
        };

        Ok(self.cache.insert(site_key, name, resolved))
    }

    /// Names a site overrides, sorted. Uses and fills the cache.
    pub fn overridden_by(&self, site: &SiteRef) -> Result<Vec<Arc<ResolvedTemplate>>> {
        let mut overridden = Vec::new();
        for name in self.registry.names() {
            if let Some(resolved) = self.resolve(site, name)? {
                if resolved.is_override() {
                    overridden.push(resolved);
                }
            }
        }
        Ok(overridden)
    }

    /// Forget every cached resolution for a site.
    ///
    /// `site_key` is the site's identifier. Returns whether anything was cached.
    pub fn invalidate(&self, site_key: &str) -> bool {
        let removed = self.cache.invalidate(site_key);
        if removed {
            tracing::debug!("Invalidated template cache for site '{}'", site_key);
        }
        removed
    }

    /// Forget every cached resolution.
    pub fn clear(&self) {
        self.cache.clear();
    }

    pub fn stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

impl std::fmt::Debug for Mapper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mapper")
            .field("overrides", &self.overrides)
            .field("cache", &self.cache.stats())
            .finish()
    }
}
