//! Site-specific override lookup.

use crate::error::Result;
use crate::overrides::layout::ViewLayout;
use crate::overrides::prober::FileProber;
use crate::registry::{TemplateDescriptor, TemplateRegistry};
use std::sync::Arc;

/// Finds a site's override for a template, if one exists on disk.
///
/// Probes on every call; memoization belongs to the
/// [`Mapper`](crate::resolver::Mapper).
pub struct SiteOverrideResolver {
    registry: Arc<TemplateRegistry>,
    layout: ViewLayout,
    prober: Box<dyn FileProber>,
}

impl SiteOverrideResolver {
    pub fn new(
        registry: Arc<TemplateRegistry>,
        layout: ViewLayout,
        prober: Box<dyn FileProber>,
    ) -> Self {
        Self {
            registry,
            layout,
            prober,
        }
    }

    pub fn layout(&self) -> &ViewLayout {
        &self.layout
    }

    /// Look up a template by name and check the site's directory for an override.
    ///
    /// Returns the render path `<overrides_dir>/<namespace>/<canonical_path>`
    /// when a file matching the descriptor's probe path exists.
    pub fn find_override(&self, namespace: &str, name: &str) -> Result<Option<String>> {
        let descriptor = self.registry.get(name)?;
        self.probe(namespace, descriptor)
    }

    /// Check the site's directory for an override of a known descriptor.
    pub fn probe(
        &self,
        namespace: &str,
        descriptor: &TemplateDescriptor,
    ) -> Result<Option<String>> {
        let site_dir = self.layout.site_dir(namespace);
        if self
            .prober
            .exists_with_any_extension(&site_dir, descriptor.probe_path())?
        {
            tracing::debug!(
                "Site '{}' overrides '{}' ({})",
                namespace,
                descriptor.name(),
                descriptor.probe_path()
            );
            Ok(Some(
                self.layout
                    .site_path(namespace, descriptor.canonical_path()),
            ))
        } else {
            Ok(None)
        }
    }
}

impl std::fmt::Debug for SiteOverrideResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SiteOverrideResolver")
            .field("layout", &self.layout)
            .field("templates", &self.registry.len())
            .finish()
    }
}
