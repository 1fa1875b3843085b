//! Resolved templates and render targets.

use crate::registry::{TemplateDescriptor, TemplateKind};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// What to hand the renderer: the kind of render and the path to render.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RenderTarget {
    pub kind: TemplateKind,
    pub path: String,
}

impl RenderTarget {
    pub fn new(kind: TemplateKind, path: impl Into<String>) -> Self {
        Self {
            kind,
            path: path.into(),
        }
    }

    pub fn partial(path: impl Into<String>) -> Self {
        Self::new(TemplateKind::Partial, path)
    }

    pub fn template(path: impl Into<String>) -> Self {
        Self::new(TemplateKind::Template, path)
    }
}

/// A template resolved for one site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTemplate {
    descriptor: Arc<TemplateDescriptor>,
    path: String,
    site_specific: bool,
}

impl ResolvedTemplate {
    /// Resolution to a site override.
    pub fn with_override(descriptor: Arc<TemplateDescriptor>, path: impl Into<String>) -> Self {
        Self {
            descriptor,
            path: path.into(),
            site_specific: true,
        }
    }

    /// Resolution to the shared default view.
    pub fn with_default(descriptor: Arc<TemplateDescriptor>) -> Self {
        let path = descriptor.canonical_path().to_string();
        Self {
            descriptor,
            path,
            site_specific: false,
        }
    }

    pub fn descriptor(&self) -> &TemplateDescriptor {
        &self.descriptor
    }

    pub fn name(&self) -> &str {
        self.descriptor.name()
    }

    /// Effective render path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// True if the path points at a site override.
    pub fn is_override(&self) -> bool {
        self.site_specific
    }

    pub fn is_partial(&self) -> bool {
        self.descriptor.is_partial()
    }

    pub fn is_shared(&self) -> bool {
        self.descriptor.is_shared()
    }

    pub fn kind(&self) -> TemplateKind {
        self.descriptor.kind()
    }

    pub fn render_target(&self) -> RenderTarget {
        RenderTarget::new(self.kind(), self.path.clone())
    }
}
