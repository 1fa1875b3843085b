//! Request-level helpers: `template_for`, `render_for`, `partial_for`.
//!
//! A [`RequestContext`] binds a [`Mapper`] to the site serving the current
//! request (plus an optional admin site to fall back on) and hands render
//! targets to a host [`Renderer`]. The same context serves handlers and
//! view templates.

use crate::cache::CachedResolution;
use crate::error::{Result, SiteViewsError};
use crate::resolved::RenderTarget;
use crate::resolver::Mapper;
use crate::sites::{SiteLookup, SiteRef};
use serde_json::{Map, Value};

/// Caller-supplied render options (locals, layout, status, ...).
pub type RenderOptions = Map<String, Value>;

/// A render call: target plus the caller's options.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    pub target: RenderTarget,
    pub options: RenderOptions,
}

impl RenderRequest {
    pub fn new(target: RenderTarget, options: RenderOptions) -> Self {
        Self { target, options }
    }

    /// Flatten into a single parameter map.
    ///
    /// The target is written under its kind (`partial` or `template`) and any
    /// caller-supplied `partial`/`template` key is dropped.
    pub fn into_params(self) -> RenderOptions {
        let mut params = self.options;
        params.remove("partial");
        params.remove("template");
        params.insert(
            self.target.kind.as_str().to_string(),
            Value::String(self.target.path),
        );
        params
    }
}

/// Host rendering engine.
pub trait Renderer {
    type Output;

    /// Render a target.
    ///
    /// Implementations report a target with no file behind it as
    /// [`SiteViewsError::MissingRenderTarget`].
    fn render(&mut self, request: RenderRequest) -> Result<Self::Output>;
}

/// Template helpers for one request.
#[derive(Debug, Clone)]
pub struct RequestContext<'a> {
    mapper: &'a Mapper,
    site: SiteRef,
    admin_site: Option<SiteRef>,
}

impl<'a> RequestContext<'a> {
    pub fn new(mapper: &'a Mapper, site: impl Into<SiteRef>) -> Self {
        Self {
            mapper,
            site: site.into(),
            admin_site: None,
        }
    }

    /// Builder-style: set the site used when the request's site is missing.
    pub fn with_admin_site(mut self, admin_site: impl Into<SiteRef>) -> Self {
        self.admin_site = Some(admin_site.into());
        self
    }

    pub fn site(&self) -> &SiteRef {
        &self.site
    }

    pub fn admin_site(&self) -> Option<&SiteRef> {
        self.admin_site.as_ref()
    }

    /// Resolve a template for the current site.
    ///
    /// If the current site does not exist, resolves against the admin site
    /// once; `SiteNotFound` surfaces only if that also fails or no admin
    /// site is set.
    pub fn template_for(&self, name: &str) -> Result<CachedResolution> {
        match self.mapper.resolve(&self.site, name) {
            Err(SiteViewsError::SiteNotFound { identifier }) => match &self.admin_site {
                Some(admin) => {
                    tracing::warn!(
                        "Site '{}' not found, resolving '{}' for admin site '{}'",
                        identifier,
                        name,
                        admin
                    );
                    self.mapper.resolve(admin, name)
                }
                None => Err(SiteViewsError::SiteNotFound { identifier }),
            },
            other => other,
        }
    }

    /// Resolve a template and render it with the caller's options.
    ///
    /// Fails with `NoTemplate` if the template resolves to nothing.
    pub fn render_for<R: Renderer>(
        &self,
        renderer: &mut R,
        name: &str,
        options: RenderOptions,
    ) -> Result<R::Output> {
        let resolved = self
            .template_for(name)?
            .ok_or_else(|| SiteViewsError::NoTemplate {
                name: name.to_string(),
            })?;

        renderer.render(RenderRequest::new(resolved.render_target(), options))
    }

    /// Render a partial that lives only in the current site's override directory.
    ///
    /// A `MissingRenderTarget` from the renderer is returned as is.
    pub fn partial_for<R: Renderer>(
        &self,
        renderer: &mut R,
        partial: &str,
        options: RenderOptions,
    ) -> Result<R::Output> {
        let namespace = self.site_namespace()?;
        let path = self.mapper.layout().site_path(&namespace, partial);
        renderer.render(RenderRequest::new(RenderTarget::partial(path), options))
    }

    fn site_namespace(&self) -> Result<String> {
        match &self.site {
            SiteRef::Entity(site) => Ok(site.namespace.clone()),
            SiteRef::Identifier(id) => match self.mapper.find_site(id) {
                SiteLookup::Found(site) => Ok(site.namespace),
                SiteLookup::NotFound => Err(SiteViewsError::SiteNotFound {
                    identifier: id.clone(),
                }),
            },
        }
    }
}
