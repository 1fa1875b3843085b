//! siteviews - per-site template resolution for multi-tenant storefronts.
//!
//! Every site renders the shared view tree unless it ships its own copy of a
//! template under `<views_root>/<overrides_dir>/<namespace>/`. This crate maps
//! a symbolic template name (`product`, `mini_cart`, `navigation`, ...) to the
//! path a given site should render, probing the filesystem once per
//! (site, template) and caching the answer.
//!
//! # Modules
//!
//! - [`registry`] - Built-in and configured template descriptors
//! - [`sites`] - Site identity and lookup
//! - [`overrides`] - Filesystem probing for site overrides
//! - [`resolver`] - The caching [`Mapper`]
//! - [`resolved`] - Resolution results and render targets
//! - [`render`] - `template_for` / `render_for` / `partial_for` request helpers
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`cli`] - The `siteviews` diagnostic command
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use siteviews::overrides::{GlobProber, ViewLayout};
//! use siteviews::registry::TemplateRegistry;
//! use siteviews::sites::{SiteRef, StaticSiteDirectory};
//! use siteviews::Mapper;
//!
//! let views = tempfile::TempDir::new().unwrap();
//! let mapper = Mapper::new(
//!     TemplateRegistry::builtin().unwrap(),
//!     ViewLayout::with_views_root(views.path()),
//!     Box::new(StaticSiteDirectory::new().with_site("1", "acme")),
//!     Box::new(GlobProber::new()),
//! );
//!
//! let resolved = mapper.resolve(&SiteRef::from("1"), "cart").unwrap().unwrap();
//! assert_eq!(resolved.path(), "cart/show");
//! assert!(!resolved.is_override());
//! ```

pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod overrides;
pub mod registry;
pub mod render;
pub mod resolved;
pub mod resolver;
pub mod sites;
pub mod ui;

pub use error::{Result, SiteViewsError};
pub use render::{RenderOptions, RenderRequest, Renderer, RequestContext};
pub use resolved::{RenderTarget, ResolvedTemplate};
pub use resolver::Mapper;
pub use sites::{Site, SiteRef};
