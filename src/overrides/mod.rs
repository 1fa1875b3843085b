//! Per-site override discovery.
//!
//! Sites may shadow any registered template by placing a file under
//! `<views_root>/<overrides_dir>/<namespace>/`. Discovery is
//! extension-agnostic: `products/show.html.erb` and `products/show.liquid`
//! both override `product`.

pub mod layout;
pub mod prober;
pub mod resolver;

pub use layout::{ViewLayout, DEFAULT_OVERRIDES_DIR, DEFAULT_VIEWS_ROOT};
pub use prober::{FileProber, GlobProber};
pub use resolver::SiteOverrideResolver;
