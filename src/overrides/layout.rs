//! Where views live on disk and how render paths are spelled.

use std::path::{Path, PathBuf};

/// Default views root, relative to the project root.
pub const DEFAULT_VIEWS_ROOT: &str = "app/views";

/// Default directory under the views root that holds per-site overrides.
pub const DEFAULT_OVERRIDES_DIR: &str = "site_templates";

/// Layout of the view tree.
///
/// Render paths are logical `/`-separated strings relative to the views
/// root; probes use real filesystem paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewLayout {
    views_root: PathBuf,
    overrides_dir: String,
}

impl ViewLayout {
    pub fn new(views_root: impl Into<PathBuf>, overrides_dir: impl Into<String>) -> Self {
        Self {
            views_root: views_root.into(),
            overrides_dir: overrides_dir.into().trim_matches('/').to_string(),
        }
    }

    /// Layout with the default overrides directory.
    pub fn with_views_root(views_root: impl Into<PathBuf>) -> Self {
        Self::new(views_root, DEFAULT_OVERRIDES_DIR)
    }

    pub fn views_root(&self) -> &Path {
        &self.views_root
    }

    pub fn overrides_dir(&self) -> &str {
        &self.overrides_dir
    }

    /// Directory holding a site's overrides.
    pub fn site_dir(&self, namespace: &str) -> PathBuf {
        self.views_root.join(&self.overrides_dir).join(namespace)
    }

    /// Render path of a file inside a site's override directory.
    pub fn site_path(&self, namespace: &str, relative: &str) -> String {
        format!("{}/{}/{}", self.overrides_dir, namespace, relative)
    }
}

impl Default for ViewLayout {
    fn default() -> Self {
        Self::new(DEFAULT_VIEWS_ROOT, DEFAULT_OVERRIDES_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_dir_joins_overrides_and_namespace() {
        let layout = ViewLayout::with_views_root("/srv/app/views");
        assert_eq!(
            layout.site_dir("acme"),
            PathBuf::from("/srv/app/views/site_templates/acme")
        );
    }

    #[test]
    fn site_path_is_logical() {
        let layout = ViewLayout::new("views", "/tenants/");
        assert_eq!(layout.overrides_dir(), "tenants");
        assert_eq!(
            layout.site_path("acme", "shared/navigation_element"),
            "tenants/acme/shared/navigation_element"
        );
    }

    #[test]
    fn default_layout() {
        let layout = ViewLayout::default();
        assert_eq!(layout.views_root(), Path::new("app/views"));
        assert_eq!(layout.overrides_dir(), "site_templates");
    }
}
