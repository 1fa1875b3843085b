//! Configuration schema definitions for siteviews.
//!
//! This module contains the struct definitions that map to the YAML
//! configuration file format.

use crate::overrides::{ViewLayout, DEFAULT_OVERRIDES_DIR, DEFAULT_VIEWS_ROOT};
use crate::registry::DescriptorSpec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Root configuration structure for `.siteviews/config.yml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Root of the view tree, relative to the project root unless absolute
    #[serde(default = "default_views_root")]
    pub views_root: PathBuf,

    /// Directory under the views root holding per-site overrides
    #[serde(default = "default_overrides_dir")]
    pub overrides_dir: String,

    /// Site used when the request's own site cannot be found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_site: Option<String>,

    /// Site identifier to filesystem namespace
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub sites: BTreeMap<String, String>,

    /// Additional or replacement template descriptors
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub templates: Vec<DescriptorSpec>,
}

fn default_views_root() -> PathBuf {
    PathBuf::from(DEFAULT_VIEWS_ROOT)
}

fn default_overrides_dir() -> String {
    DEFAULT_OVERRIDES_DIR.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            views_root: default_views_root(),
            overrides_dir: default_overrides_dir(),
            admin_site: None,
            sites: BTreeMap::new(),
            templates: Vec::new(),
        }
    }
}

impl Settings {
    /// Views root resolved against the project root.
    pub fn views_root_in(&self, project_root: &Path) -> PathBuf {
        if self.views_root.is_absolute() {
            self.views_root.clone()
        } else {
            project_root.join(&self.views_root)
        }
    }

    /// View layout for a project.
    pub fn layout(&self, project_root: &Path) -> ViewLayout {
        ViewLayout::new(self.views_root_in(project_root), self.overrides_dir.clone())
    }
}
