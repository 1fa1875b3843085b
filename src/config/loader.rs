//! Configuration file discovery and loading.
//!
//! This module finds the project's configuration files and merges them
//! in priority order.

use crate::config::merger::merge_configs;
use crate::config::schema::Settings;
use crate::error::{Result, SiteViewsError};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory under the project root holding configuration.
pub const CONFIG_DIR: &str = ".siteviews";

/// Paths to configuration files in priority order (later overrides earlier).
///
/// Merge order:
/// 1. Project config (`.siteviews/config.yml`)
/// 2. Local overrides (`.siteviews/config.local.yml`)
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    /// Project config: .siteviews/config.yml
    pub project: Option<PathBuf>,

    /// Local overrides: .siteviews/config.local.yml
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self {
            project: existing(project_root.join(CONFIG_DIR).join("config.yml")),
            project_local: existing(project_root.join(CONFIG_DIR).join("config.local.yml")),
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.project.iter().chain(self.project_local.iter()).collect()
    }

    /// Check if any config exists.
    pub fn is_empty(&self) -> bool {
        self.project.is_none() && self.project_local.is_none()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    if path.exists() {
        Some(path)
    } else {
        None
    }
}

/// Find the project root by walking up from `start`.
///
/// Looks for a `.siteviews` directory, then an `app/views` tree.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(CONFIG_DIR).is_dir() || current.join("app").join("views").is_dir() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load a config file as a raw YAML value (for merging).
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            SiteViewsError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            SiteViewsError::Io(e)
        }
    })?;

    serde_yaml::from_str(&content).map_err(|e| SiteViewsError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load and merge the project's config files.
///
/// A project without any config file gets default settings.
pub fn load_merged_settings(project_root: &Path) -> Result<Settings> {
    let paths = ConfigPaths::discover(project_root);

    if paths.is_empty() {
        tracing::debug!(
            "No config under {}, using defaults",
            project_root.join(CONFIG_DIR).display()
        );
        return Ok(Settings::default());
    }

    let configs = paths
        .all_existing()
        .into_iter()
        .map(|path| load_config_value(path))
        .collect::<Result<Vec<_>>>()?;

    let merged = merge_configs(&configs);

    serde_yaml::from_value(merged).map_err(|e| SiteViewsError::ConfigParseError {
        path: project_root.join(CONFIG_DIR).join("config.yml"),
        message: format!("Failed to parse merged config: {}", e),
    })
}

/// Load settings with optional path override.
///
/// If `config_override` is provided, loads only that file (which must exist).
/// Otherwise, discovers and merges the project's config files.
pub fn load_settings(project_root: &Path, config_override: Option<&Path>) -> Result<Settings> {
    match config_override {
        Some(path) => {
            let value = load_config_value(path)?;
            serde_yaml::from_value(value).map_err(|e| SiteViewsError::ConfigParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
        }
        None => load_merged_settings(project_root),
    }
}
