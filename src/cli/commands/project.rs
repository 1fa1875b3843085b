//! Loading a project for a command.

use std::path::{Path, PathBuf};

use crate::config::{load_settings, validate, Settings};
use crate::error::Result;
use crate::render::RequestContext;
use crate::resolver::Mapper;
use crate::sites::SiteRef;

/// Validated settings plus the mapper built from them.
#[derive(Debug)]
pub struct Project {
    root: PathBuf,
    settings: Settings,
    mapper: Mapper,
}

impl Project {
    /// Load, validate, and build the mapper.
    pub fn load(root: &Path, config_override: Option<&Path>) -> Result<Self> {
        let settings = load_settings(root, config_override)?;
        validate(&settings)?;
        let mapper = Mapper::from_settings(&settings, root)?;
        tracing::debug!(
            "Loaded project at {} ({} sites, {} templates)",
            root.display(),
            settings.sites.len(),
            mapper.registry().len()
        );

        Ok(Self {
            root: root.to_path_buf(),
            settings,
            mapper,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn mapper(&self) -> &Mapper {
        &self.mapper
    }

    /// Request context for a site, falling back to the configured admin site.
    pub fn request(&self, site: &str) -> RequestContext<'_> {
        let ctx = RequestContext::new(&self.mapper, SiteRef::from(site));
        match &self.settings.admin_site {
            Some(admin) => ctx.with_admin_site(admin.as_str()),
            None => ctx,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SiteViewsError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_without_config_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let project = Project::load(temp.path(), None).unwrap();
        assert_eq!(project.root(), temp.path());
        assert!(project.settings().sites.is_empty());
        assert_eq!(project.mapper().layout().overrides_dir(), "site_templates");
    }

    #[test]
    fn load_rejects_invalid_settings() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("bad.yml");
        fs::write(&config, "admin_site: hq\n").unwrap();

        let result = Project::load(temp.path(), Some(&config));
        assert!(matches!(
            result,
            Err(SiteViewsError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn request_carries_admin_site() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("sites.yml");
        fs::write(&config, "admin_site: hq\nsites:\n  hq: headquarters\n").unwrap();

        let project = Project::load(temp.path(), Some(&config)).unwrap();
        let ctx = project.request("7");
        assert_eq!(ctx.admin_site().map(SiteRef::key), Some("hq"));
    }
}
