//! Built-in template table embedded at compile time.

use crate::error::{Result, SiteViewsError};
use crate::registry::manifest::RegistryManifest;
use include_dir::{include_dir, Dir};

/// Embedded templates directory.
static TEMPLATES_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

const MANIFEST_FILE: &str = "registry.yml";

/// Load the built-in registry manifest.
pub fn load_manifest() -> Result<RegistryManifest> {
    let manifest_file =
        TEMPLATES_DIR
            .get_file(MANIFEST_FILE)
            .ok_or_else(|| SiteViewsError::InvalidRegistry {
                message: format!("templates/{} is not embedded", MANIFEST_FILE),
            })?;

    let content = manifest_file
        .contents_utf8()
        .ok_or_else(|| SiteViewsError::InvalidRegistry {
            message: format!("templates/{} is not valid UTF-8", MANIFEST_FILE),
        })?;

    parse_manifest(content)
}

/// Parse a manifest from YAML text.
pub fn parse_manifest(content: &str) -> Result<RegistryManifest> {
    serde_yaml::from_str(content).map_err(|e| SiteViewsError::InvalidRegistry {
        message: format!("templates/{}: {}", MANIFEST_FILE, e),
    })
}
