//! Registry manifest definitions.
//!
//! The manifest is the hand-authored table of built-in templates, grouped
//! by feature area.

use serde::{Deserialize, Serialize};

use crate::registry::descriptor::DescriptorSpec;

/// Registry manifest defining the built-in templates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryManifest {
    /// Manifest version.
    #[serde(default = "default_manifest_version")]
    pub version: u32,

    /// Template categories.
    #[serde(default)]
    pub categories: Vec<Category>,
}

fn default_manifest_version() -> u32 {
    1
}

/// Feature area grouping a set of templates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Category name.
    pub name: String,

    /// Human-readable description.
    #[serde(default)]
    pub description: String,

    /// Templates in this category.
    #[serde(default)]
    pub templates: Vec<DescriptorSpec>,
}

impl RegistryManifest {
    /// Get all template names from all categories, in manifest order.
    pub fn all_template_names(&self) -> Vec<&str> {
        self.categories
            .iter()
            .flat_map(|c| c.templates.iter().map(|t| t.name.as_str()))
            .collect()
    }

    /// Iterate every descriptor spec together with its category name.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &DescriptorSpec)> {
        self.categories
            .iter()
            .flat_map(|c| c.templates.iter().map(move |t| (c.name.as_str(), t)))
    }
}
