//! The template registry: symbolic name to descriptor.
//!
//! Built once from the embedded table plus any configured descriptors, then
//! shared read-only for the lifetime of the resolution context.

use crate::error::{Result, SiteViewsError};
use crate::registry::builtin;
use crate::registry::descriptor::{DescriptorSpec, TemplateDescriptor};
use crate::registry::manifest::RegistryManifest;
use std::collections::HashMap;
use std::sync::Arc;

/// Category name given to descriptors that come from configuration.
pub const CONFIGURED_CATEGORY: &str = "configured";

/// Names registered under one feature area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryIndex {
    pub name: String,
    pub description: String,
    pub templates: Vec<String>,
}

/// Immutable mapping from symbolic name to [`TemplateDescriptor`].
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: HashMap<String, Arc<TemplateDescriptor>>,
    categories: Vec<CategoryIndex>,
}

impl TemplateRegistry {
    /// Build the registry from the embedded table.
    pub fn builtin() -> Result<Self> {
        Self::from_manifest(&builtin::load_manifest()?)
    }

    /// Build the registry from a manifest.
    ///
    /// Fails if any entry is malformed or a name is listed twice.
    pub fn from_manifest(manifest: &RegistryManifest) -> Result<Self> {
        let mut templates = HashMap::new();
        let mut categories = Vec::with_capacity(manifest.categories.len());

        for category in &manifest.categories {
            let mut names = Vec::with_capacity(category.templates.len());
            for spec in &category.templates {
                validate_spec(spec)?;
                let descriptor = TemplateDescriptor::from(spec.clone());
                if templates
                    .insert(spec.name.clone(), Arc::new(descriptor))
                    .is_some()
                {
                    return Err(SiteViewsError::InvalidRegistry {
                        message: format!("template '{}' is registered twice", spec.name),
                    });
                }
                names.push(spec.name.clone());
            }
            categories.push(CategoryIndex {
                name: category.name.clone(),
                description: category.description.clone(),
                templates: names,
            });
        }

        tracing::debug!(
            "Built template registry with {} templates in {} categories",
            templates.len(),
            categories.len()
        );

        Ok(Self {
            templates,
            categories,
        })
    }

    /// Add or replace descriptors from configuration.
    ///
    /// A configured descriptor with the name of an existing one replaces it.
    pub fn with_templates(mut self, specs: &[DescriptorSpec]) -> Result<Self> {
        if specs.is_empty() {
            return Ok(self);
        }

        let mut added = Vec::new();
        for spec in specs {
            validate_spec(spec)?;
            if added.contains(&spec.name) {
                return Err(SiteViewsError::InvalidRegistry {
                    message: format!("template '{}' is configured twice", spec.name),
                });
            }

            let descriptor = Arc::new(TemplateDescriptor::from(spec.clone()));
            if self.templates.insert(spec.name.clone(), descriptor).is_some() {
                tracing::warn!("Configured template '{}' replaces built-in entry", spec.name);
            } else {
                added.push(spec.name.clone());
            }
        }

        if !added.is_empty() {
            self.categories.push(CategoryIndex {
                name: CONFIGURED_CATEGORY.to_string(),
                description: "Templates added by project configuration".to_string(),
                templates: added,
            });
        }

        Ok(self)
    }

    /// Get a descriptor, failing with `UnknownTemplate` if absent.
    pub fn get(&self, name: &str) -> Result<&Arc<TemplateDescriptor>> {
        self.templates
            .get(name)
            .ok_or_else(|| SiteViewsError::UnknownTemplate {
                name: name.to_string(),
            })
    }

    /// Get a descriptor if registered.
    pub fn find(&self, name: &str) -> Option<&Arc<TemplateDescriptor>> {
        self.templates.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// All registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.templates.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// All descriptors, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<TemplateDescriptor>> {
        let mut descriptors: Vec<_> = self.templates.values().collect();
        descriptors.sort_by(|a, b| a.name().cmp(b.name()));
        descriptors.into_iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Feature-area grouping, in table order.
    pub fn categories(&self) -> &[CategoryIndex] {
        &self.categories
    }

    /// Category a template is listed under.
    pub fn category_of(&self, name: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|c| c.templates.iter().any(|t| t == name))
            .map(|c| c.name.as_str())
    }
}

fn validate_spec(spec: &DescriptorSpec) -> Result<()> {
    if spec.name.trim().is_empty() {
        return Err(SiteViewsError::InvalidRegistry {
            message: format!("template with path '{}' has an empty name", spec.path),
        });
    }
    if spec.path.trim().is_empty() {
        return Err(SiteViewsError::InvalidRegistry {
            message: format!("template '{}' has an empty path", spec.name),
        });
    }
    if spec.path.starts_with('/') || spec.path.split('/').any(|s| s == "..") {
        return Err(SiteViewsError::InvalidRegistry {
            message: format!(
                "template '{}' path '{}' must be relative to the views root",
                spec.name, spec.path
            ),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::descriptor::TemplateKind;
    use crate::registry::manifest::Category;

    fn spec(name: &str, path: &str) -> DescriptorSpec {
        DescriptorSpec {
            name: name.to_string(),
            path: path.to_string(),
            partial: false,
            shared: false,
            no_default: false,
        }
    }

    #[test]
    fn builtin_registry_loads() {
        let registry = TemplateRegistry::builtin().unwrap();
        assert_eq!(registry.len(), 71);
        assert!(registry.contains("product"));
        assert!(registry.contains("contact"));
    }

    #[test]
    fn get_fails_for_unknown() {
        let registry = TemplateRegistry::builtin().unwrap();
        let result = registry.get("no_such_name");
        assert!(matches!(
            result,
            Err(SiteViewsError::UnknownTemplate { ref name }) if name == "no_such_name"
        ));
    }

    #[test]
    fn builtin_flags_are_correct() {
        let registry = TemplateRegistry::builtin().unwrap();

        let nav = registry.get("navigation").unwrap();
        assert!(nav.is_partial());
        assert!(nav.is_shared());
        assert_eq!(nav.probe_path(), "_navigation_element");

        let layout = registry.get("layout").unwrap();
        assert!(layout.has_no_default());
        assert_eq!(layout.canonical_path(), "application");

        let cart_item = registry.get("cart_item").unwrap();
        assert_eq!(cart_item.kind(), TemplateKind::Partial);
        assert_eq!(cart_item.probe_path(), "cart/_cart_item");

        let security = registry.get("security").unwrap();
        assert!(security.is_partial());
        assert!(!security.is_shared());
        assert_eq!(security.probe_path(), "shared/_security");
    }

    #[test]
    fn names_are_sorted() {
        let registry = TemplateRegistry::builtin().unwrap();
        let names = registry.names();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn category_lookup() {
        let registry = TemplateRegistry::builtin().unwrap();
        assert_eq!(registry.category_of("poll"), Some("survey"));
        assert_eq!(registry.category_of("navigation"), Some("layout"));
        assert_eq!(registry.category_of("missing"), None);
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let manifest = RegistryManifest {
            version: 1,
            categories: vec![Category {
                name: "dup".into(),
                description: String::new(),
                templates: vec![spec("page", "pages/show"), spec("page", "pages/other")],
            }],
        };
        let result = TemplateRegistry::from_manifest(&manifest);
        assert!(matches!(result, Err(SiteViewsError::InvalidRegistry { .. })));
    }

    #[test]
    fn empty_path_is_rejected() {
        let manifest = RegistryManifest {
            version: 1,
            categories: vec![Category {
                name: "bad".into(),
                description: String::new(),
                templates: vec![spec("page", "")],
            }],
        };
        assert!(TemplateRegistry::from_manifest(&manifest).is_err());
    }

    #[test]
    fn escaping_path_is_rejected() {
        let registry = TemplateRegistry::default();
        let result = registry.with_templates(&[spec("evil", "../secrets")]);
        assert!(matches!(result, Err(SiteViewsError::InvalidRegistry { .. })));
    }

    #[test]
    fn configured_templates_are_added() {
        let registry = TemplateRegistry::builtin()
            .unwrap()
            .with_templates(&[spec("promo_banner", "promos/banner")])
            .unwrap();
        assert!(registry.contains("promo_banner"));
        assert_eq!(registry.category_of("promo_banner"), Some(CONFIGURED_CATEGORY));
        assert_eq!(registry.len(), 72);
    }

    #[test]
    fn configured_templates_replace_builtin() {
        let mut replacement = spec("product", "catalog/item");
        replacement.partial = true;
        let registry = TemplateRegistry::builtin()
            .unwrap()
            .with_templates(&[replacement])
            .unwrap();

        let product = registry.get("product").unwrap();
        assert_eq!(product.canonical_path(), "catalog/item");
        assert!(product.is_partial());
        assert_eq!(registry.len(), 71);
        assert_eq!(registry.category_of("product"), Some("product"));
    }

    #[test]
    fn configured_duplicates_are_rejected() {
        let result = TemplateRegistry::default()
            .with_templates(&[spec("a", "x/a"), spec("a", "x/b")]);
        assert!(result.is_err());
    }
}
