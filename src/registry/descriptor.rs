//! Template descriptor definitions.
//!
//! A descriptor names one symbolic template and records where its default
//! view lives, what kind of render it needs, and where a site override
//! would be found.

use serde::{Deserialize, Serialize};

/// Render kind of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    /// Rendered as a partial (`_name` on disk).
    Partial,
    /// Rendered as a full template.
    Template,
}

impl TemplateKind {
    /// Key used for this kind in render parameters.
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateKind::Partial => "partial",
            TemplateKind::Template => "template",
        }
    }
}

impl std::fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serialized form of a descriptor, as written in the registry table or config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptorSpec {
    /// Symbolic name used by callers.
    pub name: String,

    /// Canonical path relative to the views root, without extension
    /// (e.g. `products/list`, not `products/_list.html.erb`).
    pub path: String,

    /// True if this template is a partial.
    #[serde(default, skip_serializing_if = "is_false")]
    pub partial: bool,

    /// True if overrides are probed by file name only, without the leading directory.
    #[serde(default, skip_serializing_if = "is_false")]
    pub shared: bool,

    /// True if there is no default view (layouts, for example).
    #[serde(default, skip_serializing_if = "is_false")]
    pub no_default: bool,
}

fn is_false(b: &bool) -> bool {
    !*b
}

/// An immutable description of one symbolic template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateDescriptor {
    name: String,
    canonical_path: String,
    partial: bool,
    shared: bool,
    no_default: bool,
    probe_path: String,
}

impl TemplateDescriptor {
    /// Create a full-template descriptor with a default view.
    pub fn new(name: impl Into<String>, canonical_path: impl Into<String>) -> Self {
        Self::with_flags(name, canonical_path, false, false, false)
    }

    /// Create a descriptor with explicit flags.
    pub fn with_flags(
        name: impl Into<String>,
        canonical_path: impl Into<String>,
        partial: bool,
        shared: bool,
        no_default: bool,
    ) -> Self {
        let canonical_path = canonical_path.into();
        let probe_path = derive_probe_path(&canonical_path, partial, shared);
        Self {
            name: name.into(),
            canonical_path,
            partial,
            shared,
            no_default,
            probe_path,
        }
    }

    /// Builder-style: mark as partial.
    pub fn partial(self) -> Self {
        Self::with_flags(
            self.name,
            self.canonical_path,
            true,
            self.shared,
            self.no_default,
        )
    }

    /// Builder-style: mark as shared.
    pub fn shared(self) -> Self {
        Self::with_flags(
            self.name,
            self.canonical_path,
            self.partial,
            true,
            self.no_default,
        )
    }

    /// Builder-style: mark as having no default view.
    pub fn without_default(self) -> Self {
        Self::with_flags(
            self.name,
            self.canonical_path,
            self.partial,
            self.shared,
            true,
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Canonical path relative to the views root, without extension.
    pub fn canonical_path(&self) -> &str {
        &self.canonical_path
    }

    pub fn is_partial(&self) -> bool {
        self.partial
    }

    pub fn is_shared(&self) -> bool {
        self.shared
    }

    /// True if a missing override means nothing can be rendered.
    pub fn has_no_default(&self) -> bool {
        self.no_default
    }

    /// Path prefix (no extension) searched for inside a site's override directory.
    pub fn probe_path(&self) -> &str {
        &self.probe_path
    }

    /// Path prefix (no extension) of the default view under the views root.
    ///
    /// Same as the probe path, except shared templates keep their directory.
    pub fn default_file_path(&self) -> String {
        derive_probe_path(&self.canonical_path, self.partial, false)
    }

    pub fn kind(&self) -> TemplateKind {
        if self.partial {
            TemplateKind::Partial
        } else {
            TemplateKind::Template
        }
    }
}

impl From<DescriptorSpec> for TemplateDescriptor {
    fn from(spec: DescriptorSpec) -> Self {
        Self::with_flags(
            spec.name,
            spec.path,
            spec.partial,
            spec.shared,
            spec.no_default,
        )
    }
}

impl From<&TemplateDescriptor> for DescriptorSpec {
    fn from(descriptor: &TemplateDescriptor) -> Self {
        Self {
            name: descriptor.name.clone(),
            path: descriptor.canonical_path.clone(),
            partial: descriptor.partial,
            shared: descriptor.shared,
            no_default: descriptor.no_default,
        }
    }
}

/// Derive the override probe path from a canonical path and flags.
///
/// Shared templates are probed by file name alone, so every directory is
/// dropped; partials get an underscore on the final segment.
pub fn derive_probe_path(canonical_path: &str, partial: bool, shared: bool) -> String {
    let mut segments: Vec<&str> = canonical_path
        .split('/')
        .filter(|s| !s.is_empty())
        .collect();

    if shared {
        let dirs = segments.len().saturating_sub(1);
        segments.drain(..dirs);
    }

    let last = segments.pop().unwrap_or_default();
    let last = if partial {
        format!("_{}", last)
    } else {
        last.to_string()
    };

    segments
        .into_iter()
        .map(str::to_string)
        .chain(std::iter::once(last))
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_template_probes_canonical_path() {
        let d = TemplateDescriptor::new("product", "products/show");
        assert_eq!(d.probe_path(), "products/show");
        assert_eq!(d.kind(), TemplateKind::Template);
    }

    #[test]
    fn partial_prefixes_final_segment() {
        let d = TemplateDescriptor::new("product_list", "products/list").partial();
        assert_eq!(d.probe_path(), "products/_list");
        assert_eq!(d.kind(), TemplateKind::Partial);
    }

    #[test]
    fn shared_partial_strips_leading_directory() {
        let d = TemplateDescriptor::new("navigation", "shared/navigation_element")
            .shared()
            .partial();
        assert_eq!(d.probe_path(), "_navigation_element");
        assert_eq!(d.canonical_path(), "shared/navigation_element");
    }

    #[test]
    fn shared_partial_default_file_keeps_directory() {
        let d = TemplateDescriptor::new("navigation", "shared/navigation_element")
            .shared()
            .partial();
        assert_eq!(d.default_file_path(), "shared/_navigation_element");
    }

    #[test]
    fn single_segment_path() {
        let d = TemplateDescriptor::new("layout", "application").without_default();
        assert_eq!(d.probe_path(), "application");
        assert!(d.has_no_default());
    }

    #[test]
    fn shared_single_segment_keeps_name() {
        assert_eq!(derive_probe_path("snippet", true, true), "_snippet");
    }

    #[test]
    fn shared_keeps_only_file_name() {
        assert_eq!(derive_probe_path("a/b/c", false, true), "c");
        assert_eq!(derive_probe_path("admin/widgets/banner", true, true), "_banner");
    }

    #[test]
    fn deep_shared_default_file_keeps_directories() {
        let d = TemplateDescriptor::new("banner", "admin/widgets/banner")
            .shared()
            .partial();
        assert_eq!(d.probe_path(), "_banner");
        assert_eq!(d.default_file_path(), "admin/widgets/_banner");
    }

    #[test]
    fn spec_round_trips_flags() {
        let spec = DescriptorSpec {
            name: "poll".into(),
            path: "surveys/poll".into(),
            partial: true,
            shared: false,
            no_default: false,
        };
        let d: TemplateDescriptor = spec.clone().into();
        assert_eq!(d.probe_path(), "surveys/_poll");
        assert_eq!(DescriptorSpec::from(&d), spec);
    }

    #[test]
    fn spec_flags_default_to_false() {
        let spec: DescriptorSpec = serde_yaml::from_str("name: page\npath: pages/show\n").unwrap();
        assert!(!spec.partial);
        assert!(!spec.shared);
        assert!(!spec.no_default);
    }

    #[test]
    fn kind_display() {
        assert_eq!(TemplateKind::Partial.to_string(), "partial");
        assert_eq!(TemplateKind::Template.to_string(), "template");
    }
}
