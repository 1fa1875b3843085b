//! Template registry for siteviews.
//!
//! The registry maps symbolic template names to [`TemplateDescriptor`]s.
//! It is assembled from two sources:
//! - Built-in templates (embedded in the binary from `templates/registry.yml`)
//! - Project templates (the `templates:` list in the config file)
//!
//! A project template with the same name as a built-in one replaces it.
//!
//! # Example
//!
//! ```
//! use siteviews::registry::TemplateRegistry;
//!
//! let registry = TemplateRegistry::builtin().unwrap();
//! let nav = registry.get("navigation").unwrap();
//! assert_eq!(nav.probe_path(), "_navigation_element");
//! ```

pub mod builtin;
pub mod descriptor;
pub mod manifest;
pub mod table;

// Re-exports
pub use descriptor::{derive_probe_path, DescriptorSpec, TemplateDescriptor, TemplateKind};
pub use manifest::{Category, RegistryManifest};
pub use table::{CategoryIndex, TemplateRegistry, CONFIGURED_CATEGORY};
