//! Configuration validation rules.
//!
//! - `overrides_dir` must be a non-empty relative directory
//! - Site namespaces must be non-empty and stay inside the overrides directory
//! - `admin_site` must name a configured site
//! - Configured templates need a name and a path

use crate::config::schema::Settings;
use crate::error::{Result, SiteViewsError};

/// Validation error with context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(rule: &str, message: String) -> Self {
        Self {
            rule: rule.to_string(),
            message,
        }
    }
}

/// Validate settings and return all errors.
pub fn validate_settings(settings: &Settings) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let overrides_dir = settings.overrides_dir.trim_matches('/');
    if overrides_dir.trim().is_empty() {
        errors.push(ValidationError::new(
            "overrides-dir",
            "'overrides_dir' must not be empty".to_string(),
        ));
    } else if escapes(overrides_dir) {
        errors.push(ValidationError::new(
            "overrides-dir",
            format!(
                "'overrides_dir' ({}) must stay inside the views root",
                settings.overrides_dir
            ),
        ));
    }

    for (id, namespace) in &settings.sites {
        if namespace.trim().is_empty() {
            errors.push(ValidationError::new(
                "site-namespace",
                format!("Site '{}' has an empty namespace", id),
            ));
        } else if namespace.starts_with('/') || escapes(namespace) {
            errors.push(ValidationError::new(
                "site-namespace",
                format!(
                    "Site '{}' namespace '{}' must stay inside the overrides directory",
                    id, namespace
                ),
            ));
        }
    }

    if let Some(admin) = &settings.admin_site {
        if !settings.sites.contains_key(admin) {
            errors.push(ValidationError::new(
                "admin-site",
                format!("Admin site '{}' is not listed under 'sites'", admin),
            ));
        }
    }

    for (index, template) in settings.templates.iter().enumerate() {
        if template.name.trim().is_empty() {
            errors.push(ValidationError::new(
                "template-name",
                format!("Template #{} has an empty name", index + 1),
            ));
        }
        if template.path.trim().is_empty() {
            errors.push(ValidationError::new(
                "template-path",
                format!("Template '{}' has an empty path", template.name),
            ));
        }
    }

    errors
}

fn escapes(path: &str) -> bool {
    path.split('/').any(|segment| segment == "..")
}

/// Validate settings, failing on the first batch of errors.
pub fn validate(settings: &Settings) -> Result<()> {
    let errors = validate_settings(settings);
    if errors.is_empty() {
        return Ok(());
    }

    let message = errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ");
    Err(SiteViewsError::ConfigValidationError { message })
}
