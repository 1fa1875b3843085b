//! Error types for siteviews operations.
//!
//! This module defines [`SiteViewsError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - `UnknownTemplate` is a programming error and is never recovered
//! - `SiteNotFound` is recovered once by the request glue (admin site fallback)
//! - A missing override file is a normal outcome, not an error
//! - Use `anyhow::Error` (via `SiteViewsError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for siteviews operations.
#[derive(Debug, Error)]
pub enum SiteViewsError {
    /// Symbolic template name is not registered.
    #[error("Unknown template: {name}")]
    UnknownTemplate { name: String },

    /// No site exists with the given identifier.
    #[error("Site not found: {identifier}")]
    SiteNotFound { identifier: String },

    /// The renderer could not find a file at the resolved path.
    #[error("Missing render target: {path}")]
    MissingRenderTarget { path: String },

    /// The template resolved to nothing (no override and no default).
    #[error("No template available for '{name}'")]
    NoTemplate { name: String },

    /// The registry table or a configured descriptor is malformed.
    #[error("Invalid template registry: {message}")]
    InvalidRegistry { message: String },

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for siteviews operations.
pub type Result<T> = std::result::Result<T, SiteViewsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_template_displays_name() {
        let err = SiteViewsError::UnknownTemplate {
            name: "nonexistent".into(),
        };
        assert!(err.to_string().contains("nonexistent"));
    }

    #[test]
    fn site_not_found_displays_identifier() {
        let err = SiteViewsError::SiteNotFound {
            identifier: "42".into(),
        };
        assert_eq!(err.to_string(), "Site not found: 42");
    }

    #[test]
    fn missing_render_target_displays_path() {
        let err = SiteViewsError::MissingRenderTarget {
            path: "site_templates/acme/banner".into(),
        };
        assert!(err.to_string().contains("site_templates/acme/banner"));
    }

    #[test]
    fn no_template_displays_name() {
        let err = SiteViewsError::NoTemplate {
            name: "layout".into(),
        };
        assert!(err.to_string().contains("'layout'"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = SiteViewsError::ConfigParseError {
            path: PathBuf::from("/config.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/config.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: SiteViewsError = io_err.into();
        assert!(matches!(err, SiteViewsError::Io(_)));
    }

    #[test]
    fn anyhow_error_converts() {
        let err: SiteViewsError = anyhow::anyhow!("boom").into();
        assert!(matches!(err, SiteViewsError::Other(_)));
        assert_eq!(err.to_string(), "boom");
    }
}
