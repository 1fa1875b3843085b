//! Configuration loading, parsing, and validation for siteviews.
//!
//! This module handles:
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Deep merging in [`merger`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use siteviews::config::{load_merged_settings, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let config_dir = temp.path().join(".siteviews");
//! fs::create_dir_all(&config_dir).unwrap();
//! fs::write(config_dir.join("config.yml"), "sites:\n  \"1\": acme\n").unwrap();
//!
//! let settings = load_merged_settings(temp.path()).unwrap();
//! validate(&settings).unwrap();
//! assert_eq!(settings.sites.get("1").map(String::as_str), Some("acme"));
//! ```
//!
//! # Configuration File Locations
//!
//! siteviews discovers and merges configuration in this order:
//! 1. Project config (`.siteviews/config.yml`)
//! 2. Local overrides (`.siteviews/config.local.yml`)

pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use loader::{
    find_project_root, load_config_value, load_merged_settings, load_settings, ConfigPaths,
    CONFIG_DIR,
};
pub use merger::{deep_merge, merge_configs};
pub use schema::Settings;
pub use validator::{validate, validate_settings, ValidationError};
