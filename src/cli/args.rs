//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// siteviews - inspect per-site template overrides.
#[derive(Debug, Parser)]
#[command(name = "siteviews")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .siteviews/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show which file a site renders for each template name
    Resolve(ResolveArgs),

    /// List registered templates
    List(ListArgs),

    /// List the templates a site overrides
    Overrides(OverridesArgs),

    /// Verify every default template exists under the views root
    Check(CheckArgs),
}

/// Arguments for the `resolve` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ResolveArgs {
    /// Site identifier
    pub site: String,

    /// Template names to resolve
    #[arg(required = true)]
    pub names: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Only list templates in this category
    #[arg(long)]
    pub category: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `overrides` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct OverridesArgs {
    /// Site identifier
    pub site: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
