//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command, writing output through `ui`.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
}

impl CommandDispatcher {
    pub fn new(project_root: PathBuf) -> Self {
        Self {
            project_root,
            config_override: None,
        }
    }

    /// Builder-style: load configuration from this file instead of discovering it.
    pub fn with_config(mut self, config: Option<PathBuf>) -> Self {
        self.config_override = config;
        self
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Route the CLI subcommand to its implementation and execute it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let root = &self.project_root;
        let config = self.config_override.as_deref();

        match &cli.command {
            Commands::Resolve(args) => {
                super::resolve::ResolveCommand::new(root, config, args.clone()).execute(ui)
            }
            Commands::List(args) => {
                super::list::ListCommand::new(root, config, args.clone()).execute(ui)
            }
            Commands::Overrides(args) => {
                super::overrides::OverridesCommand::new(root, config, args.clone()).execute(ui)
            }
            Commands::Check(args) => {
                super::check::CheckCommand::new(root, config, args.clone()).execute(ui)
            }
        }
    }
}
