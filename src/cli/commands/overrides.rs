//! Overrides command implementation.
//!
//! `siteviews overrides <site>` lists every template the site overrides.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::cli::args::OverridesArgs;
use crate::error::{Result, SiteViewsError};
use crate::sites::SiteRef;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::project::Project;

#[derive(Debug, Serialize)]
struct Override<'a> {
    name: &'a str,
    path: &'a str,
}

/// The overrides command implementation.
pub struct OverridesCommand {
    project_root: PathBuf,
    config: Option<PathBuf>,
    args: OverridesArgs,
}

impl OverridesCommand {
    pub fn new(project_root: &Path, config: Option<&Path>, args: OverridesArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config: config.map(Path::to_path_buf),
            args,
        }
    }
}

impl Command for OverridesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let project = Project::load(&self.project_root, self.config.as_deref())?;
        let overridden = project
            .mapper()
            .overridden_by(&SiteRef::from(self.args.site.as_str()))?;

        if self.args.json {
            let listed: Vec<_> = overridden
                .iter()
                .map(|r| Override {
                    name: r.name(),
                    path: r.path(),
                })
                .collect();
            let json = serde_json::to_string_pretty(&listed)
                .map_err(|e| SiteViewsError::Other(e.into()))?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        if overridden.is_empty() {
            ui.success(&format!(
                "Site '{}' uses the shared templates only",
                self.args.site
            ));
            return Ok(CommandResult::success());
        }

        for resolved in &overridden {
            let line = ui.theme().format_resolution(
                resolved.name(),
                resolved.kind(),
                resolved.path(),
                true,
            );
            ui.message(&line);
        }

        Ok(CommandResult::success())
    }
}
