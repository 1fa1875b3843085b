//! List command implementation.
//!
//! The `siteviews list` command lists registered templates by category.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::cli::args::ListArgs;
use crate::error::{Result, SiteViewsError};
use crate::registry::{TemplateDescriptor, TemplateKind};
use crate::ui::{Table, UserInterface};

use super::dispatcher::{Command, CommandResult};
use super::project::Project;

#[derive(Debug, Serialize)]
struct ListedTemplate<'a> {
    name: &'a str,
    category: &'a str,
    kind: TemplateKind,
    path: &'a str,
    probe_path: &'a str,
    shared: bool,
    no_default: bool,
}

/// The list command implementation.
pub struct ListCommand {
    project_root: PathBuf,
    config: Option<PathBuf>,
    args: ListArgs,
}

impl ListCommand {
    pub fn new(project_root: &Path, config: Option<&Path>, args: ListArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config: config.map(Path::to_path_buf),
            args,
        }
    }
}

fn flags(descriptor: &TemplateDescriptor) -> String {
    let mut flags = Vec::new();
    if descriptor.is_shared() {
        flags.push("shared");
    }
    if descriptor.has_no_default() {
        flags.push("no-default");
    }
    flags.join(",")
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let project = Project::load(&self.project_root, self.config.as_deref())?;
        let registry = project.mapper().registry();

        let categories: Vec<_> = registry
            .categories()
            .iter()
            .filter(|c| self.args.category.as_deref().map_or(true, |f| f == c.name))
            .collect();

        if categories.is_empty() {
            if let Some(category) = &self.args.category {
                let known: Vec<_> = registry.categories().iter().map(|c| c.name.as_str()).collect();
                ui.error(&format!(
                    "Unknown category '{}' (known: {})",
                    category,
                    known.join(", ")
                ));
                return Ok(CommandResult::failure(2));
            }
        }

        if self.args.json {
            let mut listed = Vec::new();
            for category in &categories {
                for name in &category.templates {
                    let descriptor = registry.get(name)?;
                    listed.push(ListedTemplate {
                        name: descriptor.name(),
                        category: &category.name,
                        kind: descriptor.kind(),
                        path: descriptor.canonical_path(),
                        probe_path: descriptor.probe_path(),
                        shared: descriptor.is_shared(),
                        no_default: descriptor.has_no_default(),
                    });
                }
            }
            let json = serde_json::to_string_pretty(&listed)
                .map_err(|e| SiteViewsError::Other(e.into()))?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        for (i, category) in categories.iter().enumerate() {
            if i > 0 {
                ui.message("");
            }
            let header = ui
                .theme()
                .header
                .apply_to(format!("{}:", category.name))
                .to_string();
            ui.message(&header);

            let mut table = Table::new(&["NAME", "KIND", "PATH", "FLAGS"]);
            for name in &category.templates {
                let descriptor = registry.get(name)?;
                table.add_row([
                    descriptor.name().to_string(),
                    descriptor.kind().to_string(),
                    descriptor.canonical_path().to_string(),
                    flags(descriptor),
                ]);
            }
            for line in table.render() {
                ui.message(&format!("  {}", line));
            }
        }

        Ok(CommandResult::success())
    }
}
