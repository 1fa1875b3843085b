//! Check command implementation.
//!
//! `siteviews check` verifies that every template with a default has a file
//! under the views root, so a resolution never points at nothing.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::cli::args::CheckArgs;
use crate::error::{Result, SiteViewsError};
use crate::overrides::{FileProber, GlobProber};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::project::Project;

#[derive(Debug, Serialize)]
struct CheckReport {
    checked: usize,
    missing: Vec<MissingDefault>,
}

#[derive(Debug, Serialize)]
struct MissingDefault {
    name: String,
    file: String,
}

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    config: Option<PathBuf>,
    args: CheckArgs,
}

impl CheckCommand {
    pub fn new(project_root: &Path, config: Option<&Path>, args: CheckArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config: config.map(Path::to_path_buf),
            args,
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let project = Project::load(&self.project_root, self.config.as_deref())?;
        let mapper = project.mapper();
        let views_root = mapper.layout().views_root();
        let prober = GlobProber::new();

        let mut report = CheckReport {
            checked: 0,
            missing: Vec::new(),
        };

        for descriptor in mapper.registry().iter() {
            if descriptor.has_no_default() {
                continue;
            }
            report.checked += 1;

            let file = descriptor.default_file_path();
            if !prober.exists_with_any_extension(views_root, &file)? {
                tracing::debug!("No default file for '{}' at {}", descriptor.name(), file);
                report.missing.push(MissingDefault {
                    name: descriptor.name().to_string(),
                    file,
                });
            }
        }

        if self.args.json {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| SiteViewsError::Other(e.into()))?;
            ui.message(&json);
        } else if report.missing.is_empty() {
            ui.success(&format!(
                "All {} default templates present under {}",
                report.checked,
                views_root.display()
            ));
        } else {
            for missing in &report.missing {
                ui.error(&format!(
                    "{}: no file matching {}.*",
                    missing.name, missing.file
                ));
            }
            ui.warning(&format!(
                "{} of {} default templates missing under {}",
                report.missing.len(),
                report.checked,
                views_root.display()
            ));
        }

        if report.missing.is_empty() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::TemplateRegistry;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    /// Write a default file for every built-in template that has one.
    fn populate_defaults(views_root: &Path) {
        let registry = TemplateRegistry::builtin().unwrap();
        for descriptor in registry.iter().filter(|d| !d.has_no_default()) {
            let path = views_root.join(format!("{}.html.erb", descriptor.default_file_path()));
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, "").unwrap();
        }
    }

    #[test]
    fn complete_tree_passes() {
        let temp = TempDir::new().unwrap();
        populate_defaults(&temp.path().join("app/views"));
        let mut ui = MockUI::new();

        let result = CheckCommand::new(temp.path(), None, CheckArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert!(ui.has_success("All 69 default templates present"));
    }

    #[test]
    fn missing_default_fails() {
        let temp = TempDir::new().unwrap();
        let views = temp.path().join("app/views");
        populate_defaults(&views);
        fs::remove_file(views.join("shared/_navigation_element.html.erb")).unwrap();
        let mut ui = MockUI::new();

        let result = CheckCommand::new(temp.path(), None, CheckArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("navigation: no file matching shared/_navigation_element.*"));
        assert!(ui.has_warning("1 of 69"));
    }

    #[test]
    fn json_report_lists_missing() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let result = CheckCommand::new(temp.path(), None, CheckArgs { json: true })
            .execute(&mut ui)
            .unwrap();

        assert_eq!(result.exit_code, 1);
        let value: serde_json::Value = serde_json::from_str(&ui.output()).unwrap();
        assert_eq!(value["checked"], 69);
        assert_eq!(value["missing"].as_array().unwrap().len(), 69);
    }
}
