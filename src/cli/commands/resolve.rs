//! Resolve command implementation.
//!
//! `siteviews resolve <site> <name>...` prints the file each template name
//! renders for a site.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::cli::args::ResolveArgs;
use crate::error::{Result, SiteViewsError};
use crate::registry::TemplateKind;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::project::Project;

/// One line of `resolve` output.
#[derive(Debug, Serialize)]
struct Resolution {
    name: String,
    kind: Option<TemplateKind>,
    path: Option<String>,
    site_specific: bool,
}

/// The resolve command implementation.
pub struct ResolveCommand {
    project_root: PathBuf,
    config: Option<PathBuf>,
    args: ResolveArgs,
}

impl ResolveCommand {
    pub fn new(project_root: &Path, config: Option<&Path>, args: ResolveArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config: config.map(Path::to_path_buf),
            args,
        }
    }
}

impl Command for ResolveCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let project = Project::load(&self.project_root, self.config.as_deref())?;
        let ctx = project.request(&self.args.site);

        let mut resolutions = Vec::with_capacity(self.args.names.len());
        let mut unknown = 0;

        for name in &self.args.names {
            match ctx.template_for(name) {
                Ok(Some(resolved)) => resolutions.push(Resolution {
                    name: name.clone(),
                    kind: Some(resolved.kind()),
                    path: Some(resolved.path().to_string()),
                    site_specific: resolved.is_override(),
                }),
                Ok(None) => resolutions.push(Resolution {
                    name: name.clone(),
                    kind: None,
                    path: None,
                    site_specific: false,
                }),
                Err(e @ SiteViewsError::UnknownTemplate { .. }) => {
                    ui.error(&e.to_string());
                    unknown += 1;
                }
                Err(e) => return Err(e),
            }
        }

        if self.args.json {
            let json = serde_json::to_string_pretty(&resolutions)
                .map_err(|e| SiteViewsError::Other(e.into()))?;
            ui.message(&json);
        } else {
            for resolution in &resolutions {
                let line = match (&resolution.kind, &resolution.path) {
                    (Some(kind), Some(path)) => ui.theme().format_resolution(
                        &resolution.name,
                        *kind,
                        path,
                        resolution.site_specific,
                    ),
                    _ => format!("{} (none)", resolution.name),
                };
                ui.message(&line);
            }
        }

        if unknown > 0 {
            Ok(CommandResult::failure(1))
        } else {
            Ok(CommandResult::success())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn setup_project() -> TempDir {
        let temp = TempDir::new().unwrap();
        let config_dir = temp.path().join(".siteviews");
        fs::create_dir_all(&config_dir).unwrap();
        fs::write(
            config_dir.join("config.yml"),
            "admin_site: admin\nsites:\n  \"1\": acme\n  admin: admin\n",
        )
        .unwrap();

        let site_dir = temp.path().join("app/views/site_templates/acme/products");
        fs::create_dir_all(&site_dir).unwrap();
        fs::write(site_dir.join("show.html.erb"), "").unwrap();
        temp
    }

    fn args(site: &str, names: &[&str], json: bool) -> ResolveArgs {
        ResolveArgs {
            site: site.to_string(),
            names: names.iter().map(|n| n.to_string()).collect(),
            json,
        }
    }

    #[test]
    fn resolves_override_and_default() {
        let temp = setup_project();
        let cmd = ResolveCommand::new(temp.path(), None, args("1", &["product", "cart"], false));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert_eq!(
            ui.messages(),
            &[
                "product (template) site_templates/acme/products/show".to_string(),
                "cart (template) cart/show".to_string(),
            ]
        );
    }

    #[test]
    fn template_without_default_prints_none() {
        let temp = setup_project();
        let cmd = ResolveCommand::new(temp.path(), None, args("1", &["layout"], false));
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();
        assert!(ui.has_message("layout (none)"));
    }

    #[test]
    fn unknown_template_fails_but_reports_the_rest() {
        let temp = setup_project();
        let cmd = ResolveCommand::new(temp.path(), None, args("1", &["bogus", "page"], false));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("bogus"));
        assert!(ui.has_message("pages/show"));
    }

    #[test]
    fn unknown_site_uses_admin_site() {
        let temp = setup_project();
        let cmd = ResolveCommand::new(temp.path(), None, args("99", &["product"], false));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();
        assert!(result.success);
        assert!(ui.has_message("product (template) products/show"));
    }

    #[test]
    fn unknown_site_without_admin_is_an_error() {
        let temp = TempDir::new().unwrap();
        let cmd = ResolveCommand::new(temp.path(), None, args("99", &["product"], false));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui);
        assert!(matches!(result, Err(SiteViewsError::SiteNotFound { .. })));
    }

    #[test]
    fn json_output() {
        let temp = setup_project();
        let cmd = ResolveCommand::new(temp.path(), None, args("1", &["product", "layout"], true));
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        let value: serde_json::Value = serde_json::from_str(&ui.output()).unwrap();
        assert_eq!(value[0]["name"], "product");
        assert_eq!(value[0]["kind"], "template");
        assert_eq!(value[0]["path"], "site_templates/acme/products/show");
        assert_eq!(value[0]["site_specific"], true);
        assert!(value[1]["path"].is_null());
    }
}
