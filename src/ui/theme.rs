//! Visual theme and styling.

use console::Style;

use crate::registry::TemplateKind;

/// Styles used by the CLI.
#[derive(Debug, Clone)]
pub struct SiteViewsTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for template names (bold).
    pub highlight: Style,
    /// Style for site override paths (magenta).
    pub site_path: Style,
    /// Style for category headings (bold magenta).
    pub header: Style,
}

impl Default for SiteViewsTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl SiteViewsTheme {
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            site_path: Style::new().magenta(),
            header: Style::new().bold().magenta(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            site_path: Style::new(),
            header: Style::new(),
        }
    }

    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format one resolution line: name, kind, and path (site paths highlighted).
    pub fn format_resolution(&self, name: &str, kind: TemplateKind, path: &str, site: bool) -> String {
        let path = if site {
            self.site_path.apply_to(path).to_string()
        } else {
            path.to_string()
        };
        format!(
            "{} {} {}",
            self.highlight.apply_to(name),
            self.dim.apply_to(format!("({})", kind)),
            path
        )
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
