//! Styled terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, OutputMode, SiteViewsTheme, UserInterface};

/// Terminal UI: results to stdout, errors to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: SiteViewsTheme,
    mode: OutputMode,
}

impl TerminalUI {
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            SiteViewsTheme::new()
        } else {
            SiteViewsTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn theme(&self) -> &SiteViewsTheme {
        &self.theme
    }

    fn message(&mut self, msg: &str) {
        writeln!(self.out, "{}", msg).ok();
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }
}

/// Create the UI used by the binary.
pub fn create_ui(mode: OutputMode) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode))
}
