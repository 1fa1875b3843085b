//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! output for later assertion.

use super::{OutputMode, SiteViewsTheme, UserInterface};

/// Mock UI implementation for testing. Uses the plain theme.
#[derive(Debug)]
pub struct MockUI {
    mode: OutputMode,
    theme: SiteViewsTheme,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
}

impl Default for MockUI {
    fn default() -> Self {
        Self::with_mode(OutputMode::Normal)
    }
}

impl MockUI {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            theme: SiteViewsTheme::plain(),
            messages: Vec::new(),
            successes: Vec::new(),
            warnings: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// All messages joined by newlines.
    pub fn output(&self) -> String {
        self.messages.join("\n")
    }

    /// Check if a message containing the text was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    pub fn clear(&mut self) {
        self.messages.clear();
        self.successes.clear();
        self.warnings.clear();
        self.errors.clear();
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn theme(&self) -> &SiteViewsTheme {
        &self.theme
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_captures_output() {
        let mut ui = MockUI::new();
        ui.message("product (template) products/show");
        ui.success("done");
        ui.warning("careful");
        ui.error("broken");

        assert!(ui.has_message("products/show"));
        assert!(ui.has_success("done"));
        assert!(ui.has_warning("careful"));
        assert!(ui.has_error("broken"));
    }

    #[test]
    fn mock_clear_resets() {
        let mut ui = MockUI::with_mode(OutputMode::Quiet);
        ui.message("a");
        ui.error("b");
        ui.clear();

        assert!(ui.messages().is_empty());
        assert!(ui.errors().is_empty());
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn output_joins_messages() {
        let mut ui = MockUI::new();
        ui.message("one");
        ui.message("two");
        assert_eq!(ui.output(), "one\ntwo");
    }
}
