//! Terminal output for the `siteviews` CLI.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] for styled terminal output
//! - [`MockUI`] for capturing output in tests
//! - [`Table`] for column-aligned listings
//!
//! # Example
//!
//! ```
//! use siteviews::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("product  site_templates/acme/products/show");
//! ui.success("All default templates present");
//! assert!(ui.has_success("All default templates present"));
//! ```

pub mod mock;
pub mod output;
pub mod table;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use table::Table;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, SiteViewsTheme};

/// Trait for user-facing output.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Styles for formatting command output.
    fn theme(&self) -> &SiteViewsTheme;

    /// Display a message (command results; shown in every mode).
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);
}
