//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait and is routed by
//! [`CommandDispatcher`]. Commands share project loading through
//! [`project::Project`].

pub mod check;
pub mod dispatcher;
pub mod list;
pub mod overrides;
pub mod project;
pub mod resolve;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use project::Project;
