//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] writing to stdout/stderr
//! - [`MockUI`] capturing output for tests
//!
//! # Example
//!
//! ```
//! use micromamba_probe::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("checking");
//! assert!(ui.has_message("checking"));
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, ProbeTheme};

/// Trait for user-facing output.
///
/// This trait allows capturing output in tests.
pub trait UserInterface {
    /// Display a plain message on standard output.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Shown in every output mode.
    fn error(&mut self, msg: &str);
}
