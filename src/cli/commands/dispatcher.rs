//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::PathBuf;

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::probe::ProbeEnv;
use crate::ui::UserInterface;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command, writing output through `ui`.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Process exit code (0 for success).
    pub exit_code: u8,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    home: Option<PathBuf>,
}

impl CommandDispatcher {
    /// Create a dispatcher, optionally overriding the home directory.
    pub fn new(home: Option<PathBuf>) -> Self {
        Self { home }
    }

    fn probe_env(&self) -> Result<ProbeEnv> {
        ProbeEnv::from_process(self.home.clone())
    }

    /// Dispatch and execute a command.
    ///
    /// With no subcommand, runs `check`.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Check) | None => {
                let cmd = super::check::CheckCommand::new(self.probe_env()?);
                cmd.execute(ui)
            }
            Some(Commands::Layout(args)) => {
                let cmd = super::layout::LayoutCommand::new(self.probe_env()?, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
        }
    }
}
