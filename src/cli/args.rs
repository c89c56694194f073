//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// micromamba-probe - Verify a home-directory micromamba install.
#[derive(Debug, Parser)]
#[command(name = "micromamba-probe")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Home directory to probe (overrides the current user's home)
    #[arg(long, global = true, env = "MICROMAMBA_PROBE_HOME", value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Suppress diagnostic output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Verify the micromamba install (default if no command specified)
    Check,

    /// Show the resolved install layout
    Layout(LayoutArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `layout` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct LayoutArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
