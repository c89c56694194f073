//! micromamba-probe CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use micromamba_probe::cli::{Cli, CommandDispatcher};
use micromamba_probe::ui::{OutputMode, TerminalUI, UserInterface};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr; stdout carries only command output.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("micromamba_probe=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("micromamba_probe=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Handle --no-color before any styled output is built
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    init_tracing(cli.debug);

    tracing::debug!("micromamba-probe starting with args: {:?}", cli);

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Normal
    };
    let mut ui = TerminalUI::new(output_mode);

    let dispatcher = CommandDispatcher::new(cli.home.clone());

    match dispatcher.dispatch(&cli, &mut ui) {
        Ok(result) => ExitCode::from(result.exit_code),
        Err(e) => {
            tracing::debug!(assertion = e.is_assertion(), "Probe failed");
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
