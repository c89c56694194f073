//! Check command implementation.
//!
//! `micromamba-probe check` (also the default) verifies the install and
//! fails on the first check that does not hold.

use crate::error::Result;
use crate::probe::{EnvironmentProbe, ProbeEnv};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    probe: EnvironmentProbe,
}

impl CheckCommand {
    /// Create a new check command against a captured environment.
    pub fn new(env: ProbeEnv) -> Self {
        Self {
            probe: EnvironmentProbe::new(env),
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let report = self.probe.check(ui)?;
        tracing::debug!(
            binary = %report.binary.display(),
            resolved = %report.resolved.display(),
            "All checks passed"
        );
        Ok(CommandResult::success())
    }
}
