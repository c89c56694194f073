//! Layout command implementation.
//!
//! `micromamba-probe layout` lists every well-known location of the
//! install and whether it exists. Missing entries are reported, not fatal.

use crate::cli::args::LayoutArgs;
use crate::error::Result;
use crate::probe::{LayoutReport, ProbeEnv};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The layout command implementation.
pub struct LayoutCommand {
    env: ProbeEnv,
    args: LayoutArgs,
}

impl LayoutCommand {
    pub fn new(env: ProbeEnv, args: LayoutArgs) -> Self {
        Self { env, args }
    }
}

impl Command for LayoutCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let report = self.env.layout().inspect();

        if self.args.json {
            ui.message(&serde_json::to_string_pretty(&report)?);
        } else {
            show_report(ui, &report);
        }

        Ok(CommandResult::success())
    }
}

/// Bracketed presence marker, padded to a fixed width.
fn presence_symbol(present: bool) -> &'static str {
    if present {
        "[ok]     "
    } else {
        "[missing]"
    }
}

fn show_report(ui: &mut dyn UserInterface, report: &LayoutReport) {
    ui.message(&format!("Install layout under {}", report.home.display()));
    for entry in &report.entries {
        ui.message(&format!(
            "  {} {:<14} {}",
            presence_symbol(entry.present),
            entry.name,
            entry.path.display()
        ));
    }
    ui.message(&format!(
        "  {} {:<14} mamba initialize block",
        presence_symbol(report.profile_initialized),
        "shell profile"
    ));

    let missing = report.entries.iter().filter(|e| !e.present).count();
    if missing == 0 {
        ui.success("All install locations present");
    } else {
        ui.warning(&format!("{} of {} install locations missing", missing, report.entries.len()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::{InstallLayout, Platform, SearchPath};
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn env_for(home: &std::path::Path) -> ProbeEnv {
        ProbeEnv::new(Platform::current(), home, SearchPath::default())
    }

    #[test]
    fn layout_on_empty_home_succeeds() {
        let temp = TempDir::new().unwrap();
        let cmd = LayoutCommand::new(env_for(temp.path()), LayoutArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        // header + 7 entries + profile line
        assert_eq!(ui.messages().len(), 9);
        assert!(ui.messages()[1..].iter().all(|m| m.contains("[missing]")));
        assert_eq!(ui.warnings(), &["7 of 7 install locations missing".to_string()]);
    }

    #[test]
    fn layout_marks_present_entries() {
        let temp = TempDir::new().unwrap();
        let layout = InstallLayout::new(temp.path(), Platform::current());
        fs::create_dir_all(layout.envs_dir()).unwrap();
        let cmd = LayoutCommand::new(env_for(temp.path()), LayoutArgs::default());
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        let line = |name: &str| {
            ui.messages()
                .iter()
                .find(|m| m.contains(name))
                .cloned()
                .unwrap()
        };
        assert!(line("environments").contains("[ok]"));
        assert!(line("root prefix").contains("[ok]"));
        assert!(line("package cache").contains("[missing]"));
    }

    #[test]
    fn layout_complete_install_reports_success() {
        let temp = TempDir::new().unwrap();
        let layout = InstallLayout::new(temp.path(), Platform::current());
        fs::create_dir_all(layout.bin_dir()).unwrap();
        fs::create_dir_all(layout.pkgs_dir()).unwrap();
        fs::create_dir_all(layout.envs_dir()).unwrap();
        fs::write(layout.binary(), "").unwrap();
        fs::write(layout.condarc(), "always_yes: true\n").unwrap();
        fs::write(layout.bash_profile(), "").unwrap();
        let cmd = LayoutCommand::new(env_for(temp.path()), LayoutArgs::default());
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert!(ui.warnings().is_empty());
        assert_eq!(ui.successes().len(), 1);
    }

    #[test]
    fn layout_survives_unreadable_profile() {
        let temp = TempDir::new().unwrap();
        let layout = InstallLayout::new(temp.path(), Platform::current());
        fs::create_dir_all(layout.bash_profile()).unwrap();
        let cmd = LayoutCommand::new(env_for(temp.path()), LayoutArgs { json: true });
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        let value: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(value["profile_initialized"], false);
    }

    #[test]
    fn layout_json_is_parseable() {
        let temp = TempDir::new().unwrap();
        let cmd = LayoutCommand::new(env_for(temp.path()), LayoutArgs { json: true });
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert_eq!(ui.messages().len(), 1);
        let value: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(value["entries"].as_array().unwrap().len(), 7);
        assert_eq!(value["profile_initialized"], false);
    }

    #[test]
    fn presence_symbols_align() {
        assert_eq!(presence_symbol(true).len(), presence_symbol(false).len());
    }
}
