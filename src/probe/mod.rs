//! Environment probe for a home-directory micromamba install.
//!
//! The probe answers one question: can a non-interactive process started
//! from this environment find and run the micromamba binary that setup put
//! under `~/micromamba-bin`? It checks, in order:
//!
//! 1. the binary exists at the platform-specific path,
//! 2. its directory is on the search path,
//! 3. `micromamba` resolves by name on that search path.
//!
//! Process state is captured once into a [`ProbeEnv`] so the checks can be
//! exercised against temporary directories.
//!
//! # Example
//!
//! ```no_run
//! use micromamba_probe::probe::{EnvironmentProbe, ProbeEnv};
//! use micromamba_probe::ui::MockUI;
//!
//! let env = ProbeEnv::from_process(None).unwrap();
//! let mut ui = MockUI::new();
//! let report = EnvironmentProbe::new(env).check(&mut ui).unwrap();
//! println!("micromamba resolves to {}", report.resolved.display());
//! ```

pub mod layout;
pub mod platform;
pub mod resolve;
pub mod search_path;

pub use layout::{EntryKind, InstallLayout, LayoutEntry, LayoutReport};
pub use platform::{Platform, EXECUTABLE_NAME};
pub use resolve::resolve_executable;
pub use search_path::SearchPath;

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::error::{ProbeError, Result};
use crate::ui::UserInterface;

/// Process state the probe reads.
#[derive(Debug, Clone)]
pub struct ProbeEnv {
    pub platform: Platform,
    pub home: PathBuf,
    pub search_path: SearchPath,
    pub cwd: PathBuf,
}

impl ProbeEnv {
    /// Capture the running process's platform, home, `PATH` and cwd.
    ///
    /// `home_override` replaces the user's home directory when given; a
    /// relative override is resolved against the current directory.
    pub fn from_process(home_override: Option<PathBuf>) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to read the current directory")?;
        let home = home_override
            .map(|home| absolute_from(&cwd, &home))
            .or_else(dirs::home_dir)
            .ok_or(ProbeError::HomeUnavailable)?;

        Ok(Self {
            platform: Platform::current(),
            home,
            search_path: SearchPath::from_env(),
            cwd,
        })
    }

    /// Build an environment from explicit values.
    pub fn new(platform: Platform, home: &Path, search_path: SearchPath) -> Self {
        Self {
            platform,
            home: home.to_path_buf(),
            search_path,
            cwd: home.to_path_buf(),
        }
    }

    pub fn layout(&self) -> InstallLayout {
        InstallLayout::new(&self.home, self.platform)
    }
}

/// Join a relative `path` onto `base`, dropping `.` components.
fn absolute_from(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path).components().collect()
    }
}

/// Outcome of a passing check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeReport {
    pub platform: Platform,
    pub binary: PathBuf,
    pub bin_dir: PathBuf,
    /// Where `micromamba` resolved on the search path.
    pub resolved: PathBuf,
}

/// Runs the install checks against a captured environment.
#[derive(Debug, Clone)]
pub struct EnvironmentProbe {
    env: ProbeEnv,
}

impl EnvironmentProbe {
    pub fn new(env: ProbeEnv) -> Self {
        Self { env }
    }

    /// Run every check in order, stopping at the first failure.
    ///
    /// The search path and bin directory are written to `ui` as two
    /// messages once the binary is known to exist and before the
    /// search path membership check.
    pub fn check(&self, ui: &mut dyn UserInterface) -> Result<ProbeReport> {
        let platform = self.env.platform;
        let layout = self.env.layout();
        tracing::debug!(?platform, home = %self.env.home.display(), "Probing micromamba install");

        let binary = layout.binary();
        if !binary.exists() {
            return Err(ProbeError::BinaryMissing { path: binary });
        }
        tracing::debug!(binary = %binary.display(), "Binary present");

        let bin_dir = layout.bin_dir();
        ui.message(&self.env.search_path.to_string());
        ui.message(&bin_dir.display().to_string());

        if !self.env.search_path.contains(&bin_dir) {
            return Err(ProbeError::NotOnSearchPath { dir: bin_dir });
        }
        tracing::debug!(bin_dir = %bin_dir.display(), "Bin directory on search path");

        let resolved = resolve_executable(EXECUTABLE_NAME, &self.env.search_path, &self.env.cwd)?;
        tracing::debug!(resolved = %resolved.display(), "Executable resolved");

        Ok(ProbeReport {
            platform,
            binary,
            bin_dir,
            resolved,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    /// Create a fake executable micromamba under `home/micromamba-bin`.
    fn install_binary(home: &Path) -> PathBuf {
        let layout = InstallLayout::new(home, Platform::current());
        fs::create_dir_all(layout.bin_dir()).unwrap();
        let binary = layout.binary();
        fs::write(&binary, "#!/bin/sh\n").unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&binary, fs::Permissions::from_mode(0o755)).unwrap();
        }
        binary
    }

    fn env_with_path(home: &Path, entries: Vec<PathBuf>) -> ProbeEnv {
        ProbeEnv::new(Platform::current(), home, SearchPath::new(entries))
    }

    #[test]
    fn passing_install_prints_two_lines() {
        let temp = TempDir::new().unwrap();
        let binary = install_binary(temp.path());
        let bin_dir = temp.path().join("micromamba-bin");
        let env = env_with_path(temp.path(), vec![PathBuf::from("/nonexistent"), bin_dir.clone()]);
        let mut ui = MockUI::new();

        let report = EnvironmentProbe::new(env.clone()).check(&mut ui).unwrap();

        assert_eq!(report.binary, binary);
        assert_eq!(report.bin_dir, bin_dir);
        assert_eq!(
            ui.messages(),
            &[env.search_path.to_string(), bin_dir.display().to_string()]
        );
        assert!(ui.errors().is_empty());
    }

    #[test]
    fn missing_binary_fails_before_output() {
        let temp = TempDir::new().unwrap();
        let bin_dir = temp.path().join("micromamba-bin");
        fs::create_dir_all(&bin_dir).unwrap();
        let env = env_with_path(temp.path(), vec![bin_dir]);
        let mut ui = MockUI::new();

        let err = EnvironmentProbe::new(env).check(&mut ui).unwrap_err();

        assert!(matches!(err, ProbeError::BinaryMissing { .. }));
        assert!(ui.messages().is_empty());
    }

    #[test]
    fn bin_dir_off_path_fails_after_output() {
        let temp = TempDir::new().unwrap();
        install_binary(temp.path());
        let env = env_with_path(temp.path(), vec![PathBuf::from("/usr/bin")]);
        let mut ui = MockUI::new();

        let err = EnvironmentProbe::new(env).check(&mut ui).unwrap_err();

        assert!(matches!(err, ProbeError::NotOnSearchPath { .. }));
        assert_eq!(ui.messages().len(), 2);
    }

    #[cfg(unix)]
    #[test]
    fn unresolvable_executable_fails_last() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let binary = install_binary(temp.path());
        // Present but not executable, so name lookup skips it
        fs::set_permissions(&binary, fs::Permissions::from_mode(0o644)).unwrap();
        let env = env_with_path(temp.path(), vec![temp.path().join("micromamba-bin")]);
        let mut ui = MockUI::new();

        let err = EnvironmentProbe::new(env).check(&mut ui).unwrap_err();

        assert!(matches!(err, ProbeError::ExecutableNotFound { .. }));
        assert_eq!(ui.messages().len(), 2);
    }

    #[test]
    fn repeated_checks_are_identical() {
        let temp = TempDir::new().unwrap();
        install_binary(temp.path());
        let env = env_with_path(temp.path(), vec![temp.path().join("micromamba-bin")]);
        let probe = EnvironmentProbe::new(env);

        let mut first = MockUI::new();
        let mut second = MockUI::new();
        let a = probe.check(&mut first).unwrap();
        let b = probe.check(&mut second).unwrap();

        assert_eq!(a, b);
        assert_eq!(first.messages(), second.messages());
    }

    #[test]
    fn from_process_honours_home_override() {
        let temp = TempDir::new().unwrap();
        let env = ProbeEnv::from_process(Some(temp.path().to_path_buf())).unwrap();
        assert_eq!(env.home, temp.path());
        assert_eq!(env.platform, Platform::current());
    }

    #[test]
    fn relative_home_override_becomes_absolute() {
        let env = ProbeEnv::from_process(Some(PathBuf::from("relative-home"))).unwrap();
        assert!(env.home.is_absolute());
        assert_eq!(env.home, env.cwd.join("relative-home"));
    }

    #[test]
    fn dot_home_is_the_current_directory() {
        let env = ProbeEnv::from_process(Some(PathBuf::from("."))).unwrap();
        assert_eq!(env.home, env.cwd);
        assert_eq!(
            env.layout().bin_dir().display().to_string(),
            env.cwd.join("micromamba-bin").display().to_string()
        );
    }

    #[test]
    fn absolute_from_keeps_absolute_paths() {
        let base = std::env::current_dir().unwrap();
        assert_eq!(absolute_from(&base, &base), base);
        assert_eq!(absolute_from(&base, Path::new("./a/./b")), base.join("a").join("b"));
    }
}
