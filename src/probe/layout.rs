//! Home-directory micromamba install layout.
//!
//! A micromamba install driven by the setup action puts the binary under
//! `~/micromamba-bin` and its root prefix under `~/micromamba-root`.
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use micromamba_probe::probe::{InstallLayout, Platform};
//!
//! let layout = InstallLayout::new(Path::new("/home/me"), Platform::Other);
//! assert_eq!(layout.bin_dir(), Path::new("/home/me/micromamba-bin"));
//! assert_eq!(layout.binary(), Path::new("/home/me/micromamba-bin/micromamba"));
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::platform::Platform;

/// Directory holding the micromamba binary, relative to home.
pub const BIN_DIR_NAME: &str = "micromamba-bin";

/// Root prefix directory, relative to home.
pub const ROOT_DIR_NAME: &str = "micromamba-root";

const PROFILE_BLOCK_START: &str = "# >>> mamba initialize >>>";
const PROFILE_BLOCK_END: &str = "# <<< mamba initialize <<<";

/// Whether a layout entry is expected to be a file or a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Directory,
}

/// One well-known location of the install and whether it is present.
#[derive(Debug, Clone, Serialize)]
pub struct LayoutEntry {
    /// Short label (e.g., "executable", "root prefix").
    pub name: &'static str,
    pub path: PathBuf,
    pub kind: EntryKind,
    /// True when something of the expected kind exists at `path`.
    pub present: bool,
}

/// Snapshot of the install layout under a home directory.
#[derive(Debug, Clone, Serialize)]
pub struct LayoutReport {
    pub home: PathBuf,
    pub entries: Vec<LayoutEntry>,
    /// Whether `~/.bash_profile` carries a mamba initialize block.
    pub profile_initialized: bool,
}

/// Resolves install paths relative to a home directory.
#[derive(Debug, Clone)]
pub struct InstallLayout {
    home: PathBuf,
    platform: Platform,
}

impl InstallLayout {
    /// Create a layout rooted at `home`.
    pub fn new(home: &Path, platform: Platform) -> Self {
        Self {
            home: home.to_path_buf(),
            platform,
        }
    }

    /// `~/micromamba-bin`
    pub fn bin_dir(&self) -> PathBuf {
        self.home.join(BIN_DIR_NAME)
    }

    /// `~/micromamba-bin/micromamba`, with `.exe` on Windows.
    pub fn binary(&self) -> PathBuf {
        self.bin_dir().join(self.platform.binary_name())
    }

    /// `~/micromamba-root`
    pub fn root_prefix(&self) -> PathBuf {
        self.home.join(ROOT_DIR_NAME)
    }

    pub fn pkgs_dir(&self) -> PathBuf {
        self.root_prefix().join("pkgs")
    }

    pub fn envs_dir(&self) -> PathBuf {
        self.root_prefix().join("envs")
    }

    pub fn condarc(&self) -> PathBuf {
        self.home.join(".condarc")
    }

    pub fn bash_profile(&self) -> PathBuf {
        self.home.join(".bash_profile")
    }

    /// Check every well-known location and the profile activation block.
    ///
    /// Unreadable entries are reported as absent, never as errors.
    pub fn inspect(&self) -> LayoutReport {
        let defs = [
            ("bin directory", self.bin_dir(), EntryKind::Directory),
            ("executable", self.binary(), EntryKind::File),
            ("root prefix", self.root_prefix(), EntryKind::Directory),
            ("package cache", self.pkgs_dir(), EntryKind::Directory),
            ("environments", self.envs_dir(), EntryKind::Directory),
            ("conda config", self.condarc(), EntryKind::File),
            ("bash profile", self.bash_profile(), EntryKind::File),
        ];

        let entries = defs
            .into_iter()
            .map(|(name, path, kind)| {
                let present = match kind {
                    EntryKind::File => path.is_file(),
                    EntryKind::Directory => path.is_dir(),
                };
                tracing::debug!(entry = name, path = %path.display(), present, "Inspected layout entry");
                LayoutEntry {
                    name,
                    path,
                    kind,
                    present,
                }
            })
            .collect();

        LayoutReport {
            home: self.home.clone(),
            entries,
            profile_initialized: self.profile_initialized(),
        }
    }

    /// Whether `~/.bash_profile` contains a complete mamba initialize block.
    ///
    /// A profile that is missing or cannot be read counts as not
    /// initialized. Non-UTF-8 bytes are tolerated.
    pub fn profile_initialized(&self) -> bool {
        let path = self.bash_profile();
        match fs::read(&path) {
            Ok(bytes) => has_profile_block(&String::from_utf8_lossy(&bytes)),
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "Could not read shell profile");
                false
            }
        }
    }
}

/// Find a start marker followed later by an end marker.
fn has_profile_block(content: &str) -> bool {
    content
        .find(PROFILE_BLOCK_START)
        .map(|start| content[start..].contains(PROFILE_BLOCK_END))
        .unwrap_or(false)
}
