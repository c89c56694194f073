//! micromamba-probe - Verify a home-directory micromamba install.
//!
//! The probe checks that the micromamba binary exists under
//! `~/micromamba-bin`, that this directory is on the search path, and that
//! `micromamba` resolves by name.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`probe`] - Install layout, search path and the checks themselves
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use micromamba_probe::probe::{InstallLayout, Platform, SearchPath};
//!
//! let layout = InstallLayout::new(Path::new("/home/me"), Platform::Other);
//! let path = SearchPath::new(vec![layout.bin_dir()]);
//! assert!(path.contains(&layout.bin_dir()));
//! ```

pub mod cli;
pub mod error;
pub mod probe;
pub mod ui;

pub use error::{ProbeError, Result};
