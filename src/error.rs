//! Error types for probe operations.
//!
//! This module defines [`ProbeError`], the error type used throughout the
//! crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - `BinaryMissing` and `NotOnSearchPath` are failed install assertions
//! - `ExecutableNotFound` is a failed name lookup on the execution path
//! - Use `anyhow::Error` (via `ProbeError::Other`) for unexpected errors
//!
//! Every variant is fatal: the first one raised ends the run.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for probe operations.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// No home directory could be determined and none was supplied.
    #[error("Could not determine the home directory (pass --home or set MICROMAMBA_PROBE_HOME)")]
    HomeUnavailable,

    /// The micromamba binary is not at its expected location.
    #[error("micromamba binary not found at {path}")]
    BinaryMissing { path: PathBuf },

    /// The bin directory is not an entry of the search path.
    #[error("{dir} is not on the search path")]
    NotOnSearchPath { dir: PathBuf },

    /// No executable with the given name resolves on the execution path.
    #[error("Could not resolve executable '{name}' on PATH: {message}")]
    ExecutableNotFound { name: String, message: String },

    /// Report serialization failed.
    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ProbeError {
    /// Whether this error is one of the install assertions failing.
    pub fn is_assertion(&self) -> bool {
        matches!(
            self,
            ProbeError::BinaryMissing { .. } | ProbeError::NotOnSearchPath { .. }
        )
    }
}

/// Result type alias for probe operations.
pub type Result<T> = std::result::Result<T, ProbeError>;
