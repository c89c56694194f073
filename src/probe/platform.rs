//! Platform tag detection.

/// Coarse OS classification used to pick the binary filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Other,
}

/// Executable name looked up on the execution path.
pub const EXECUTABLE_NAME: &str = "micromamba";

impl Platform {
    /// Detect the platform of the running process.
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else {
            Platform::Other
        }
    }

    /// Filename of the micromamba binary on this platform.
    pub fn binary_name(self) -> &'static str {
        match self {
            Platform::Windows => "micromamba.exe",
            Platform::Other => EXECUTABLE_NAME,
        }
    }
}
