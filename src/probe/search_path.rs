//! The process search path.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};

/// Ordered list of directories consulted when resolving executables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath {
    entries: Vec<PathBuf>,
}

impl SearchPath {
    /// Build from an explicit list of directories.
    pub fn new(entries: Vec<PathBuf>) -> Self {
        Self { entries }
    }

    /// Parse a `PATH`-style value using the platform separator.
    pub fn parse(value: &OsStr) -> Self {
        Self {
            entries: std::env::split_paths(value).collect(),
        }
    }

    /// Read the search path of the running process.
    ///
    /// An unset `PATH` yields an empty search path.
    pub fn from_env() -> Self {
        std::env::var_os("PATH")
            .map(|path| Self::parse(&path))
            .unwrap_or_default()
    }

    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    /// Whether `dir` is one of the entries.
    ///
    /// Comparison is component-wise, so `/a/b/` matches `/a/b`.
    pub fn contains(&self, dir: &Path) -> bool {
        self.entries.iter().any(|entry| entry == dir)
    }

    /// Join the entries back into a `PATH`-style value.
    ///
    /// Returns `None` if an entry contains the separator itself.
    pub fn to_os_string(&self) -> Option<OsString> {
        std::env::join_paths(&self.entries).ok()
    }
}

/// Renders as `['/usr/bin', '/home/me/micromamba-bin']`.
impl fmt::Display for SearchPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items: Vec<String> = self
            .entries
            .iter()
            .map(|p| quote(&p.display().to_string()))
            .collect();
        write!(f, "[{}]", items.join(", "))
    }
}

/// Quote a string literal Python-style: single quotes unless the text
/// holds a single quote and no double quote.
fn quote(s: &str) -> String {
    let delim = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(s.len() + 2);
    out.push(delim);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == delim => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(delim);
    out
}
