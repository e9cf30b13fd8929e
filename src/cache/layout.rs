//! On-disk layout of cache entries
//!
//! ```text
//! <root>/<tool>/<version>/<arch>/           entry payload
//! <root>/<tool>/<version>/<arch>.complete   completion marker
//! ```
//!
//! The marker is a sibling of the arch directory, not a file inside it.
//! Its existence alone marks the entry as complete.

use crate::cache::version::clean_version;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

/// Suffix appended to an entry path to form its completion marker
pub const MARKER_SUFFIX: &str = ".complete";

/// Host CPU architecture in runner naming (`x64`, `arm64`, ...)
pub fn host_arch() -> String {
    match std::env::consts::ARCH {
        "x86_64" => "x64",
        "aarch64" => "arm64",
        "x86" => "x86",
        "arm" => "arm",
        other => other,
    }
    .to_string()
}

/// Identifies one cache entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ToolKey {
    /// Case-sensitive tool name
    pub tool: String,
    /// Cleaned version, or the raw string if it is not a semantic version
    pub version: String,
    /// CPU architecture
    pub arch: String,
}

impl ToolKey {
    /// Build a key, cleaning the version and defaulting a blank arch
    pub fn new(tool: &str, version: &str, arch: Option<&str>, default_arch: &str) -> Self {
        let arch = match arch {
            Some(a) if !a.trim().is_empty() => a,
            _ => default_arch,
        };

        Self {
            tool: tool.to_string(),
            version: clean_version(version),
            arch: arch.to_string(),
        }
    }

    /// Directory holding the entry payload
    pub fn entry_path(&self, root: &Path) -> PathBuf {
        root.join(&self.tool).join(&self.version).join(&self.arch)
    }

    /// Sibling marker file that signals a finished write
    pub fn marker_path(&self, root: &Path) -> PathBuf {
        marker_for(&self.entry_path(root))
    }
}

impl fmt::Display for ToolKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.tool, self.version, self.arch)
    }
}

/// Marker path for an entry directory: the path with `.complete` appended
pub fn marker_for(entry: &Path) -> PathBuf {
    let mut marker: OsString = entry.as_os_str().to_owned();
    marker.push(MARKER_SUFFIX);
    PathBuf::from(marker)
}

/// State of a cache entry on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryState {
    /// No entry directory exists
    Miss,
    /// Directory exists without a marker: write in progress or crashed
    Incomplete,
    /// Directory and marker both exist
    Complete,
}

impl EntryState {
    /// Inspect the entry directory and marker at `entry`
    pub fn probe(entry: &Path) -> Self {
        if !entry.is_dir() {
            Self::Miss
        } else if marker_for(entry).is_file() {
            Self::Complete
        } else {
            Self::Incomplete
        }
    }

    /// Whether lookups may return this entry
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete)
    }
}

impl fmt::Display for EntryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Miss => write!(f, "miss"),
            Self::Incomplete => write!(f, "incomplete"),
            Self::Complete => write!(f, "complete"),
        }
    }
}
