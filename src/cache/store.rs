//! Tool cache handle
//!
//! Holds the injected settings and debug sink shared by the writer and
//! resolver halves of the cache.

use crate::cache::layout::{host_arch, ToolKey};
use crate::cache::sink::{DebugSink, TracingSink};
use crate::error::{ToolCacheError, ToolCacheResult};
use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

/// Settings injected into a [`ToolCache`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCacheSettings {
    /// Base directory for all entries; operations fail while this is unset
    pub root: Option<PathBuf>,
    /// Architecture used when a caller passes none
    pub arch: String,
}

impl ToolCacheSettings {
    /// Settings rooted at `root` using the host architecture
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
            arch: host_arch(),
        }
    }

    /// Override the default architecture
    pub fn with_arch(mut self, arch: impl Into<String>) -> Self {
        self.arch = arch.into();
        self
    }
}

impl Default for ToolCacheSettings {
    fn default() -> Self {
        Self {
            root: None,
            arch: host_arch(),
        }
    }
}

/// Local cache of versioned tools
#[derive(Debug, Clone)]
pub struct ToolCache<S = TracingSink> {
    pub(crate) settings: ToolCacheSettings,
    pub(crate) sink: S,
}

impl ToolCache<TracingSink> {
    /// Create a cache that traces decisions through `tracing`
    pub fn new(settings: ToolCacheSettings) -> Self {
        Self::with_sink(settings, TracingSink)
    }
}

impl<S: DebugSink> ToolCache<S> {
    /// Create a cache reporting decisions to `sink`
    pub fn with_sink(settings: ToolCacheSettings, sink: S) -> Self {
        Self { settings, sink }
    }

    /// The injected settings
    pub fn settings(&self) -> &ToolCacheSettings {
        &self.settings
    }

    /// The cache root, or a configuration error if it is undefined
    pub fn root(&self) -> ToolCacheResult<&Path> {
        self.settings
            .root
            .as_deref()
            .ok_or(ToolCacheError::CacheRootUndefined)
    }

    /// The caller's architecture, or the default when none or blank
    pub fn resolve_arch(&self, arch: Option<&str>) -> String {
        match arch {
            Some(a) if !a.trim().is_empty() => a.to_string(),
            _ => self.settings.arch.clone(),
        }
    }

    /// Build a key using this cache's default architecture
    pub fn key(&self, tool: &str, version: &str, arch: Option<&str>) -> ToolKey {
        ToolKey::new(tool, version, arch, &self.settings.arch)
    }

    /// Build a key whose parts each name one directory below the root
    pub(crate) fn checked_key(
        &self,
        tool: &str,
        version: &str,
        arch: Option<&str>,
    ) -> ToolCacheResult<ToolKey> {
        let key = self.key(tool, version, arch);
        require_component("tool", &key.tool)?;
        require_component("version", &key.version)?;
        require_component("arch", &key.arch)?;
        Ok(key)
    }

    pub(crate) fn debug(&self, message: impl AsRef<str>) {
        self.sink.debug(message.as_ref());
    }
}

/// Reject blank required arguments
pub(crate) fn require(name: &'static str, value: &str) -> ToolCacheResult<()> {
    if value.trim().is_empty() {
        return Err(ToolCacheError::invalid_argument(name, "must not be blank"));
    }
    Ok(())
}

/// Reject values that are not exactly one plain path component
///
/// Absolute paths, `.`/`..` and anything containing a separator would let
/// a key address a path outside the cache root.
pub(crate) fn require_component(name: &'static str, value: &str) -> ToolCacheResult<()> {
    require(name, value)?;

    let mut components = Path::new(value).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(c)), None) if c == OsStr::new(value) => Ok(()),
        _ => Err(ToolCacheError::invalid_argument(
            name,
            format!("'{}' is not a single path component", value),
        )),
    }
}
