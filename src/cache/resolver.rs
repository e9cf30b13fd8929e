//! Looking tools up in the cache
//!
//! Only complete entries (directory plus marker) are ever returned. A miss
//! is `Ok(None)`, never an error.

use crate::cache::layout::{EntryState, ToolKey};
use crate::cache::sink::DebugSink;
use crate::cache::store::{require, require_component, ToolCache};
use crate::cache::version::{clean_version, is_explicit_version, max_satisfying, parse_version};
use crate::error::{ToolCacheError, ToolCacheResult};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use walkdir::WalkDir;

/// An entry found on disk together with its state
#[derive(Debug, Clone, Serialize)]
pub struct CacheEntry {
    /// Key as laid out on disk (directory names, uncleaned)
    #[serde(flatten)]
    pub key: ToolKey,
    /// Entry directory
    pub path: PathBuf,
    /// Whether the entry has its completion marker
    pub state: EntryState,
}

impl<S: DebugSink> ToolCache<S> {
    /// Find the best complete entry for `version_spec`
    ///
    /// An explicit version is looked up directly. A range is matched against
    /// the complete versions cached for this tool and architecture.
    pub fn find(
        &self,
        tool: &str,
        version_spec: &str,
        arch: Option<&str>,
    ) -> ToolCacheResult<Option<PathBuf>> {
        require_component("tool", tool)?;
        require("version_spec", version_spec)?;
        let root = self.root()?;
        let arch = self.resolve_arch(arch);
        require_component("arch", &arch)?;

        let version = if self.is_explicit(version_spec) {
            version_spec.to_string()
        } else {
            let local_versions = self.find_all_versions(tool, Some(arch.as_str()))?;
            match self.evaluate_versions(&local_versions, version_spec) {
                Some(matched) => matched,
                None => return Ok(None),
            }
        };

        let key = self.checked_key(tool, &version, Some(arch.as_str()))?;
        let entry = key.entry_path(root);
        self.debug(format!("checking cache: {}", entry.display()));

        if EntryState::probe(&entry).is_complete() {
            self.debug(format!("Found tool in cache {}", key));
            return Ok(Some(entry));
        }

        self.debug("not found");
        Ok(None)
    }

    /// List every complete, semver-named version cached for `tool`
    ///
    /// Versions are returned as their directory names, lowest first. Only
    /// names already in cleaned form count, since `find` rebuilds the entry
    /// path from the cleaned version.
    pub fn find_all_versions(
        &self,
        tool: &str,
        arch: Option<&str>,
    ) -> ToolCacheResult<Vec<String>> {
        require_component("tool", tool)?;
        let root = self.root()?;
        let arch = self.resolve_arch(arch);
        require_component("arch", &arch)?;
        let tool_path = root.join(tool);

        if !tool_path.is_dir() {
            return Ok(Vec::new());
        }

        let read_dir = fs::read_dir(&tool_path)
            .map_err(|e| ToolCacheError::io(format!("reading {}", tool_path.display()), e))?;

        let mut versions = Vec::new();
        for dir_entry in read_dir {
            let dir_entry = dir_entry
                .map_err(|e| ToolCacheError::io(format!("reading {}", tool_path.display()), e))?;

            let Some(name) = dir_entry.file_name().to_str().map(str::to_string) else {
                continue;
            };

            let version_dir = dir_entry.path();
            if !version_dir.is_dir() || !self.is_explicit(&name) {
                continue;
            }
            if clean_version(&name) != name {
                self.debug(format!("skipping non-canonical version dir {}", name));
                continue;
            }

            if EntryState::probe(&version_dir.join(&arch)).is_complete() {
                versions.push(name);
            }
        }

        versions.sort_by_key(|v| parse_version(v));
        Ok(versions)
    }

    /// Every `<tool>/<version>/<arch>` directory under the root
    pub fn entries(&self) -> ToolCacheResult<Vec<CacheEntry>> {
        let root = self.root()?;
        if !root.is_dir() {
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();
        for dir_entry in WalkDir::new(root)
            .min_depth(3)
            .max_depth(3)
            .sort_by_file_name()
        {
            let dir_entry = dir_entry.map_err(|e| ToolCacheError::Walk {
                path: root.to_path_buf(),
                source: e,
            })?;

            if !dir_entry.file_type().is_dir() {
                continue;
            }

            if let Some(key) = key_from_entry_path(root, dir_entry.path()) {
                entries.push(CacheEntry {
                    state: EntryState::probe(dir_entry.path()),
                    path: dir_entry.into_path(),
                    key,
                });
            }
        }

        Ok(entries)
    }

    /// Remove entries left without a completion marker
    ///
    /// Returns the entries removed, or that would be removed on a dry run.
    pub fn prune_incomplete(&self, dry_run: bool) -> ToolCacheResult<Vec<CacheEntry>> {
        let incomplete: Vec<CacheEntry> = self
            .entries()?
            .into_iter()
            .filter(|e| e.state == EntryState::Incomplete)
            .collect();

        if dry_run {
            return Ok(incomplete);
        }

        for entry in &incomplete {
            self.debug(format!("removing incomplete entry {}", entry.path.display()));
            fs::remove_dir_all(&entry.path).map_err(|e| {
                ToolCacheError::io(format!("removing {}", entry.path.display()), e)
            })?;
        }

        info!("Pruned {} incomplete entries", incomplete.len());
        Ok(incomplete)
    }

    fn is_explicit(&self, version_spec: &str) -> bool {
        let valid = is_explicit_version(version_spec);
        self.debug(format!("isExplicit: {}", version_spec));
        self.debug(format!("explicit? {}", valid));
        valid
    }

    fn evaluate_versions(&self, versions: &[String], version_spec: &str) -> Option<String> {
        self.debug(format!("evaluating {} versions", versions.len()));

        match max_satisfying(version_spec, versions) {
            Some(version) => {
                self.debug(format!("matched: {}", version));
                Some(version)
            }
            None => {
                self.debug("match not found");
                None
            }
        }
    }
}

fn key_from_entry_path(root: &Path, entry: &Path) -> Option<ToolKey> {
    let rel = entry.strip_prefix(root).ok()?;
    let mut parts = rel.iter().map(|p| p.to_str());

    match (parts.next(), parts.next(), parts.next()) {
        (Some(Some(tool)), Some(Some(version)), Some(Some(arch))) => Some(ToolKey {
            tool: tool.to_string(),
            version: version.to_string(),
            arch: arch.to_string(),
        }),
        _ => None,
    }
}
