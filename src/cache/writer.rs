//! Committing tools into the cache
//!
//! A write resets the entry (removing any old payload and marker), copies
//! the payload, then creates the completion marker. A failure mid-copy
//! leaves a marker-less entry that lookups ignore; the next write to the
//! same key resets it.

use crate::cache::layout::ToolKey;
use crate::cache::sink::DebugSink;
use crate::cache::store::{require_component, ToolCache};
use crate::error::{ToolCacheError, ToolCacheResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use walkdir::WalkDir;

impl<S: DebugSink> ToolCache<S> {
    /// Cache a directory tree under `(tool, version, arch)`
    ///
    /// Returns the entry directory.
    pub fn cache_dir(
        &self,
        source_dir: &Path,
        tool: &str,
        version: &str,
        arch: Option<&str>,
    ) -> ToolCacheResult<PathBuf> {
        let key = self.checked_key(tool, version, arch)?;
        let root = self.root()?;

        self.debug(format!("Caching tool {}", key));
        self.debug(format!("source dir: {}", source_dir.display()));

        if !source_dir.is_dir() {
            return Err(ToolCacheError::SourceDirNotFound(source_dir.to_path_buf()));
        }

        let dest = self.create_entry(root, &key)?;
        copy_tree(source_dir, &dest)?;
        self.complete_entry(root, &key)?;

        info!("Cached {} at {}", key, dest.display());
        Ok(dest)
    }

    /// Cache a single file as `target_file` under `(tool, version, arch)`
    ///
    /// Returns the entry directory, not the file path.
    pub fn cache_file(
        &self,
        source_file: &Path,
        target_file: &str,
        tool: &str,
        version: &str,
        arch: Option<&str>,
    ) -> ToolCacheResult<PathBuf> {
        let key = self.checked_key(tool, version, arch)?;
        require_component("target_file", target_file)?;
        let root = self.root()?;

        self.debug(format!("Caching tool {}", key));
        self.debug(format!("source file: {}", source_file.display()));

        if !source_file.is_file() {
            return Err(ToolCacheError::SourceFileNotFound(
                source_file.to_path_buf(),
            ));
        }

        let dest_dir = self.create_entry(root, &key)?;
        let dest = dest_dir.join(target_file);
        self.debug(format!("destination file {}", dest.display()));

        fs::copy(source_file, &dest).map_err(|e| {
            ToolCacheError::io(
                format!("copying {} to {}", source_file.display(), dest.display()),
                e,
            )
        })?;
        self.complete_entry(root, &key)?;

        info!("Cached {} at {}", key, dest_dir.display());
        Ok(dest_dir)
    }

    /// Remove any previous payload and marker, then create an empty entry
    fn create_entry(&self, root: &Path, key: &ToolKey) -> ToolCacheResult<PathBuf> {
        let entry = key.entry_path(root);
        let marker = key.marker_path(root);
        self.debug(format!("destination {}", entry.display()));

        if entry.is_dir() {
            fs::remove_dir_all(&entry)
                .map_err(|e| ToolCacheError::io(format!("removing {}", entry.display()), e))?;
        } else if entry.symlink_metadata().is_ok() {
            fs::remove_file(&entry)
                .map_err(|e| ToolCacheError::io(format!("removing {}", entry.display()), e))?;
        }

        if marker.symlink_metadata().is_ok() {
            fs::remove_file(&marker)
                .map_err(|e| ToolCacheError::io(format!("removing {}", marker.display()), e))?;
        }

        fs::create_dir_all(&entry)
            .map_err(|e| ToolCacheError::io(format!("creating {}", entry.display()), e))?;

        Ok(entry)
    }

    /// Publish the entry by creating its marker
    fn complete_entry(&self, root: &Path, key: &ToolKey) -> ToolCacheResult<()> {
        let marker = key.marker_path(root);
        fs::File::create(&marker)
            .map_err(|e| ToolCacheError::io(format!("creating {}", marker.display()), e))?;

        self.debug("finished caching tool");
        Ok(())
    }
}

/// Recursively copy the contents of `source` into `dest`
fn copy_tree(source: &Path, dest: &Path) -> ToolCacheResult<()> {
    let walker = WalkDir::new(source)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry.map_err(|e| ToolCacheError::Walk {
            path: source.to_path_buf(),
            source: e,
        })?;

        let Ok(rel_path) = entry.path().strip_prefix(source) else {
            continue;
        };
        let target = dest.join(rel_path);
        let file_type = entry.file_type();

        if file_type.is_dir() {
            fs::create_dir_all(&target)
                .map_err(|e| ToolCacheError::io(format!("creating {}", target.display()), e))?;
        } else if file_type.is_symlink() {
            copy_symlink(entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target).map_err(|e| {
                ToolCacheError::io(
                    format!("copying {} to {}", entry.path().display(), target.display()),
                    e,
                )
            })?;
        }
    }

    Ok(())
}

#[cfg(unix)]
fn copy_symlink(link: &Path, target: &Path) -> ToolCacheResult<()> {
    let points_to = fs::read_link(link)
        .map_err(|e| ToolCacheError::io(format!("reading link {}", link.display()), e))?;
    std::os::unix::fs::symlink(&points_to, target)
        .map_err(|e| ToolCacheError::io(format!("creating link {}", target.display()), e))
}

#[cfg(not(unix))]
fn copy_symlink(link: &Path, target: &Path) -> ToolCacheResult<()> {
    if link.is_dir() {
        fs::create_dir_all(target)
            .map_err(|e| ToolCacheError::io(format!("creating {}", target.display()), e))?;
        return copy_tree(link, target);
    }
    fs::copy(link, target)
        .map(|_| ())
        .map_err(|e| ToolCacheError::io(format!("copying {}", link.display()), e))
}
