//! toolcache - local cache of versioned CI tools
//!
//! Commits downloaded tools into a directory tree keyed by tool name,
//! version and architecture, and resolves exact versions or version ranges
//! back to completed entries.
//!
//! ```rust,no_run
//! use std::path::Path;
//! use toolcache::{ToolCache, ToolCacheSettings};
//!
//! # fn main() -> toolcache::ToolCacheResult<()> {
//! let cache = ToolCache::new(ToolCacheSettings::new("/opt/hostedtoolcache"));
//!
//! cache.cache_dir(Path::new("/tmp/node-v18.1.0"), "node", "18.1.0", None)?;
//! let installed = cache.find("node", "18.x", None)?;
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod cli;
pub mod config;
pub mod error;

pub use cache::{ToolCache, ToolCacheSettings};
pub use error::{ToolCacheError, ToolCacheResult};
