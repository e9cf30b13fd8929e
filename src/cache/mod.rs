//! Local tool cache
//!
//! Stores downloaded tools under `(tool, version, arch)` keys and resolves
//! exact versions or version ranges back to installed directories.
//!
//! # Entry States
//!
//! | State | On disk | Returned by lookups |
//! |-------|---------|---------------------|
//! | Miss | no entry directory | no |
//! | Incomplete | directory, no marker | no |
//! | Complete | directory and `<arch>.complete` marker | yes |
//!
//! A write resets the entry, copies the payload, then creates the marker.
//! Writers to the same key are assumed to run one at a time; there is no
//! cross-process locking.

pub mod layout;
pub mod resolver;
pub mod sink;
pub mod store;
pub mod version;
mod writer;

pub use layout::{host_arch, EntryState, ToolKey};
pub use resolver::CacheEntry;
pub use sink::{DebugSink, NoopSink, TracingSink};
pub use store::{ToolCache, ToolCacheSettings};
pub use version::{clean_version, is_explicit_version, max_satisfying, VersionRange};
