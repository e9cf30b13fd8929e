//! CLI command implementations

pub mod cache;
pub mod config;
pub mod find;
pub mod list;
pub mod prune;
pub mod versions;

pub use cache::{cache_dir, cache_file};
pub use config::execute as config;
pub use find::execute as find;
pub use list::execute as list;
pub use prune::execute as prune;
pub use versions::execute as versions;
