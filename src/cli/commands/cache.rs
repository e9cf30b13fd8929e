//! cache-dir and cache-file commands - commit a tool into the cache

use crate::cache::ToolCache;
use crate::cli::args::{CacheDirArgs, CacheFileArgs};
use crate::error::ToolCacheResult;
use tracing::debug;

/// Execute the cache-dir command
pub fn cache_dir(args: CacheDirArgs, cache: &ToolCache) -> ToolCacheResult<()> {
    debug!(
        "cache-dir {} {} from {}",
        args.tool,
        args.version,
        args.source.display()
    );
    let entry = cache.cache_dir(&args.source, &args.tool, &args.version, None)?;
    println!("{}", entry.display());
    Ok(())
}

/// Execute the cache-file command
pub fn cache_file(args: CacheFileArgs, cache: &ToolCache) -> ToolCacheResult<()> {
    debug!(
        "cache-file {} {} from {} as {}",
        args.tool,
        args.version,
        args.source.display(),
        args.target
    );
    let entry = cache.cache_file(
        &args.source,
        &args.target,
        &args.tool,
        &args.version,
        None,
    )?;
    println!("{}", entry.display());
    Ok(())
}
