//! Find command - resolve a version or range to a cached entry

use crate::cache::ToolCache;
use crate::cli::args::FindArgs;
use crate::error::ToolCacheResult;
use console::style;
use std::process::ExitCode;

/// Execute the find command
///
/// A miss is reported on stderr with a failing exit code.
pub fn execute(args: FindArgs, cache: &ToolCache) -> ToolCacheResult<ExitCode> {
    match cache.find(&args.tool, &args.spec, None)? {
        Some(path) => {
            println!("{}", path.display());
            Ok(ExitCode::SUCCESS)
        }
        None => {
            eprintln!(
                "{} {} {} not found in cache ({})",
                style("Miss:").yellow(),
                args.tool,
                args.spec,
                cache.settings().arch
            );
            Ok(ExitCode::FAILURE)
        }
    }
}
