//! Prune command - remove entries left behind by interrupted writes

use crate::cache::ToolCache;
use crate::cli::args::PruneArgs;
use crate::error::ToolCacheResult;
use console::style;

/// Execute the prune command
pub fn execute(args: PruneArgs, cache: &ToolCache) -> ToolCacheResult<()> {
    let pruned = cache.prune_incomplete(args.dry_run)?;

    if pruned.is_empty() {
        println!("No incomplete entries.");
        return Ok(());
    }

    for entry in &pruned {
        println!("  {} {}", style("•").red(), entry.path.display());
    }
    println!();

    if args.dry_run {
        println!("Dry run - {} incomplete entry(s) would be removed.", pruned.len());
    } else {
        println!(
            "{} removed {} incomplete entry(s)",
            style("✓").green(),
            pruned.len()
        );
    }

    Ok(())
}
