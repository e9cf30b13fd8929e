//! Versions command - list complete cached versions of a tool

use crate::cache::ToolCache;
use crate::cli::args::{OutputFormat, VersionsArgs};
use crate::error::ToolCacheResult;
use console::style;

/// Execute the versions command
pub fn execute(args: VersionsArgs, cache: &ToolCache) -> ToolCacheResult<()> {
    let versions = cache.find_all_versions(&args.tool, None)?;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&versions)?),
        OutputFormat::Plain => {
            for version in &versions {
                println!("{}", version);
            }
        }
        OutputFormat::Table => {
            if versions.is_empty() {
                println!("No cached versions of {}.", args.tool);
                return Ok(());
            }

            println!(
                "{:<20} {:<10}",
                style("VERSION").bold(),
                style("ARCH").bold()
            );
            println!("{}", "-".repeat(31));
            for version in &versions {
                println!("{:<20} {:<10}", version, cache.settings().arch);
            }
            println!();
            println!("{} version(s)", versions.len());
        }
    }

    Ok(())
}
