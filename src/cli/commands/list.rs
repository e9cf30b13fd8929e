//! List command - show cache entries and their state

use crate::cache::{CacheEntry, EntryState, ToolCache};
use crate::cli::args::{ListArgs, OutputFormat};
use crate::error::ToolCacheResult;
use console::style;

/// Execute the list command
pub fn execute(args: ListArgs, cache: &ToolCache) -> ToolCacheResult<()> {
    let entries: Vec<CacheEntry> = cache
        .entries()?
        .into_iter()
        .filter(|e| args.all || e.state.is_complete())
        .collect();

    if entries.is_empty() {
        match args.format {
            OutputFormat::Json => println!("[]"),
            OutputFormat::Plain => {}
            OutputFormat::Table => println!("No cached tools found."),
        }
        return Ok(());
    }

    match args.format {
        OutputFormat::Table => print_table(&entries),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
        OutputFormat::Plain => print_plain(&entries),
    }

    Ok(())
}

fn print_table(entries: &[CacheEntry]) {
    println!(
        "{:<20} {:<16} {:<10} {:<12}",
        style("TOOL").bold(),
        style("VERSION").bold(),
        style("ARCH").bold(),
        style("STATE").bold()
    );
    println!("{}", "-".repeat(61));

    for entry in entries {
        let state = match entry.state {
            EntryState::Complete => style("complete").green(),
            EntryState::Incomplete => style("incomplete").yellow(),
            EntryState::Miss => style("miss").dim(),
        };

        println!(
            "{:<20} {:<16} {:<10} {:<12}",
            entry.key.tool, entry.key.version, entry.key.arch, state
        );
    }

    println!();
    println!("Total: {} entry(s)", entries.len());
}

fn print_plain(entries: &[CacheEntry]) {
    for entry in entries {
        println!("{}", entry.path.display());
    }
}
