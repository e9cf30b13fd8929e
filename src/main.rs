//! toolcache - local cache of versioned CI tools
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use std::process::ExitCode;
use toolcache::cli::{commands, Cli, Commands};
use toolcache::config::ConfigManager;
use toolcache::error::ToolCacheResult;
use toolcache::ToolCache;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> ToolCacheResult<ExitCode> {
    let cli = Cli::parse();

    let config_manager = match cli.config {
        Some(ref path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    };
    let config = config_manager.load()?;

    init_logging(cli.verbose, &config.general.log_format);
    debug!("Using config file {}", config_manager.path().display());

    let settings = config.settings(cli.root.clone(), cli.arch.clone());
    let cache = ToolCache::new(settings);

    let ok = |()| ExitCode::SUCCESS;
    match cli.command {
        Commands::CacheDir(args) => commands::cache_dir(args, &cache).map(ok),
        Commands::CacheFile(args) => commands::cache_file(args, &cache).map(ok),
        Commands::Find(args) => commands::find(args, &cache),
        Commands::Versions(args) => commands::versions(args, &cache).map(ok),
        Commands::List(args) => commands::list(args, &cache).map(ok),
        Commands::Prune(args) => commands::prune(args, &cache).map(ok),
        Commands::Config(args) => commands::config(args, &config_manager, &config).map(ok),
    }
}

/// Initialize logging: 0 = warn, 1 = info, 2+ = debug
fn init_logging(verbose: u8, log_format: &str) {
    let filter = match verbose {
        0 => EnvFilter::new("toolcache=warn"),
        1 => EnvFilter::new("toolcache=info"),
        _ => EnvFilter::new("toolcache=debug"),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if log_format == "json" {
        builder.json().init();
    } else {
        builder.without_time().init();
    }
}
