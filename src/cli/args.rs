//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// toolcache - local cache of versioned CI tools
///
/// Stores downloaded tools under tool/version/arch keys and resolves exact
/// versions or version ranges back to their installed directories.
#[derive(Parser, Debug)]
#[command(name = "toolcache")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "TOOLCACHE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Cache root directory
    #[arg(long, global = true, env = "RUNNER_TOOL_CACHE")]
    pub root: Option<PathBuf>,

    /// Architecture to cache or resolve (defaults to the host)
    #[arg(long, global = true, env = "TOOLCACHE_ARCH")]
    pub arch: Option<String>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Cache an extracted tool directory
    CacheDir(CacheDirArgs),

    /// Cache a single downloaded file
    CacheFile(CacheFileArgs),

    /// Print the path of the best cached match for a version or range
    Find(FindArgs),

    /// List complete cached versions of a tool
    Versions(VersionsArgs),

    /// List every cache entry and its state
    List(ListArgs),

    /// Remove entries left incomplete by interrupted writes
    Prune(PruneArgs),

    /// Show or edit configuration
    Config(ConfigArgs),
}

/// Arguments for the cache-dir command
#[derive(Parser, Debug)]
pub struct CacheDirArgs {
    /// Directory holding the extracted tool
    pub source: PathBuf,

    /// Tool name
    pub tool: String,

    /// Tool version
    #[arg(id = "tool_version", value_name = "VERSION")]
    pub version: String,
}

/// Arguments for the cache-file command
#[derive(Parser, Debug)]
pub struct CacheFileArgs {
    /// Downloaded file
    pub source: PathBuf,

    /// File name inside the cache entry
    pub target: String,

    /// Tool name
    pub tool: String,

    /// Tool version
    #[arg(id = "tool_version", value_name = "VERSION")]
    pub version: String,
}

/// Arguments for the find command
#[derive(Parser, Debug)]
pub struct FindArgs {
    /// Tool name
    pub tool: String,

    /// Exact version or range (e.g. 1.x, ">=1.2 <2.0")
    pub spec: String,
}

/// Arguments for the versions command
#[derive(Parser, Debug)]
pub struct VersionsArgs {
    /// Tool name
    pub tool: String,

    /// Output format
    #[arg(short, long, default_value = "plain")]
    pub format: OutputFormat,
}

/// Arguments for the list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Include incomplete entries
    #[arg(short, long)]
    pub all: bool,

    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the prune command
#[derive(Parser, Debug)]
pub struct PruneArgs {
    /// Dry run - show what would be removed
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Subcommand for config
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },
}

/// Output format for listing commands
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON output
    Json,
    /// Simple text (one per line)
    Plain,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_cache_dir() {
        let cli = Cli::parse_from(["toolcache", "cache-dir", "./node", "node", "18.1.0"]);
        match cli.command {
            Commands::CacheDir(args) => {
                assert_eq!(args.source, PathBuf::from("./node"));
                assert_eq!(args.tool, "node");
                assert_eq!(args.version, "18.1.0");
            }
            _ => panic!("expected CacheDir command"),
        }
    }

    #[test]
    fn cli_parses_cache_file() {
        let cli = Cli::parse_from([
            "toolcache",
            "cache-file",
            "/tmp/dl",
            "foo",
            "foo",
            "1.1.0",
        ]);
        match cli.command {
            Commands::CacheFile(args) => {
                assert_eq!(args.target, "foo");
                assert_eq!(args.version, "1.1.0");
            }
            _ => panic!("expected CacheFile command"),
        }
    }

    #[test]
    fn cli_parses_find_with_global_arch() {
        let cli = Cli::parse_from([
            "toolcache",
            "find",
            "node",
            ">=1.2 <2.0",
            "--arch",
            "arm64",
        ]);
        assert_eq!(cli.arch.as_deref(), Some("arm64"));
        match cli.command {
            Commands::Find(args) => assert_eq!(args.spec, ">=1.2 <2.0"),
            _ => panic!("expected Find command"),
        }
    }

    #[test]
    fn cli_parses_root_flag() {
        let cli = Cli::parse_from(["toolcache", "--root", "/cache", "versions", "node"]);
        assert_eq!(cli.root, Some(PathBuf::from("/cache")));
        assert!(matches!(cli.command, Commands::Versions(_)));
    }

    #[test]
    fn cli_parses_prune() {
        let cli = Cli::parse_from(["toolcache", "prune", "--dry-run"]);
        match cli.command {
            Commands::Prune(args) => assert!(args.dry_run),
            _ => panic!("expected Prune command"),
        }
    }

    #[test]
    fn cli_verbose_levels() {
        let cli = Cli::parse_from(["toolcache", "list"]);
        assert_eq!(cli.verbose, 0);

        let cli = Cli::parse_from(["toolcache", "-v", "list"]);
        assert_eq!(cli.verbose, 1);

        let cli = Cli::parse_from(["toolcache", "-vv", "list"]);
        assert_eq!(cli.verbose, 2);
    }
}
