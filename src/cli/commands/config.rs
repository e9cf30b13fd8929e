//! Config command - show or initialize configuration

use crate::cli::args::{ConfigAction, ConfigArgs};
use crate::config::{Config, ConfigManager};
use crate::error::ToolCacheResult;
use console::style;

/// Execute the config command
pub fn execute(
    args: ConfigArgs,
    manager: &ConfigManager,
    config: &Config,
) -> ToolCacheResult<()> {
    match args.action.unwrap_or(ConfigAction::Show) {
        ConfigAction::Show => {
            print!("{}", toml::to_string_pretty(config)?);
        }
        ConfigAction::Path => {
            println!("{}", manager.path().display());
        }
        ConfigAction::Init { force } => {
            if manager.path().exists() && !force {
                println!(
                    "{} {} already exists (use --force to overwrite)",
                    style("!").yellow(),
                    manager.path().display()
                );
                return Ok(());
            }

            manager.save(&Config::default())?;
            println!(
                "{} wrote {}",
                style("✓").green(),
                manager.path().display()
            );
        }
    }

    Ok(())
}
