//! Config command - inspect and create settings files.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use console::style;
use serde_json::Value;

use unitscout_core::Settings;

use crate::settings::{self, LOCAL_SETTINGS};

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Show effective settings
    Show,

    /// Write a settings file with default values
    Init(InitArgs),

    /// Get a specific settings value
    Get {
        /// Settings key (e.g., "scraper.timeout")
        key: String,
    },

    /// Show which settings file is used
    Path,
}

#[derive(Args)]
struct InitArgs {
    /// Output path for the settings file
    #[arg(short, long, default_value = LOCAL_SETTINGS)]
    output: PathBuf,

    /// Overwrite existing file
    #[arg(long)]
    force: bool,
}

pub fn run(args: ConfigArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(config_path),
        ConfigCommand::Init(init_args) => init_config(init_args),
        ConfigCommand::Get { key } => get_config(config_path, &key),
        ConfigCommand::Path => show_path(config_path),
    }
}

fn show_config(config_path: Option<&Path>) -> anyhow::Result<()> {
    let settings = settings::load(config_path)?;
    println!("{}", serde_json::to_string_pretty(&settings)?);
    Ok(())
}

fn init_config(args: InitArgs) -> anyhow::Result<()> {
    if args.output.exists() && !args.force {
        anyhow::bail!(
            "Settings file already exists at {}. Use --force to overwrite.",
            args.output.display()
        );
    }

    if let Some(parent) = args.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    Settings::default().save(&args.output)?;

    println!(
        "{} Created settings file at {}",
        style("✓").green(),
        args.output.display()
    );

    Ok(())
}

fn get_config(config_path: Option<&Path>, key: &str) -> anyhow::Result<()> {
    let settings = settings::load(config_path)?;
    let json = serde_json::to_value(&settings)?;

    let value = lookup(&json, key)
        .ok_or_else(|| anyhow::anyhow!("Settings key not found: {}", key))?;

    println!("{}", serde_json::to_string_pretty(value)?);

    Ok(())
}

fn show_path(config_path: Option<&Path>) -> anyhow::Result<()> {
    match settings::discover(config_path) {
        Some(path) if path.exists() => println!("{}", path.display()),
        Some(path) => println!("{} {}", path.display(), style("(missing)").red()),
        None => {
            println!("{} No settings file found, defaults apply.", style("ℹ").blue());
            println!("  Local: {}", LOCAL_SETTINGS);
            if let Some(user) = settings::user_settings_path() {
                println!("  User:  {}", user.display());
            }
        }
    }

    Ok(())
}

/// Follow a dotted key path through nested objects.
fn lookup<'a>(json: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(json, |current, part| current.get(part))
}
