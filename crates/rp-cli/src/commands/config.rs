//! Config command
//!
//! Manage recipe-page configuration.

use anyhow::{bail, Context, Result};
use clap::Subcommand;
use colored::Colorize;
use rp_core::config::Config;
use std::fs;
use std::path::{Path, PathBuf};

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Show as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write the default configuration
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Reset to default configuration
    Reset {
        /// Force reset without confirmation
        #[arg(long)]
        force: bool,
    },

    /// Print the configuration file path
    Path,

    /// Validate configuration
    Validate,
}

/// Execute the config command
pub fn execute(cmd: ConfigCommand, config_override: Option<&Path>) -> Result<()> {
    let path = config_path(config_override);
    match cmd {
        ConfigCommand::Show { json } => show_config(&path, json),
        ConfigCommand::Init { force } => init_config(&path, force),
        ConfigCommand::Reset { force } => reset_config(&path, force),
        ConfigCommand::Path => {
            println!("{}", path.display());
            Ok(())
        }
        ConfigCommand::Validate => validate_config(&path),
    }
}

/// Configuration file in use: the override, or the platform config dir
pub fn config_path(config_override: Option<&Path>) -> PathBuf {
    if let Some(path) = config_override {
        return path.to_path_buf();
    }
    directories::ProjectDirs::from("com", "recipe-page", "recipe-page")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .unwrap_or_else(|| PathBuf::from(".recipe-page/config.toml"))
}

/// Load the configuration in use, falling back to defaults
pub fn load_config(config_override: Option<&Path>) -> Result<Config> {
    let path = config_path(config_override);
    Config::load_or_default(&path)
        .with_context(|| format!("Invalid configuration at {}", path.display()))
}

fn show_config(path: &Path, as_json: bool) -> Result<()> {
    let config = Config::load_or_default(path)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        println!("{}", "Configuration:".bold().underline());
        if path.exists() {
            println!("{}", path.display().to_string().dimmed());
        } else {
            println!("{}", "(defaults, no file)".dimmed());
        }
        println!();
        println!("{}", config.to_toml_string()?);
    }

    Ok(())
}

fn write_default(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let content = format!(
        "# recipe-page configuration\n\n{}",
        Config::default().to_toml_string()?
    );
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Configuration already exists at {} (use --force to overwrite)",
            path.display()
        );
    }
    write_default(path)?;
    println!("{} Wrote {}", "✓".green(), path.display());
    Ok(())
}

fn reset_config(path: &Path, force: bool) -> Result<()> {
    if !force {
        use dialoguer::Confirm;

        let confirmed = Confirm::new()
            .with_prompt("Reset configuration to defaults?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("Reset cancelled.");
            return Ok(());
        }
    }

    // Backup existing
    if path.exists() {
        let backup_path = format!(
            "{}.backup-{}",
            path.display(),
            chrono::Local::now().format("%Y%m%d-%H%M%S")
        );
        fs::copy(path, &backup_path)?;
        println!("{} Backed up to {}", "✓".green(), backup_path);
    }

    write_default(path)?;
    println!("{} Configuration reset to defaults.", "✓".green());
    Ok(())
}

fn validate_config(path: &Path) -> Result<()> {
    if !path.exists() {
        println!(
            "{} No configuration at {}, defaults apply",
            "⚠".yellow(),
            path.display()
        );
        return Ok(());
    }

    let config = Config::load(path)?;
    println!("{} Configuration is valid", "✓".green());
    println!(
        "  rating {}..={}, comments via {}, site {}",
        config.rating.min, config.rating.max, config.comments.addressing, config.site.base_url
    );
    Ok(())
}
