//! CLI commands module
//!
//! This module contains all CLI command implementations.

pub mod comment;
pub mod config;
pub mod page;
pub mod rate;
pub mod view;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// recipe-page - rate recipes and join the comment threads
#[derive(Debug, Parser)]
#[command(name = "recipe-page")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "RECIPE_PAGE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open a recipe page in the terminal
    View(view::ViewArgs),

    /// Post a comment or a reply
    Comment(comment::CommentArgs),

    /// Select and submit a rating
    Rate(rate::RateArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(config::ConfigCommand),
}

/// Run the CLI application
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // The terminal page owns the screen; only log there when asked to
    let interactive = matches!(cli.command, Commands::View(_));
    setup_logging(cli.verbose, interactive);

    if cli.no_color {
        colored::control::set_override(false);
    }

    let config_path = cli.config;
    match cli.command {
        Commands::View(args) => view::execute(args, config_path.as_deref()),
        Commands::Comment(args) => comment::execute(args, config_path.as_deref()),
        Commands::Rate(args) => rate::execute(args, config_path.as_deref()),
        Commands::Config(cmd) => config::execute(cmd, config_path.as_deref()),
    }
}

fn setup_logging(verbosity: u8, interactive: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbosity {
        0 if interactive => EnvFilter::new("off"),
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_help_text() {
        let cmd = Cli::command();
        assert!(cmd.get_about().is_some());
    }

    #[test]
    fn test_negative_rating_value() {
        let cli = Cli::try_parse_from(["recipe-page", "rate", "--page", "p.json", "--value", "-3"])
            .unwrap();
        match cli.command {
            Commands::Rate(args) => assert_eq!(args.value, -3),
            other => panic!("unexpected command {:?}", other),
        }
    }
}
