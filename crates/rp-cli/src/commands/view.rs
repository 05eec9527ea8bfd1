//! View command
//!
//! Open a recipe page in the terminal.

use anyhow::Result;
use clap::Args;
use std::path::{Path, PathBuf};

use super::config::load_config;
use super::page::{load_page, ports, runtime};

/// Arguments for the view command
#[derive(Debug, Args)]
pub struct ViewArgs {
    /// Page snapshot (JSON)
    #[arg(long, short)]
    pub page: PathBuf,
}

/// Execute the view command
pub fn execute(args: ViewArgs, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let page = load_page(&args.page, &config)?;
    let ports = ports(&page, &config)?;
    let runtime = runtime()?;

    tracing::info!("Opening page '{}'", page.recipe().slug);
    let mut app = rp_ui::App::new(page, ports, runtime.handle().clone(), &config.ui)?;
    app.run()
}
