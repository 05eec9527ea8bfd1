//! Rate command
//!
//! Select a star value and submit it.

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;
use rp_core::events::{ElementRole, EventTarget, PageEvent};
use rp_core::page::PageNotice;
use std::path::{Path, PathBuf};

use super::config::load_config;
use super::page::{load_page, ports, runtime};

/// Arguments for the rate command
#[derive(Debug, Args)]
pub struct RateArgs {
    /// Page snapshot (JSON)
    #[arg(long, short)]
    pub page: PathBuf,

    /// Rating value
    #[arg(long, allow_hyphen_values = true)]
    pub value: i8,
}

/// Execute the rate command
pub fn execute(args: RateArgs, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let mut page = load_page(&args.page, &config)?;
    if page.rating().is_none() {
        bail!("This page has no rating widget");
    }
    let ports = ports(&page, &config)?;

    page.handle(&PageEvent::click(EventTarget::star(args.value)))
        .context("Cannot select rating")?;
    let echo = page
        .rating()
        .map(|r| r.echo().to_string())
        .unwrap_or_default();
    println!("Selected rating {}", echo.bold());

    let submit = PageEvent::click(EventTarget::role(ElementRole::RatingSubmit));
    let notices = runtime()?.block_on(page.dispatch(&submit, &ports))?;

    for notice in notices {
        match notice {
            PageNotice::RatingSent(receipt) => {
                let message = receipt.message.unwrap_or_else(|| "Rating submitted".to_string());
                println!("{} {}", "✓".green(), message);
            }
            PageNotice::RatingFailed(reason) => {
                println!("{} Rating {} was not sent: {}", "⚠".yellow(), echo, reason);
            }
            PageNotice::Comment(_) => {}
        }
    }

    Ok(())
}
