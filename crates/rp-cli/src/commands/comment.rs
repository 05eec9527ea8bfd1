//! Comment command
//!
//! Post one comment or reply through the page's composer.

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rp_core::composer::SubmitOutcome;
use rp_core::events::{EventTarget, PageEvent};
use rp_core::page::{PageController, PageNotice};
use rp_core::types::CommentId;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::config::load_config;
use super::page::{load_page, ports, print_tree, runtime};

/// Arguments for the comment command
#[derive(Debug, Args)]
pub struct CommentArgs {
    /// Page snapshot (JSON)
    #[arg(long, short)]
    pub page: PathBuf,

    /// Comment text
    #[arg(long, short)]
    pub text: String,

    /// Reply to the comment with this id
    #[arg(long, short)]
    pub reply_to: Option<String>,
}

/// Execute the comment command
pub fn execute(args: CommentArgs, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let mut page = load_page(&args.page, &config)?;
    let ports = ports(&page, &config)?;

    prepare(&mut page, args.reply_to, args.text)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner.set_message("Posting comment...");

    let notices = runtime()?.block_on(page.dispatch(&PageEvent::submit_comment(), &ports));
    spinner.finish_and_clear();

    for notice in notices.context("Comment could not be merged into the page")? {
        match notice {
            PageNotice::Comment(SubmitOutcome::Posted { id, .. }) => {
                println!("{} Comment posted as #{}", "✓".green(), id);
                println!();
                print_tree(page.tree());
            }
            PageNotice::Comment(SubmitOutcome::AuthPromptShown) => {
                bail!("You need to sign in to post comments");
            }
            PageNotice::Comment(outcome) => {
                bail!("{}", outcome.message().unwrap_or("Comment was not posted"));
            }
            _ => {}
        }
    }

    Ok(())
}

/// Set the reply target and text before submitting
fn prepare(page: &mut PageController, reply_to: Option<String>, text: String) -> Result<()> {
    if page.composer().is_none() {
        bail!("This page has no comment form");
    }

    if let Some(id) = reply_to {
        page.handle(&PageEvent::click(EventTarget::reply_toggle(
            CommentId::from_string(id.as_str()),
            None,
        )))
        .with_context(|| format!("Cannot reply to comment {}", id))?;
    }

    if let Some(composer) = page.composer_mut() {
        composer.set_text(text);
    }
    Ok(())
}
