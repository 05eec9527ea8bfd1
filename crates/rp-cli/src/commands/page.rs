//! Shared page setup for the commands that talk to the site

use anyhow::{Context, Result};
use colored::Colorize;
use rp_client::{HttpCommentTransport, HttpRatingSubmitter, HttpSite};
use rp_core::comment::CommentTree;
use rp_core::config::{Config, RatingSubmitMode};
use rp_core::page::{PageController, PagePorts, PageSnapshot};
use rp_core::rating::PendingRatingSubmitter;
use std::path::Path;
use std::sync::Arc;

/// Hidden field Django pages carry for CSRF protection
const CSRF_FIELD: &str = "csrfmiddlewaretoken";

/// Load a snapshot file and activate its widgets
pub fn load_page(path: &Path, config: &Config) -> Result<PageController> {
    let snapshot = PageSnapshot::load(path)
        .with_context(|| format!("Failed to load page {}", path.display()))?;
    PageController::bootstrap(snapshot, config).context("Failed to set up page")
}

/// Transports for `page` as configured
pub fn ports(page: &PageController, config: &Config) -> Result<PagePorts> {
    let site = HttpSite::from_config(config).context("Invalid site configuration")?;
    let comments = Arc::new(HttpCommentTransport::new(site.clone()));

    let rating: Arc<dyn rp_core::rating::RatingSubmitter> =
        match (config.rating.submit, page.rating_endpoint()) {
            (RatingSubmitMode::Http, Some(endpoint)) => {
                let mut submitter =
                    HttpRatingSubmitter::new(site, endpoint, config.rating.field.clone());
                let token = page
                    .composer()
                    .and_then(|c| c.form().fields.get(CSRF_FIELD));
                if let Some(token) = token {
                    submitter = submitter.with_field(CSRF_FIELD, token.clone());
                }
                Arc::new(submitter)
            }
            _ => Arc::new(PendingRatingSubmitter),
        };

    Ok(PagePorts { comments, rating })
}

/// Print the comment tree with indentation
pub fn print_tree(tree: &CommentTree) {
    if tree.is_empty() {
        println!("{}", "No comments yet".dimmed());
        return;
    }
    for (depth, node) in tree.walk() {
        let author = node
            .author
            .as_ref()
            .map(|a| a.to_string())
            .unwrap_or_else(|| "anonymous".to_string());
        let marker = if depth > 0 { "↳ " } else { "" };
        println!(
            "{}{}{} {} {}",
            "  ".repeat(depth),
            marker,
            author.cyan().bold(),
            format!("#{}", node.id).dimmed(),
            node.text()
        );
    }
}

/// Runtime for one-shot commands
pub fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Runtime::new().context("Failed to start async runtime")
}
