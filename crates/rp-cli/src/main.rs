//! recipe-page - recipe rating and comment client
//!
//! Drives a recipe page's star rating and threaded comments from the
//! terminal, posting to the same endpoints as the page's own scripts.
//!
//! ## Quick Start
//!
//! ```bash
//! # Write a default configuration
//! recipe-page config init
//!
//! # Browse a page interactively
//! recipe-page view --page pasta.json
//!
//! # Post a reply
//! recipe-page comment --page pasta.json --reply-to 42 --text "Thanks!"
//! ```

mod commands;

fn main() {
    if let Err(err) = commands::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
