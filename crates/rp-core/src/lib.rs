//! rp-core - Core library for recipe-page
//!
//! This crate provides the page logic for a recipe detail page: the star
//! rating selector, the comment composer with reply threading, the comment
//! tree the composer merges server fragments into, and the event routing
//! that connects user input to both widgets.

pub mod error;
pub mod types;
pub mod config;
pub mod comment;
pub mod rating;
pub mod composer;
pub mod events;
pub mod page;

pub use error::{RecipePageError, Result};
pub use types::*;
