//! Render functions for the parts of the page

pub mod comments;
pub mod composer;
pub mod header;
pub mod overlay;
pub mod rating;
pub mod status;
