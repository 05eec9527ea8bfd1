//! The page: snapshot of its initial structure and the controller that
//! wires both widgets to incoming events.

pub mod snapshot;
pub mod controller;

pub use snapshot::{PageSnapshot, RatingWidget, RecipeInfo};
pub use controller::{PageAction, PageController, PageEffect, PageNotice, PagePorts};
