//! rp-ui - Terminal page for recipe-page
//!
//! Renders a recipe page in the terminal and drives it with the keyboard.
//!
//! # Overview
//!
//! The terminal page provides:
//! - Star rating row with hover preview and live echo
//! - Threaded comment list with a cursor
//! - Comment composer with reply targeting
//! - Sign-in prompt for guests and a help overlay
//!
//! Keys are turned into page events and routed through the same
//! `EventRouter` as any other input. Submissions run on a tokio runtime and
//! report back over a channel, so the page stays responsive while a request
//! is in flight.
//!
//! # Example
//!
//! ```ignore
//! use rp_ui::App;
//!
//! let mut app = App::new(controller, ports, runtime.handle().clone(), &config.ui)?;
//! app.run()?;
//! ```

pub mod app;
pub mod components;
pub mod events;
pub mod input;
pub mod layout;
pub mod theme;

pub use app::{App, AppMode, AppState, PageView};
pub use theme::Theme;
