//! Application state and main loop

mod state;

pub use state::{App, AppMode, AppState, PageView};
