//! Theme system

use ratatui::prelude::*;

/// Application theme
#[derive(Debug, Clone)]
pub struct Theme {
    /// Border color for focused elements
    pub focus_border: Color,
    /// Border color for unfocused elements
    pub unfocus_border: Color,
    /// Title bar background
    pub title_bg: Color,
    /// Committed star
    pub star_selected: Color,
    /// Hovered star
    pub star_hovered: Color,
    /// Other stars
    pub star_idle: Color,
    /// Comment author
    pub author: Color,
    /// Placeholder text
    pub placeholder: Color,
    /// Alerts and failures
    pub error: Color,
    /// Status bar background
    pub status_bg: Color,
}

impl Theme {
    /// Theme by config name; unknown names get the default
    pub fn named(name: &str) -> Self {
        match name {
            "plain" => Self::plain(),
            "default" => Self::default(),
            other => {
                tracing::warn!("Unknown theme '{}', using default", other);
                Self::default()
            }
        }
    }

    /// Monochrome theme for terminals without color
    pub fn plain() -> Self {
        Self {
            focus_border: Color::White,
            unfocus_border: Color::Gray,
            title_bg: Color::Reset,
            star_selected: Color::White,
            star_hovered: Color::Gray,
            star_idle: Color::DarkGray,
            author: Color::White,
            placeholder: Color::DarkGray,
            error: Color::White,
            status_bg: Color::Reset,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            focus_border: Color::Cyan,
            unfocus_border: Color::DarkGray,
            title_bg: Color::Blue,
            star_selected: Color::Yellow,
            star_hovered: Color::LightYellow,
            star_idle: Color::DarkGray,
            author: Color::Cyan,
            placeholder: Color::DarkGray,
            error: Color::Red,
            status_bg: Color::DarkGray,
        }
    }
}
