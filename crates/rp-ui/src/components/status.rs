//! Status bar

use crate::app::{AppMode, AppState};
use crate::theme::Theme;
use ratatui::{prelude::*, widgets::*};
use rp_core::page::PageController;

pub fn render_status(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    page: &PageController,
    theme: &Theme,
) {
    let mode = match state.mode {
        AppMode::Normal => "NORMAL",
        AppMode::Insert => "INSERT",
        AppMode::Help => "HELP",
    };

    let text = state.message.clone().unwrap_or_else(|| {
        let rating = page
            .rating()
            .map(|r| format!(" | rating {}", r.echo()))
            .unwrap_or_default();
        format!(
            " {} | {} comments{} | ? help ",
            mode,
            page.tree().len(),
            rating
        )
    });

    frame.render_widget(
        Paragraph::new(text).style(Style::default().bg(theme.status_bg).fg(Color::White)),
        area,
    );
}
