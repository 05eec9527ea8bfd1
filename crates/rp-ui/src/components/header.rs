//! Title bar

use crate::theme::Theme;
use ratatui::{prelude::*, widgets::*};
use rp_core::page::RecipeInfo;

pub fn render_header(frame: &mut Frame, area: Rect, recipe: &RecipeInfo, theme: &Theme) {
    let title = format!(" {} [{}]", recipe.display_title(), recipe.slug);
    frame.render_widget(
        Paragraph::new(title).style(
            Style::default()
                .bg(theme.title_bg)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        area,
    );
}
