//! Star row

use crate::theme::Theme;
use ratatui::{prelude::*, widgets::*};
use rp_core::rating::RatingSelector;

/// Draw one cell per star, then the echo
pub fn render_rating(frame: &mut Frame, area: Rect, selector: &RatingSelector, theme: &Theme) {
    let mut spans: Vec<Span> = Vec::with_capacity(selector.indicators().len() + 2);
    for indicator in selector.indicators() {
        let style = if indicator.hovered {
            Style::default()
                .fg(theme.star_hovered)
                .add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(theme.star_idle)
        };
        let style = if indicator.selected {
            style
                .fg(theme.star_selected)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            style
        };
        spans.push(Span::styled(format!(" {:>2} ", indicator.value.get()), style));
    }
    spans.push(Span::raw("   "));
    spans.push(Span::styled(
        selector.echo().to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    ));

    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .title("Rating (h/l, Enter, s)")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.unfocus_border)),
        ),
        area,
    );
}
