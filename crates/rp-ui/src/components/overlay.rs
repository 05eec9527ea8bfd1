//! Popups drawn over the page

use crate::layout::centered_rect;
use crate::theme::Theme;
use ratatui::{prelude::*, widgets::*};

/// Sign-in prompt shown to guests
pub fn render_sign_in(frame: &mut Frame, area: Rect, theme: &Theme) {
    let text = vec![
        Line::from(Span::styled(
            "Sign in required",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("You need to sign in to post comments."),
        Line::from(""),
        Line::from(Span::styled(
            "Esc to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    render_popup(frame, area, "Sign in", text, theme.focus_border);
}

/// Failure message
pub fn render_alert(frame: &mut Frame, area: Rect, message: &str, theme: &Theme) {
    let text = vec![
        Line::from(message.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    render_popup(frame, area, "Error", text, theme.error);
}

pub fn render_help(frame: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(Span::styled(
            "recipe-page",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("Rating", Style::default().fg(Color::Yellow))),
        Line::from("  h/l, ←/→    Preview previous/next star"),
        Line::from("  Enter       Select the previewed star"),
        Line::from("  s           Submit rating"),
        Line::from(""),
        Line::from(Span::styled("Comments", Style::default().fg(Color::Yellow))),
        Line::from("  j/k         Move between comments"),
        Line::from("  r           Reply to highlighted comment"),
        Line::from("  i/c         Write a comment"),
        Line::from("  Enter       Post (while writing)"),
        Line::from("  Esc         Stop writing, then drop the reply"),
        Line::from(""),
        Line::from(Span::styled("Other", Style::default().fg(Color::Yellow))),
        Line::from("  q           Quit"),
        Line::from("  ?           Show this help"),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let help_area = centered_rect(50, 70, area);
    frame.render_widget(Clear, help_area);
    frame.render_widget(
        Paragraph::new(text).block(
            Block::default()
                .title("Help")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        ),
        help_area,
    );
}

fn render_popup(frame: &mut Frame, area: Rect, title: &str, text: Vec<Line>, border: Color) {
    let popup = centered_rect(60, 30, area);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(text).wrap(Wrap { trim: true }).block(
            Block::default()
                .title(title.to_string())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        ),
        popup,
    );
}
