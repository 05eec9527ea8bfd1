//! Threaded comment list

use crate::theme::Theme;
use ratatui::{prelude::*, widgets::*};
use rp_core::comment::CommentTree;

/// First row to draw so that `cursor` stays inside `height` rows
pub fn scroll_offset(cursor: usize, height: usize) -> usize {
    if height == 0 {
        return cursor;
    }
    cursor.saturating_sub(height - 1)
}

pub fn render_comments(
    frame: &mut Frame,
    area: Rect,
    tree: &CommentTree,
    cursor: usize,
    theme: &Theme,
) {
    let block = Block::default()
        .title(format!("Comments ({})", tree.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.unfocus_border));

    if tree.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "No comments yet",
                Style::default()
                    .fg(theme.placeholder)
                    .add_modifier(Modifier::ITALIC),
            ))
            .block(block),
            area,
        );
        return;
    }

    let lines: Vec<Line> = tree
        .walk()
        .into_iter()
        .enumerate()
        .map(|(row, (depth, node))| {
            let marker = if depth > 0 { "↳ " } else { "" };
            let author = node
                .author
                .as_ref()
                .map(|a| a.to_string())
                .unwrap_or_else(|| "anonymous".to_string());
            let mut spans = vec![
                Span::raw("  ".repeat(depth)),
                Span::raw(marker),
                Span::styled(
                    author,
                    Style::default()
                        .fg(theme.author)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(": "),
                Span::raw(node.text()),
            ];
            if node.is_inserted() {
                spans.push(Span::styled(" (new)", Style::default().fg(theme.placeholder)));
            }
            let line = Line::from(spans);
            if row == cursor {
                line.style(Style::default().bg(Color::DarkGray))
            } else {
                line
            }
        })
        .collect();

    let inner_height = area.height.saturating_sub(2) as usize;
    let offset = scroll_offset(cursor, inner_height);
    frame.render_widget(
        Paragraph::new(lines).block(block).scroll((offset as u16, 0)),
        area,
    );
}
