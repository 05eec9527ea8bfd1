//! Comment composer box

use crate::theme::Theme;
use ratatui::{prelude::*, widgets::*};
use rp_core::composer::CommentComposer;

/// Terminal columns taken by the first `chars` characters of `text`
pub fn display_width(text: &str, chars: usize) -> usize {
    text.chars()
        .take(chars)
        .map(|c| if c.is_ascii() { 1 } else { 2 })
        .sum()
}

pub fn render_composer(
    frame: &mut Frame,
    area: Rect,
    composer: &CommentComposer,
    editing: bool,
    cursor: usize,
    theme: &Theme,
) {
    let title = match (composer.reply_target(), composer.is_in_flight()) {
        (_, true) => "Posting...".to_string(),
        (Some(target), false) => format!("Reply to @{} (Enter to post, Esc to leave)", target.author),
        (None, false) if editing => "Comment (Enter to post, Esc to leave)".to_string(),
        (None, false) => "Comment (i to write)".to_string(),
    };
    let border = if editing {
        theme.focus_border
    } else {
        theme.unfocus_border
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let content = if composer.text().is_empty() {
        Paragraph::new(composer.placeholder()).style(
            Style::default()
                .fg(theme.placeholder)
                .add_modifier(Modifier::ITALIC),
        )
    } else {
        Paragraph::new(composer.text())
    };
    frame.render_widget(content, inner);

    if editing && inner.width > 0 {
        let width = display_width(composer.text(), cursor) as u16;
        let cursor_x = inner
            .x
            .saturating_add(width)
            .min(inner.x + inner.width.saturating_sub(1));
        frame.set_cursor_position((cursor_x, inner.y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_width() {
        assert_eq!(display_width("abc", 2), 2);
        assert_eq!(display_width("日本", 2), 4);
        assert_eq!(display_width("ab", 10), 2);
    }
}
