//! Layout management

use ratatui::prelude::*;

/// Areas of the page screen
#[derive(Debug, Clone, Copy)]
pub struct PageLayout {
    pub title: Rect,
    pub rating: Rect,
    pub comments: Rect,
    pub composer: Rect,
    pub status: Rect,
}

impl PageLayout {
    /// Split `area`; the rating row is dropped when the page has none
    pub fn split(area: Rect, has_rating: bool, has_composer: bool) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(if has_rating { 3 } else { 0 }),
                Constraint::Min(3),
                Constraint::Length(if has_composer { 3 } else { 0 }),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            title: chunks[0],
            rating: chunks[1],
            comments: chunks[2],
            composer: chunks[3],
            status: chunks[4],
        }
    }
}

/// Rectangle centered in `r`, sized in percent
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup[1])[1]
}
