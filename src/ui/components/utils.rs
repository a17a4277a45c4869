use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Regions of every screen: top bar, body, status line, key help.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub top_bar: Rect,
    pub body: Rect,
    pub status: Rect,
    pub help: Rect,
}

pub fn screen_layout(area: Rect) -> ScreenLayout {
    let chunks = split_vertical(
        area,
        &[
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ],
    );
    ScreenLayout {
        top_bar: chunks[0],
        body: chunks[1],
        status: chunks[2],
        help: chunks[3],
    }
}

pub fn split_vertical(area: Rect, constraints: &[Constraint]) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints.to_vec())
        .split(area)
        .to_vec()
}
