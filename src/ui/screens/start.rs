use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::ui::styles::{accent_span, secondary_line};

pub const HELP: &str = "Enter start order • q quit";

pub fn render(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(accent_span("Lunch Tray")),
        Line::from(""),
        Line::from(
            "Build a lunch in three quick steps: an entree, a side dish, and an accompaniment.",
        ),
        Line::from(""),
        Line::from(Span::from("[ Start Order ]").reversed()),
        Line::from(""),
        secondary_line("Press Enter to begin."),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}
