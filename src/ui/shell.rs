use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::navigation::{resolve_title, Step};
use crate::ui::styles::{accent_span, secondary_span};

/// Top bar contents: a title and whether the back affordance is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopBar {
    pub title: &'static str,
    pub show_back: bool,
}

impl TopBar {
    pub fn for_step(step: Step) -> Self {
        Self {
            title: step.title(),
            show_back: step != Step::Start,
        }
    }

    /// Resolve from a raw route name; the terminal host renders through this. Unknown routes
    /// show the Start title but, not being Start, keep the back button.
    pub fn for_route(route: Option<&str>) -> Self {
        Self {
            title: resolve_title(route),
            show_back: route != Some(Step::Start.route()),
        }
    }
}

pub fn render_top_bar(f: &mut Frame, area: Rect, bar: TopBar) {
    let mut spans = Vec::with_capacity(3);
    if bar.show_back {
        spans.push(Span::from("← "));
    }
    spans.push(accent_span(bar.title));
    if bar.show_back {
        spans.push(secondary_span("   (Backspace to go back)"));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Lunch Tray"));
    f.render_widget(paragraph, area);
}
