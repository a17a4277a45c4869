use std::borrow::Cow;

use ratatui::prelude::Stylize;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Accent color used for titles, highlights, and totals.
pub const ACCENT: Color = Color::Indexed(208);

/// Bold accent span for screen titles and headline figures.
pub fn accent_span<'a>(text: impl Into<Cow<'a, str>>) -> Span<'a> {
    Span::from(text.into().into_owned()).bold().fg(ACCENT)
}

/// Dimmed line for hints and key help.
pub fn secondary_line<'a>(text: impl Into<Cow<'a, str>>) -> Line<'a> {
    Line::from(text.into().into_owned().dim())
}

/// Dimmed span for item descriptions.
pub fn secondary_span<'a>(text: impl Into<Cow<'a, str>>) -> Span<'a> {
    Span::from(text.into().into_owned()).dim()
}

/// Style for the highlighted row of a list.
pub fn selection_style() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Radio marker for a menu row.
pub fn radio_span(checked: bool) -> Span<'static> {
    if checked {
        Span::from("(•) ").fg(ACCENT)
    } else {
        Span::from("( ) ")
    }
}
