use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use rust_decimal::Decimal;
use unicode_width::UnicodeWidthStr;

use crate::catalog::{Category, MenuItem};
use crate::ui::components::utils::split_vertical;
use crate::ui::styles::{radio_span, secondary_span, selection_style};
use crate::utils::{format_price, pad_to_width};

pub const HELP: &str =
    "↑/↓ or j/k move • Space select • Enter next • Esc cancel • Backspace back • q quit";

/// Highlighted row on a menu screen. Moving the highlight does not select anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuCursor {
    index: usize,
}

impl MenuCursor {
    /// Start on the currently selected item so returning to a menu keeps its place.
    pub fn for_options(options: &[MenuItem], selected: Option<&MenuItem>) -> Self {
        let index = selected
            .and_then(|item| options.iter().position(|option| option == item))
            .unwrap_or(0);
        Self { index }
    }

    pub fn index(self) -> usize {
        self.index
    }

    pub fn up(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.index = if self.index == 0 {
            len - 1
        } else {
            self.index - 1
        };
    }

    pub fn down(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.index = (self.index + 1) % len;
    }

    pub fn current<'a>(&self, options: &'a [MenuItem]) -> Option<&'a MenuItem> {
        options.get(self.index)
    }
}

pub struct MenuScreen<'a> {
    pub category: Category,
    pub options: &'a [MenuItem],
    pub selected: Option<&'a MenuItem>,
    pub cursor: MenuCursor,
    pub subtotal: Decimal,
    pub currency: &'a str,
}

pub fn render(f: &mut Frame, area: Rect, screen: &MenuScreen<'_>) {
    let chunks = split_vertical(area, &[Constraint::Min(3), Constraint::Length(1)]);

    let name_width = screen
        .options
        .iter()
        .map(|item| UnicodeWidthStr::width(item.name.as_str()))
        .max()
        .unwrap_or(0);

    let items: Vec<ListItem> = screen
        .options
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let checked = screen.selected == Some(item);
            let lines = vec![
                Line::from(vec![
                    radio_span(checked),
                    Span::from(pad_to_width(&item.name, name_width)).bold(),
                    "  ".into(),
                    Span::from(format_price(item.price, screen.currency)),
                ]),
                Line::from(vec![
                    "    ".into(),
                    secondary_span(item.description.as_str()),
                ]),
            ];
            let row = ListItem::new(lines);
            if idx == screen.cursor.index() {
                row.style(selection_style())
            } else {
                row
            }
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(format!(
        "Choose your {}",
        screen.category.label().to_lowercase()
    )));
    f.render_widget(list, chunks[0]);

    let subtotal = Paragraph::new(Line::from(format!(
        "Subtotal: {}",
        format_price(screen.subtotal, screen.currency)
    )))
    .alignment(Alignment::Right);
    f.render_widget(subtotal, chunks[1]);
}
