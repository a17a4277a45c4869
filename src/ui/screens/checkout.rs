use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use rust_decimal::Decimal;

use crate::app::state::{Order, OrderTotals};
use crate::catalog::Category;
use crate::ui::styles::{accent_span, secondary_span};
use crate::utils::{format_price, pad_to_width};

pub const HELP: &str = "Enter submit • Esc cancel • Backspace back • q quit";

const LABEL_WIDTH: usize = 26;

/// Order summary: one line per category, then subtotal, tax, and total.
pub fn summary_lines(
    order: &Order,
    totals: OrderTotals,
    tax_rate: Decimal,
    currency: &str,
) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(accent_span("Order Summary")), Line::from("")];

    for category in Category::ALL {
        let line = match order.selection(category) {
            Some(item) => amount_line(&item.name, format_price(item.price, currency)),
            None => Line::from(vec![
                secondary_span(pad_to_width(
                    &format!("No {}", category.label().to_lowercase()),
                    LABEL_WIDTH,
                )),
                secondary_span("-"),
            ]),
        };
        lines.push(line);
    }

    lines.push(Line::from(""));
    lines.push(amount_line(
        "Subtotal:",
        format_price(totals.subtotal, currency),
    ));
    let tax_label = format!("Tax ({}%):", (tax_rate * Decimal::ONE_HUNDRED).normalize());
    lines.push(amount_line(&tax_label, format_price(totals.tax, currency)));
    lines.push(Line::from(vec![
        Span::from(pad_to_width("Total:", LABEL_WIDTH)).bold(),
        accent_span(format_price(totals.total, currency)),
    ]));
    lines
}

fn amount_line(label: &str, amount: String) -> Line<'static> {
    Line::from(vec![
        Span::from(pad_to_width(label, LABEL_WIDTH)),
        Span::from(amount),
    ])
}

pub fn render(
    f: &mut Frame,
    area: Rect,
    order: &Order,
    totals: OrderTotals,
    tax_rate: Decimal,
    currency: &str,
) {
    let mut lines = summary_lines(order, totals, tax_rate, currency);
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::from("[ Submit ]").reversed(),
        "   ".into(),
        Span::from("[ Cancel ]"),
    ]));

    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MenuCatalog;
    use crate::config::DEFAULT_TAX_RATE;

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn summary_lists_selections_and_totals() {
        let catalog = MenuCatalog::builtin();
        let mut order = Order::new();
        order.select(catalog.items(Category::Entree)[0].clone());
        order.select(catalog.items(Category::Accompaniment)[1].clone());

        let lines = summary_lines(
            &order,
            order.totals(DEFAULT_TAX_RATE),
            DEFAULT_TAX_RATE,
            "$",
        );
        let rendered: Vec<String> = lines.iter().map(text).collect();

        assert!(rendered[2].starts_with("Cauliflower"));
        assert!(rendered[2].ends_with("$7.00"));
        assert!(rendered[3].starts_with("No side dish"));
        assert!(rendered[4].starts_with("Mixed Berries"));
        assert!(rendered
            .iter()
            .any(|line| line.starts_with("Subtotal:") && line.ends_with("$8.00")));
        assert!(rendered
            .iter()
            .any(|line| line.starts_with("Tax (8%):") && line.ends_with("$0.64")));
        assert!(rendered
            .last()
            .map(|line| line.ends_with("$8.64"))
            .unwrap_or(false));
    }
}
