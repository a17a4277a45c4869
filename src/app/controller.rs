use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::flow::{FlowEvent, OrderFlow, Transition};
use crate::error::Result;
use crate::ui::components::utils::screen_layout;
use crate::ui::screens::{checkout, menu, start, MenuCursor};
use crate::ui::shell::{render_top_bar, TopBar};
use crate::ui::styles::{secondary_line, ACCENT};
use crate::ui::{Step, TerminalGuard};
use crate::utils::format_price;

/// Whether the session keeps running after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResult {
    Continue,
    Quit,
}

/// Terminal host for an [`OrderFlow`]: turns key presses into flow events and draws the
/// screen for the current step.
pub struct AppController {
    flow: OrderFlow,
    currency: String,
    status: Rc<RefCell<Option<String>>>,
    cursor: MenuCursor,
    cursor_step: Step,
}

impl AppController {
    pub fn new(mut flow: OrderFlow, currency: impl Into<String>) -> Self {
        let currency = currency.into();
        let status = Rc::new(RefCell::new(None));

        let sink = Rc::clone(&status);
        let symbol = currency.clone();
        flow.subscribe(move |transition, _| {
            *sink.borrow_mut() = status_message(transition, &symbol);
        });

        let cursor_step = flow.current_step();
        Self {
            flow,
            currency,
            status,
            cursor: MenuCursor::default(),
            cursor_step,
        }
    }

    pub fn flow(&self) -> &OrderFlow {
        &self.flow
    }

    pub fn status(&self) -> Option<String> {
        self.status.borrow().clone()
    }

    pub fn run(mut self) -> Result<()> {
        let mut guard = TerminalGuard::new()?;

        loop {
            guard.terminal_mut().draw(|f| self.render(f))?;

            if !event::poll(Duration::from_millis(200))? {
                continue;
            }
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if self.handle_key(key) == KeyResult::Quit {
                    break;
                }
            }
        }

        guard.restore()?;
        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> KeyResult {
        let quit = match key.code {
            KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
            KeyCode::Char('q') => true,
            _ => false,
        };
        if quit {
            return KeyResult::Quit;
        }

        let event = match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor.up(self.flow.options().len());
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.cursor.down(self.flow.options().len());
                None
            }
            KeyCode::Char(' ') => self
                .cursor
                .current(self.flow.options())
                .cloned()
                .map(FlowEvent::Select),
            KeyCode::Enter => Some(match self.flow.current_step() {
                Step::Start => FlowEvent::Start,
                Step::Checkout => FlowEvent::Complete,
                Step::EntreeMenu | Step::SideDishMenu | Step::AccompanimentMenu => {
                    FlowEvent::ConfirmSelection
                }
            }),
            KeyCode::Esc => Some(FlowEvent::Cancel),
            KeyCode::Backspace | KeyCode::Left => Some(FlowEvent::Back),
            _ => None,
        };

        if let Some(event) = event {
            self.flow.dispatch(event);
            self.sync_cursor();
        }
        KeyResult::Continue
    }

    /// Re-seat the menu highlight whenever the step changes.
    fn sync_cursor(&mut self) {
        let step = self.flow.current_step();
        if step == self.cursor_step {
            return;
        }
        self.cursor = step
            .category()
            .map(|category| {
                MenuCursor::for_options(self.flow.options(), self.flow.order().selection(category))
            })
            .unwrap_or_default();
        self.cursor_step = step;
    }

    fn render(&self, f: &mut Frame) {
        let layout = screen_layout(f.size());
        let view = self.flow.view();

        render_top_bar(f, layout.top_bar, TopBar::for_route(Some(view.step.route())));

        let help = match view.step {
            Step::Start => {
                start::render(f, layout.body);
                start::HELP
            }
            Step::Checkout => {
                checkout::render(
                    f,
                    layout.body,
                    view.order,
                    view.totals,
                    self.flow.tax_rate(),
                    &self.currency,
                );
                checkout::HELP
            }
            Step::EntreeMenu | Step::SideDishMenu | Step::AccompanimentMenu => {
                if let Some(category) = view.step.category() {
                    let screen = menu::MenuScreen {
                        category,
                        options: self.flow.options(),
                        selected: view.order.selection(category),
                        cursor: self.cursor,
                        subtotal: view.totals.subtotal,
                        currency: &self.currency,
                    };
                    menu::render(f, layout.body, &screen);
                }
                menu::HELP
            }
        };

        if let Some(message) = self.status.borrow().as_deref() {
            let status = Paragraph::new(message.to_string()).style(Style::default().fg(ACCENT));
            f.render_widget(status, layout.status);
        }
        f.render_widget(Paragraph::new(secondary_line(help)), layout.help);
    }
}

fn status_message(transition: &Transition, currency: &str) -> Option<String> {
    match transition {
        Transition::Selected { item, .. } => Some(format!(
            "Selected {} ({})",
            item.name,
            format_price(item.price, currency)
        )),
        Transition::Cancelled { .. } => Some("Order cancelled".to_string()),
        Transition::Completed { totals, .. } => Some(format!(
            "Order submitted: {}",
            format_price(totals.total, currency)
        )),
        Transition::Navigated { .. } | Transition::Ignored { .. } => None,
    }
}
