use std::fmt;

use crate::catalog::Category;

/// The five stages of the ordering flow, in visiting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Start,
    EntreeMenu,
    SideDishMenu,
    AccompanimentMenu,
    Checkout,
}

impl Step {
    pub const ALL: [Step; 5] = [
        Step::Start,
        Step::EntreeMenu,
        Step::SideDishMenu,
        Step::AccompanimentMenu,
        Step::Checkout,
    ];

    /// Human readable label used by the top bar and logs.
    pub fn title(self) -> &'static str {
        match self {
            Step::Start => "Start",
            Step::EntreeMenu => "Entree Menu",
            Step::SideDishMenu => "Side Dish Menu",
            Step::AccompanimentMenu => "Accompaniment Menu",
            Step::Checkout => "Checkout",
        }
    }

    /// Stable route identifier.
    pub fn route(self) -> &'static str {
        match self {
            Step::Start => "Start",
            Step::EntreeMenu => "EntreeMenu",
            Step::SideDishMenu => "SideDishMenu",
            Step::AccompanimentMenu => "AccompanimentMenu",
            Step::Checkout => "Checkout",
        }
    }

    pub fn from_route(route: &str) -> Option<Step> {
        Step::ALL.into_iter().find(|step| step.route() == route)
    }

    /// Step reached by confirming this one. Start and Checkout have no linear successor.
    pub fn next(self) -> Option<Step> {
        match self {
            Step::EntreeMenu => Some(Step::SideDishMenu),
            Step::SideDishMenu => Some(Step::AccompanimentMenu),
            Step::AccompanimentMenu => Some(Step::Checkout),
            Step::Start | Step::Checkout => None,
        }
    }

    /// Menu category picked on this step, if it is a menu step.
    pub fn category(self) -> Option<Category> {
        match self {
            Step::EntreeMenu => Some(Category::Entree),
            Step::SideDishMenu => Some(Category::SideDish),
            Step::AccompanimentMenu => Some(Category::Accompaniment),
            Step::Start | Step::Checkout => None,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route())
    }
}

/// Title for a raw route name, falling back to the Start title for unknown routes.
pub fn resolve_title(route: Option<&str>) -> &'static str {
    route
        .and_then(Step::from_route)
        .unwrap_or(Step::Start)
        .title()
}

/// Visited steps, oldest first. Start is always the bottom entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackStack {
    entries: Vec<Step>,
}

impl BackStack {
    pub fn new() -> Self {
        Self {
            entries: vec![Step::Start],
        }
    }

    pub fn current(&self) -> Step {
        self.entries.last().copied().unwrap_or(Step::Start)
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[Step] {
        &self.entries
    }

    pub fn push(&mut self, step: Step) {
        self.entries.push(step);
    }

    /// Drop the current entry. Returns the new current step, or `None` when already at the root.
    pub fn pop(&mut self) -> Option<Step> {
        if self.entries.len() <= 1 {
            return None;
        }
        self.entries.pop();
        Some(self.current())
    }

    /// Pop entries above the most recent `target`, also removing `target` when `inclusive`.
    /// Returns false and leaves the stack untouched when `target` is not on it or when the
    /// pop would remove the root.
    pub fn pop_to(&mut self, target: Step, inclusive: bool) -> bool {
        let Some(idx) = self.entries.iter().rposition(|step| *step == target) else {
            return false;
        };
        let keep = if inclusive { idx } else { idx + 1 };
        if keep == 0 {
            return false;
        }
        self.entries.truncate(keep);
        true
    }
}

impl Default for BackStack {
    fn default() -> Self {
        Self::new()
    }
}
