use rust_decimal::{Decimal, RoundingStrategy};

use crate::catalog::{Category, MenuItem};

/// Derived money amounts for an order. Never stored alongside the selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderTotals {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

impl OrderTotals {
    pub fn zero() -> Self {
        Self {
            subtotal: Decimal::ZERO,
            tax: Decimal::ZERO,
            total: Decimal::ZERO,
        }
    }
}

/// In-progress selections, at most one item per category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Order {
    entree: Option<MenuItem>,
    side_dish: Option<MenuItem>,
    accompaniment: Option<MenuItem>,
}

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entree(&self) -> Option<&MenuItem> {
        self.entree.as_ref()
    }

    pub fn side_dish(&self) -> Option<&MenuItem> {
        self.side_dish.as_ref()
    }

    pub fn accompaniment(&self) -> Option<&MenuItem> {
        self.accompaniment.as_ref()
    }

    pub fn update_entree(&mut self, item: MenuItem) {
        self.entree = Some(item);
    }

    pub fn update_side_dish(&mut self, item: MenuItem) {
        self.side_dish = Some(item);
    }

    pub fn update_accompaniment(&mut self, item: MenuItem) {
        self.accompaniment = Some(item);
    }

    /// Replace the selection for the item's own category.
    pub fn select(&mut self, item: MenuItem) {
        match item.category {
            Category::Entree => self.update_entree(item),
            Category::SideDish => self.update_side_dish(item),
            Category::Accompaniment => self.update_accompaniment(item),
        }
    }

    pub fn selection(&self, category: Category) -> Option<&MenuItem> {
        match category {
            Category::Entree => self.entree(),
            Category::SideDish => self.side_dish(),
            Category::Accompaniment => self.accompaniment(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.items().next().is_none()
    }

    /// Selected items in category order.
    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        [&self.entree, &self.side_dish, &self.accompaniment]
            .into_iter()
            .flatten()
    }

    /// Saturates at `Decimal::MAX` instead of overflowing.
    pub fn subtotal(&self) -> Decimal {
        self.items()
            .fold(Decimal::ZERO, |sum, item| sum.saturating_add(item.price))
    }

    /// Tax is rounded to cents, half away from zero; total is subtotal plus rounded tax.
    pub fn totals(&self, tax_rate: Decimal) -> OrderTotals {
        let subtotal = self.subtotal();
        let tax = subtotal
            .saturating_mul(tax_rate)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        OrderTotals {
            subtotal,
            tax,
            total: subtotal.saturating_add(tax),
        }
    }
}
