use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::error::{AppError, Result};

use super::{Category, MenuCatalog};

/// Highest accepted item price; keeps any three-item order far from `Decimal` limits.
pub const MAX_PRICE: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

/// Validate a catalog and surface every problem in one message.
pub fn validate_catalog(catalog: &MenuCatalog) -> Result<()> {
    let mut issues = Vec::new();

    for category in Category::ALL {
        validate_category(catalog, category, &mut issues);
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(AppError::message(format!(
            "menu catalog invalid:\n  - {}",
            issues.join("\n  - ")
        )))
    }
}

fn validate_category(catalog: &MenuCatalog, category: Category, issues: &mut Vec<String>) {
    let items = catalog.items(category);
    if items.is_empty() {
        issues.push(format!("{category} menu has no items"));
        return;
    }

    let mut seen = HashSet::new();
    for (idx, item) in items.iter().enumerate() {
        if item.name.trim().is_empty() {
            issues.push(format!("{category} item #{} has an empty name", idx + 1));
            continue;
        }
        if !seen.insert(item.name.as_str()) {
            issues.push(format!("{category} item `{}` is listed twice", item.name));
        }
        if item.price < Decimal::ZERO {
            issues.push(format!(
                "{category} item `{}` has a negative price ({})",
                item.name, item.price
            ));
        } else if item.price > MAX_PRICE {
            issues.push(format!(
                "{category} item `{}` price {} exceeds the {} limit",
                item.name, item.price, MAX_PRICE
            ));
        }
    }
}
