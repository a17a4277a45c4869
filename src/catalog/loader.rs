use std::{fs, path::Path};

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{Context, Result};

use super::{validator, Category, MenuCatalog, MenuItem};

#[derive(Debug, Deserialize)]
struct RawCatalog {
    #[serde(default)]
    entrees: Vec<RawMenuItem>,
    #[serde(default)]
    side_dishes: Vec<RawMenuItem>,
    #[serde(default)]
    accompaniments: Vec<RawMenuItem>,
}

#[derive(Debug, Deserialize)]
struct RawMenuItem {
    name: String,
    #[serde(default)]
    description: String,
    price: Decimal,
}

impl RawMenuItem {
    fn into_item(self, category: Category) -> MenuItem {
        MenuItem::new(category, self.name.trim(), self.description.trim(), self.price)
    }
}

/// Read a JSON menu catalog and validate it before handing it to the flow.
pub fn load_catalog(path: &Path) -> Result<MenuCatalog> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read menu catalog at {}", path.display()))?;

    let catalog = parse_catalog(&json)
        .with_context(|| format!("failed to parse menu catalog at {}", path.display()))?;

    validator::validate_catalog(&catalog)?;
    log::debug!("loaded menu catalog from {}", path.display());

    Ok(catalog)
}

fn parse_catalog(json: &str) -> serde_json::Result<MenuCatalog> {
    let raw: RawCatalog = serde_json::from_str(json)?;

    let convert = |items: Vec<RawMenuItem>, category: Category| {
        items
            .into_iter()
            .map(|item| item.into_item(category))
            .collect::<Vec<_>>()
    };

    Ok(MenuCatalog::new(
        convert(raw.entrees, Category::Entree),
        convert(raw.side_dishes, Category::SideDish),
        convert(raw.accompaniments, Category::Accompaniment),
    ))
}
