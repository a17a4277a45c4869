use std::path::Path;

use crate::app::controller::AppController;
use crate::app::flow::OrderFlow;
use crate::catalog::{load_catalog, MenuCatalog};
use crate::config::{load_app_config, resolve_root, AppConfig};
use crate::error::Result;

/// Entry point used by `main`: load settings and the menu, then hand off to the terminal UI.
pub fn run() -> Result<()> {
    let root = resolve_root()?;
    let (config, flow) = prepare(&root)?;
    AppController::new(flow, config.currency_symbol).run()
}

/// Build a fresh ordering flow from the configuration found under `root`.
pub fn prepare(root: &Path) -> Result<(AppConfig, OrderFlow)> {
    let config = load_app_config(root)?;

    let catalog = match &config.catalog_file {
        Some(path) => load_catalog(path)?,
        None => MenuCatalog::builtin(),
    };
    log::info!(
        "starting lunch tray from {} (tax rate {})",
        root.display(),
        config.tax_rate
    );

    let flow = OrderFlow::new(catalog, config.tax_rate);
    Ok((config, flow))
}
