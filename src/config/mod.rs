pub mod loader;
pub mod validator;

use std::path::PathBuf;

use rust_decimal::Decimal;

pub use loader::{load_app_config, resolve_root, CONFIG_FILE_NAME, ROOT_ENV_VAR};

/// Sales tax applied at checkout when no configuration overrides it (8%).
pub const DEFAULT_TAX_RATE: Decimal = Decimal::from_parts(8, 0, 0, false, 2);

/// Runtime settings for the ordering app.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub tax_rate: Decimal,
    pub currency_symbol: String,
    /// Catalog JSON to load instead of the built-in menu, already resolved against the root.
    pub catalog_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn builtin() -> Self {
        Self {
            tax_rate: DEFAULT_TAX_RATE,
            currency_symbol: "$".to_string(),
            catalog_file: None,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::builtin()
    }
}
