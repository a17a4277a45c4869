use std::{
    env,
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{AppError, Context, Result};

use super::{validator, AppConfig};

/// File name looked up under `<root>/assets/configs`.
pub const CONFIG_FILE_NAME: &str = "lunch_tray.json";

/// Environment variable that overrides the application root directory.
pub const ROOT_ENV_VAR: &str = "LUNCH_TRAY_ROOT";

#[derive(Debug, Deserialize)]
struct RawAppConfig {
    #[serde(default)]
    tax_rate: Option<Decimal>,
    #[serde(default)]
    currency_symbol: Option<String>,
    #[serde(default)]
    catalog_file: Option<String>,
}

/// Directory that holds `assets/`: `$LUNCH_TRAY_ROOT` when set, otherwise the working directory.
pub fn resolve_root() -> Result<PathBuf> {
    root_from(env::var_os(ROOT_ENV_VAR))
}

fn root_from(value: Option<OsString>) -> Result<PathBuf> {
    match value {
        Some(value) if !value.is_empty() => Ok(PathBuf::from(value)),
        _ => env::current_dir().map_err(AppError::from),
    }
}

/// Load `assets/configs/lunch_tray.json` under `root`, falling back to built-in settings
/// when the file does not exist.
pub fn load_app_config(root: &Path) -> Result<AppConfig> {
    let path = root.join("assets").join("configs").join(CONFIG_FILE_NAME);
    if !path.exists() {
        log::warn!(
            "no config at {}; using built-in settings",
            path.display()
        );
        return Ok(AppConfig::builtin());
    }

    let json = fs::read_to_string(&path)
        .with_context(|| format!("failed to read app config at {}", path.display()))?;
    let raw: RawAppConfig = serde_json::from_str(&json)
        .with_context(|| format!("failed to parse app config at {}", path.display()))?;

    let config = raw.into_config(root)?;
    validator::validate_app_config(&config)?;
    Ok(config)
}

impl RawAppConfig {
    fn into_config(self, root: &Path) -> Result<AppConfig> {
        let defaults = AppConfig::builtin();

        let catalog_file = match self.catalog_file {
            Some(file) if file.trim().is_empty() => {
                return Err(AppError::message(
                    "catalog_file must not be blank when provided",
                ))
            }
            Some(file) => Some(resolve_relative(root, file.trim())),
            None => None,
        };

        Ok(AppConfig {
            tax_rate: self.tax_rate.unwrap_or(defaults.tax_rate),
            currency_symbol: self.currency_symbol.unwrap_or(defaults.currency_symbol),
            catalog_file,
        })
    }
}

fn resolve_relative(root: &Path, file: &str) -> PathBuf {
    let path = Path::new(file);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
