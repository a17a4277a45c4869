use rust_decimal::Decimal;

use crate::error::{AppError, Result};

use super::AppConfig;

/// Validate runtime settings, aggregating every issue into one error.
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    let mut issues = Vec::new();

    if config.tax_rate < Decimal::ZERO || config.tax_rate >= Decimal::ONE {
        issues.push(format!(
            "tax_rate must be within [0, 1) (got {})",
            config.tax_rate
        ));
    }

    if config.currency_symbol.trim().is_empty() {
        issues.push("currency_symbol must not be empty".to_string());
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(AppError::message(format!(
            "app config invalid:\n  - {}",
            issues.join("\n  - ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_config_is_valid() {
        validate_app_config(&AppConfig::builtin()).expect("builtin config should be valid");
    }

    #[test]
    fn zero_tax_is_allowed() {
        let config = AppConfig {
            tax_rate: Decimal::ZERO,
            ..AppConfig::builtin()
        };
        validate_app_config(&config).expect("untaxed config should be valid");
    }

    #[test]
    fn rejects_negative_tax_rate() {
        let config = AppConfig {
            tax_rate: Decimal::new(-1, 2),
            ..AppConfig::builtin()
        };
        let err = validate_app_config(&config).expect_err("validation should fail");
        assert!(
            err.to_string().contains("tax_rate"),
            "unexpected error message: {}",
            err
        );
    }
}
