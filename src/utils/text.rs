use rust_decimal::Decimal;
use unicode_width::UnicodeWidthStr;

/// Render a currency amount with two decimals, e.g. `$7.00`. Negative amounts keep the sign
/// in front of the symbol.
pub fn format_price(amount: Decimal, symbol: &str) -> String {
    if amount.is_sign_negative() && !amount.is_zero() {
        format!("-{}{:.2}", symbol, amount.abs())
    } else {
        format!("{}{:.2}", symbol, amount.abs())
    }
}

/// Right-pad `text` with spaces to `width` terminal columns.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(UnicodeWidthStr::width(text));
    format!("{}{}", text, " ".repeat(pad))
}
