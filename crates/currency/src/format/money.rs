use log::debug;

use crate::models::{CurrencyDescriptor, SymbolPosition};
use crate::registry::locale_format;
use crate::resolver::resolve_currency;

use super::digits::{group_integer, round};

/// Rendered in place of amounts that cannot be formatted (NaN, infinities).
pub const PLACEHOLDER: &str = "N/A";

const NO_BREAK_SPACE: char = '\u{a0}';

/// Format `amount` in the currency traded under `ticker`.
///
/// ```
/// use stockadvisor_currency::format_currency;
///
/// assert_eq!(format_currency(32.44, "AAPL"), "$32.44");
/// assert_eq!(format_currency(2500.0, "7203.T"), "¥2,500");
/// assert_eq!(format_currency(-5.5, "VOD.L"), "-£5.50");
/// assert_eq!(format_currency(f64::NAN, "AAPL"), "N/A");
/// ```
pub fn format_currency(amount: f64, ticker: &str) -> String {
    format_amount(amount, resolve_currency(ticker))
}

/// Format `amount` with an already resolved currency.
pub fn format_amount(amount: f64, currency: &CurrencyDescriptor) -> String {
    match render(amount, currency) {
        Some((true, body)) => format!("-{}", body),
        Some((false, body)) => body,
        None => PLACEHOLDER.to_string(),
    }
}

/// Like [`format_currency`] but with an explicit `+` on non-negative values,
/// as shown on price change lines.
pub fn format_signed_currency(amount: f64, ticker: &str) -> String {
    format_signed_amount(amount, resolve_currency(ticker))
}

/// Signed variant of [`format_amount`].
pub fn format_signed_amount(amount: f64, currency: &CurrencyDescriptor) -> String {
    match render(amount, currency) {
        Some((true, body)) => format!("-{}", body),
        Some((false, body)) => format!("+{}", body),
        None => PLACEHOLDER.to_string(),
    }
}

/// Returns the sign and the unsigned body (digits plus glyph).
fn render(amount: f64, currency: &CurrencyDescriptor) -> Option<(bool, String)> {
    let Some(rounded) = round(amount, currency.minor_units) else {
        debug!("Cannot format amount {} as {}", amount, currency.code);
        return None;
    };
    let locale = locale_format(&currency.locale);

    let mut number = group_integer(&rounded.integer, locale.group, locale.grouping);
    if !rounded.fraction.is_empty() {
        number.push(locale.decimal);
        number.push_str(&rounded.fraction);
    }

    let mut body = String::with_capacity(number.len() + currency.symbol.len() + 2);
    match locale.symbol_position {
        SymbolPosition::Prefix => {
            body.push_str(&currency.symbol);
            if locale.symbol_spacing {
                body.push(NO_BREAK_SPACE);
            }
            body.push_str(&number);
        }
        SymbolPosition::Suffix => {
            body.push_str(&number);
            if locale.symbol_spacing {
                body.push(NO_BREAK_SPACE);
            }
            body.push_str(&currency.symbol);
        }
    }

    Some((rounded.negative, body))
}
