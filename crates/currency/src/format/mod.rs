//! Locale-aware rendering of money and percentages.

mod digits;
mod money;
mod percent;

pub use money::{
    format_amount, format_currency, format_signed_amount, format_signed_currency, PLACEHOLDER,
};
pub use percent::{format_percent, format_signed_percent};

use crate::models::ColorToken;

/// Classify a change value for colouring: positive, negative or neutral.
pub fn get_change_color(value: f64) -> ColorToken {
    ColorToken::from_change(value)
}
