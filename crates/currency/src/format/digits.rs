use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::Grouping;

/// A rounded number split into sign and unsigned digits.
pub(crate) struct Rounded {
    pub negative: bool,
    pub integer: String,
    pub fraction: String,
}

/// Round `value` half away from zero to `dp` fractional digits.
///
/// The shortest decimal representation of the float is rounded, so 2.675
/// becomes 2.68 rather than following its binary expansion.
/// Returns `None` only for NaN and infinities.
/// A value that rounds to zero is never negative.
pub(crate) fn round(value: f64, dp: u32) -> Option<Rounded> {
    if !value.is_finite() {
        return None;
    }
    let text = value.to_string();
    let decimal = match text.parse::<Decimal>() {
        Ok(decimal) => decimal,
        // Below 1 the only unparsable values are far past any rounding precision
        Err(_) if value.abs() < 1.0 => Decimal::ZERO,
        // Beyond the Decimal range every f64 is already an integer
        Err(_) => return Some(split(value.is_sign_negative(), text.trim_start_matches('-'), dp)),
    }
    .round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);

    let negative = decimal.is_sign_negative() && !decimal.is_zero();
    Some(split(negative, &decimal.abs().to_string(), dp))
}

/// Split unsigned decimal text into integer digits and a `dp`-wide fraction.
fn split(negative: bool, unsigned: &str, dp: u32) -> Rounded {
    let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let mut fraction = fraction.to_string();
    while fraction.len() < dp as usize {
        fraction.push('0');
    }
    fraction.truncate(dp as usize);

    Rounded {
        negative,
        integer: integer.to_string(),
        fraction,
    }
}

/// Insert `separator` into a run of integer digits.
pub(crate) fn group_integer(digits: &str, separator: char, grouping: Grouping) -> String {
    let len = digits.chars().count();
    let mut out = String::with_capacity(digits.len() + len / 2);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && is_group_boundary(len - idx, grouping) {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

fn is_group_boundary(remaining: usize, grouping: Grouping) -> bool {
    match grouping {
        Grouping::Standard => remaining % 3 == 0,
        Grouping::Indian => remaining == 3 || (remaining > 3 && (remaining - 3) % 2 == 0),
    }
}
