use super::digits::round;
use super::money::PLACEHOLDER;

const PERCENT_DECIMALS: u32 = 2;

/// Format a value already expressed in percent with two decimals.
///
/// `5.5` renders as `"5.50%"`, `-2.0` as `"-2.00%"`.
pub fn format_percent(value: f64) -> String {
    match render(value) {
        Some((true, body)) => format!("-{}", body),
        Some((false, body)) => body,
        None => PLACEHOLDER.to_string(),
    }
}

/// Like [`format_percent`] with an explicit `+` on non-negative values.
pub fn format_signed_percent(value: f64) -> String {
    match render(value) {
        Some((true, body)) => format!("-{}", body),
        Some((false, body)) => format!("+{}", body),
        None => PLACEHOLDER.to_string(),
    }
}

fn render(value: f64) -> Option<(bool, String)> {
    let rounded = round(value, PERCENT_DECIMALS)?;
    Some((
        rounded.negative,
        format!("{}.{}%", rounded.integer, rounded.fraction),
    ))
}
