//! Validation of user-entered ticker symbols.

use crate::errors::SymbolError;

/// Longest symbol accepted by the search box.
pub const MAX_SYMBOL_LEN: usize = 10;

/// Trim and upper-case `input`, then check it is a plausible ticker.
///
/// Accepts letters, digits, `.` and `-` (e.g. "PETR4.SA", "BF-B").
pub fn normalize_symbol(input: &str) -> Result<String, SymbolError> {
    let symbol = input.trim().to_ascii_uppercase();

    if symbol.is_empty() {
        return Err(SymbolError::Empty);
    }

    let len = symbol.chars().count();
    if len > MAX_SYMBOL_LEN {
        return Err(SymbolError::TooLong {
            len,
            max: MAX_SYMBOL_LEN,
        });
    }

    if !symbol
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '.' || c == '-')
    {
        return Err(SymbolError::InvalidCharacters(symbol));
    }

    Ok(symbol)
}
