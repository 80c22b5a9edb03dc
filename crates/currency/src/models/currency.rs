use serde::{Deserialize, Serialize};

/// Display and formatting attributes for one currency.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyDescriptor {
    /// ISO 4217 style code, e.g. "BRL".
    pub code: String,
    /// Glyph rendered next to amounts, e.g. "R$".
    pub symbol: String,
    /// Human readable name, e.g. "Brazilian Real".
    pub name: String,
    /// Locale tag selecting separators and symbol placement, e.g. "pt-BR".
    pub locale: String,
    /// Number of fractional digits (0 for JPY and KRW).
    pub minor_units: u32,
}

/// Where the currency glyph sits relative to the number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolPosition {
    Prefix,
    Suffix,
}

/// Digit grouping style of the integer part.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grouping {
    /// Groups of three: 1,234,567
    Standard,
    /// Lakh/crore: last group of three, then groups of two (12,34,567)
    Indian,
}

/// Number conventions of a locale tag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleFormat {
    pub tag: String,
    pub decimal: char,
    pub group: char,
    pub grouping: Grouping,
    pub symbol_position: SymbolPosition,
    /// Separate glyph and number with a no-break space.
    #[serde(default)]
    pub symbol_spacing: bool,
}
