//! Error types for the currency crate.
//!
//! - [`SymbolError`]: rejected search input
//! - [`CatalogError`]: a static table violates one of its invariants
//!
//! Resolution and formatting never fail; they fall back to defaults instead.

use thiserror::Error;

/// Why a user-entered ticker was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SymbolError {
    #[error("Please enter a stock symbol")]
    Empty,

    #[error("Stock symbol too long (max {max} characters)")]
    TooLong {
        /// Length of the normalized input
        len: usize,
        /// Maximum accepted length
        max: usize,
    },

    #[error("Invalid stock symbol format: {0}")]
    InvalidCharacters(String),
}

/// A violation of the currency catalog invariants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Catalog is malformed: {0}")]
    Malformed(String),

    #[error("Default currency {0} is not in the currency table")]
    MissingDefaultCurrency(String),

    #[error("Currency {0} is defined more than once")]
    DuplicateCurrency(String),

    #[error("Locale {0} is defined more than once")]
    DuplicateLocale(String),

    #[error("Currency {currency} uses undefined locale {locale}")]
    UnknownLocale { currency: String, locale: String },

    #[error("Suffix rule for {exchange} has an empty suffix")]
    EmptySuffix { exchange: String },

    #[error("Suffix {0} is not upper-case")]
    NonCanonicalSuffix(String),

    #[error("Suffix {0} is defined more than once")]
    DuplicateSuffix(String),

    #[error("Suffix {suffix} overlaps with {other}")]
    OverlappingSuffix { suffix: String, other: String },

    #[error("Suffix {suffix} references unknown currency {currency}")]
    UnknownCurrency { suffix: String, currency: String },
}
