//! Stock Advisor Currency Crate
//!
//! Maps stock tickers to their exchange and trading currency, and renders
//! monetary amounts and percentages the way the dashboard displays them.
//!
//! # Overview
//!
//! ```text
//! "PETR4.SA" ──► suffix rules ──► ".SA" → B3 (São Paulo), BRL
//!                                        │
//!                                        ▼
//!                              CurrencyDescriptor { R$, pt-BR, 2 }
//!                                        │
//!                                        ▼
//!                              format_currency(32.44) = "R$ 32,44"
//! ```
//!
//! All tables are static, validated once on first use, and never mutated.
//! Every function here is pure and safe to call from any thread. Nothing in
//! the formatting path fails: unknown suffixes fall back to USD and
//! "NASDAQ/NYSE", non-finite amounts render as [`PLACEHOLDER`].
//!
//! # Core Types
//!
//! - [`CurrencyDescriptor`] - Glyph, name, locale and minor units of a currency
//! - [`ExchangeSuffixRule`] - Ticker suffix to exchange/currency mapping
//! - [`LocaleFormat`] - Separators and symbol placement of a locale
//! - [`DisplayContext`] - Ticker plus optional API overrides
//! - [`ColorToken`] - Direction of a price change

pub mod errors;
pub mod format;
pub mod models;
pub mod registry;
pub mod resolver;
pub mod symbol;

pub use errors::{CatalogError, SymbolError};
pub use format::{
    format_amount, format_currency, format_percent, format_signed_amount, format_signed_currency,
    format_signed_percent, get_change_color, PLACEHOLDER,
};
pub use models::{
    ColorToken, CurrencyDescriptor, DisplayContext, ExchangeSuffixRule, Grouping, LocaleFormat,
    SymbolPosition,
};
pub use registry::{
    currency_by_code, default_currency, default_exchange, locale_format, suffix_rules,
    supported_currencies, validate_catalog, Catalog,
};
pub use resolver::{
    canonical_ticker, find_suffix_rule, resolve_currency, resolve_display, resolve_exchange_name,
    strip_exchange_suffix, ResolutionSource, ResolvedDisplay,
};
pub use symbol::{normalize_symbol, MAX_SYMBOL_LEN};
