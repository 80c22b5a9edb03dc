//! Currency models
//!
//! This module contains the static-table records and the small value types
//! used by the resolver and formatter:
//! - `currency` - Currency descriptors and the per-locale number format
//! - `exchange` - Exchange suffix rules
//! - `color` - Change direction token for price moves
//! - `context` - Display context carrying optional API overrides

mod color;
mod context;
mod currency;
mod exchange;

pub use color::ColorToken;
pub use context::DisplayContext;
pub use currency::{CurrencyDescriptor, Grouping, LocaleFormat, SymbolPosition};
pub use exchange::ExchangeSuffixRule;
