//! Ticker to exchange/currency resolution.
//!
//! Two layers, tried in order:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ 1. Override (API response)                               │
//! │    - StockInfo.currency / StockInfo.exchange            │
//! │    - unknown or blank codes are ignored                 │
//! └─────────────────────────────────────────────────────────┘
//!                           │ miss
//!                           ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │ 2. Suffix rules (deterministic)                          │
//! │    - ".SA" → B3 / BRL, ".L" → LSE / GBP, ...            │
//! │    - no match → NASDAQ/NYSE / USD                        │
//! └─────────────────────────────────────────────────────────┘
//! ```

mod precedence;
mod suffix;

pub use precedence::{resolve_display, ResolutionSource, ResolvedDisplay};
pub use suffix::{
    canonical_ticker, find_suffix_rule, resolve_currency, resolve_exchange_name,
    strip_exchange_suffix,
};
