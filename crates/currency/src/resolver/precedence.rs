//! API override precedence.
//!
//! A stock-info response may carry an authoritative currency code and exchange
//! label. They are applied per render and never written back into the tables.

use std::borrow::Cow;

use log::debug;

use crate::format::{format_amount, format_signed_amount};
use crate::models::{CurrencyDescriptor, DisplayContext};
use crate::registry::{currency_by_code, default_exchange};

use super::suffix::{find_suffix_rule, resolve_currency};

/// Indicates where a resolved value came from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ResolutionSource {
    /// Supplied by the API response.
    Override,
    /// Derived from the ticker's exchange suffix.
    SuffixRule,
    /// No override and no matching suffix.
    Default,
}

/// Effective currency and exchange for one render.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedDisplay<'a> {
    pub currency: &'static CurrencyDescriptor,
    pub exchange: Cow<'a, str>,
    pub currency_source: ResolutionSource,
    pub exchange_source: ResolutionSource,
}

impl ResolvedDisplay<'_> {
    /// Format `amount` with the effective currency.
    pub fn format(&self, amount: f64) -> String {
        format_amount(amount, self.currency)
    }

    /// Format `amount` with an explicit `+` on non-negative values.
    pub fn format_signed(&self, amount: f64) -> String {
        format_signed_amount(amount, self.currency)
    }
}

/// Apply the override precedence rule to `context`.
pub fn resolve_display<'a>(context: &DisplayContext<'a>) -> ResolvedDisplay<'a> {
    let rule = find_suffix_rule(context.symbol);
    let derived_source = if rule.is_some() {
        ResolutionSource::SuffixRule
    } else {
        ResolutionSource::Default
    };

    let hinted = context
        .currency_hint
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .and_then(|code| {
            let found = currency_by_code(code);
            if found.is_none() {
                debug!(
                    "Unknown currency override '{}' for {}, using suffix rules",
                    code, context.symbol
                );
            }
            found
        });

    let (currency, currency_source) = match hinted {
        Some(currency) => (currency, ResolutionSource::Override),
        None => (resolve_currency(context.symbol), derived_source),
    };

    let exchange_hint = context
        .exchange_hint
        .map(str::trim)
        .filter(|label| !label.is_empty());

    let (exchange, exchange_source) = match (exchange_hint, rule) {
        (Some(label), _) => (Cow::Borrowed(label), ResolutionSource::Override),
        (None, Some(rule)) => (
            Cow::Borrowed(rule.exchange.as_str()),
            ResolutionSource::SuffixRule,
        ),
        (None, None) => (Cow::Borrowed(default_exchange()), ResolutionSource::Default),
    };

    ResolvedDisplay {
        currency,
        exchange,
        currency_source,
        exchange_source,
    }
}
