//! Deterministic suffix-rule resolution.

use crate::models::{CurrencyDescriptor, ExchangeSuffixRule};
use crate::registry::catalog::REGISTRY;

/// Canonical form of a ticker as used throughout the UI: trimmed, upper-case.
pub fn canonical_ticker(ticker: &str) -> String {
    ticker.trim().to_ascii_uppercase()
}

/// Find the exchange rule whose suffix ends `ticker`.
///
/// The catalog guarantees suffixes are mutually exclusive, so at most one rule
/// can match; the first one in table order is returned.
pub fn find_suffix_rule(ticker: &str) -> Option<&'static ExchangeSuffixRule> {
    let canonical = canonical_ticker(ticker);
    REGISTRY.rules().iter().find(|rule| rule.matches(&canonical))
}

/// Resolve the trading currency of `ticker`, defaulting to USD.
pub fn resolve_currency(ticker: &str) -> &'static CurrencyDescriptor {
    find_suffix_rule(ticker)
        .and_then(|rule| REGISTRY.currency(&rule.currency))
        .unwrap_or_else(|| REGISTRY.default_currency())
}

/// Resolve the exchange label of `ticker`, defaulting to "NASDAQ/NYSE".
pub fn resolve_exchange_name(ticker: &str) -> &'static str {
    find_suffix_rule(ticker)
        .map(|rule| rule.exchange.as_str())
        .unwrap_or_else(|| REGISTRY.default_exchange())
}

/// Remove a known exchange suffix from `ticker`.
///
/// Only catalog suffixes are stripped, so share classes like BRK.B survive.
pub fn strip_exchange_suffix(ticker: &str) -> &str {
    let trimmed = ticker.trim();
    for rule in REGISTRY.rules() {
        let Some(split) = trimmed.len().checked_sub(rule.suffix.len()) else {
            continue;
        };
        if let Some(tail) = trimmed.get(split..) {
            if tail.eq_ignore_ascii_case(&rule.suffix) {
                return &trimmed[..split];
            }
        }
    }
    trimmed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_currency_by_suffix() {
        let cases = [
            ("PETR4.SA", "BRL"),
            ("VOD.L", "GBP"),
            ("7203.T", "JPY"),
            ("SHOP.TO", "CAD"),
            ("CBA.AX", "AUD"),
            ("NESN.SW", "CHF"),
            ("MC.PA", "EUR"),
            ("ASML.AS", "EUR"),
            ("ABI.BR", "EUR"),
            ("ENI.MI", "EUR"),
            ("0700.HK", "HKD"),
            ("600519.SS", "CNY"),
            ("000001.SZ", "CNY"),
            ("005930.KS", "KRW"),
            ("500325.BO", "INR"),
            ("TCS.NS", "INR"),
            ("WALMEX.MX", "MXN"),
        ];
        for (ticker, code) in cases {
            assert_eq!(resolve_currency(ticker).code, code, "{}", ticker);
        }
    }

    #[test]
    fn test_resolve_exchange_name_by_suffix() {
        assert_eq!(resolve_exchange_name("PETR4.SA"), "B3 (São Paulo)");
        assert_eq!(resolve_exchange_name("VOD.L"), "London Stock Exchange");
        assert_eq!(resolve_exchange_name("7203.T"), "Tokyo Stock Exchange");
        assert_eq!(resolve_exchange_name("SHOP.TO"), "Toronto Stock Exchange");
        assert_eq!(resolve_exchange_name("ASML.AS"), "Euronext Amsterdam");
        assert_eq!(
            resolve_exchange_name("TCS.NS"),
            "National Stock Exchange of India"
        );
    }

    #[test]
    fn test_unmatched_ticker_defaults_to_usd() {
        for ticker in ["AAPL", "GOOGL", "BRK.B", "BF-B", "RDS.A", "X"] {
            assert_eq!(resolve_currency(ticker).code, "USD", "{}", ticker);
            assert_eq!(resolve_exchange_name(ticker), "NASDAQ/NYSE", "{}", ticker);
        }
    }

    #[test]
    fn test_suffix_must_be_trailing() {
        // ".SA" in the middle is not a suffix match
        assert_eq!(resolve_currency("A.SAB").code, "USD");
        // ".T" and ".TO" do not shadow each other
        assert_eq!(resolve_currency("RY.TO").code, "CAD");
        assert_eq!(resolve_currency("9984.T").code, "JPY");
    }

    #[test]
    fn test_matching_uses_canonical_form() {
        assert_eq!(resolve_currency("petr4.sa").code, "BRL");
        assert_eq!(resolve_currency("  vod.l ").code, "GBP");
        assert_eq!(canonical_ticker(" shop.to "), "SHOP.TO");
    }

    #[test]
    fn test_non_ascii_does_not_expand_into_suffix() {
        // "ß" upper-cases to "SS" under full Unicode mapping
        assert_eq!(canonical_ticker("x.ß"), "X.ß");
        assert_eq!(resolve_currency("X.ß").code, "USD");
        assert_eq!(resolve_exchange_name("X.ß"), "NASDAQ/NYSE");
        assert!(find_suffix_rule("x.ß").is_none());
    }

    #[test]
    fn test_resolution_is_stable() {
        let first = resolve_currency("PETR4.SA");
        let second = resolve_currency("PETR4.SA");
        assert!(std::ptr::eq(first, second));
        assert_eq!(first, second);
    }

    #[test]
    fn test_find_suffix_rule() {
        let rule = find_suffix_rule("ASML.AS").unwrap();
        assert_eq!(rule.suffix, ".AS");
        assert_eq!(rule.currency, "EUR");
        assert!(find_suffix_rule("AAPL").is_none());
    }

    #[test]
    fn test_strip_exchange_suffix() {
        assert_eq!(strip_exchange_suffix("SHOP.TO"), "SHOP");
        assert_eq!(strip_exchange_suffix("petr4.sa"), "petr4");
        assert_eq!(strip_exchange_suffix("AAPL"), "AAPL");
        assert_eq!(strip_exchange_suffix(" VOD.L "), "VOD");

        // Share classes preserved
        assert_eq!(strip_exchange_suffix("BRK.B"), "BRK.B");
        assert_eq!(strip_exchange_suffix("RDS.A"), "RDS.A");

        // Shorter than any suffix
        assert_eq!(strip_exchange_suffix("T"), "T");
    }
}
