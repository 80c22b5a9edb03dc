//! JSON-driven currency catalog.
//!
//! Loads `catalog.json` at compile time via `include_str!`, checks the table
//! invariants and builds lookup indexes once via `lazy_static`.

use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;
use serde::Deserialize;

use crate::errors::CatalogError;
use crate::models::{CurrencyDescriptor, ExchangeSuffixRule, LocaleFormat};

// ── JSON schema ──────────────────────────────────────────────────────────────

/// The raw tables as stored in `catalog.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    pub default_currency: String,
    pub default_exchange: String,
    pub locales: Vec<LocaleFormat>,
    pub currencies: Vec<CurrencyDescriptor>,
    pub suffix_rules: Vec<ExchangeSuffixRule>,
}

impl Catalog {
    /// Parse a catalog from JSON without validating it.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        serde_json::from_str(json).map_err(|e| CatalogError::Malformed(e.to_string()))
    }
}

// ── Registry with pre-built indexes ──────────────────────────────────────────

pub(crate) struct CurrencyRegistry {
    catalog: Catalog,
    /// code → index into `catalog.currencies`
    currency_by_code: HashMap<String, usize>,
    /// locale tag → index into `catalog.locales`
    locale_by_tag: HashMap<String, usize>,
    default_currency: usize,
    default_locale: usize,
}

lazy_static! {
    pub(crate) static ref REGISTRY: CurrencyRegistry = CurrencyRegistry::load();
}

impl CurrencyRegistry {
    fn load() -> Self {
        let catalog =
            Catalog::from_json(include_str!("catalog.json")).expect("catalog.json must be valid");
        Self::build(catalog).unwrap_or_else(|e| panic!("catalog.json violates an invariant: {e}"))
    }

    /// Validate `catalog` and index it.
    pub(crate) fn build(catalog: Catalog) -> Result<Self, CatalogError> {
        let mut locale_by_tag = HashMap::new();
        for (idx, locale) in catalog.locales.iter().enumerate() {
            if locale_by_tag.insert(locale.tag.clone(), idx).is_some() {
                return Err(CatalogError::DuplicateLocale(locale.tag.clone()));
            }
        }

        let mut currency_by_code = HashMap::new();
        for (idx, currency) in catalog.currencies.iter().enumerate() {
            if !locale_by_tag.contains_key(&currency.locale) {
                return Err(CatalogError::UnknownLocale {
                    currency: currency.code.clone(),
                    locale: currency.locale.clone(),
                });
            }
            if currency_by_code.insert(currency.code.clone(), idx).is_some() {
                return Err(CatalogError::DuplicateCurrency(currency.code.clone()));
            }
        }

        let default_currency = *currency_by_code
            .get(&catalog.default_currency)
            .ok_or_else(|| CatalogError::MissingDefaultCurrency(catalog.default_currency.clone()))?;
        let default_locale = locale_by_tag[&catalog.currencies[default_currency].locale];

        check_suffix_rules(&catalog.suffix_rules, &currency_by_code)?;

        Ok(Self {
            catalog,
            currency_by_code,
            locale_by_tag,
            default_currency,
            default_locale,
        })
    }

    pub(crate) fn currency(&self, code: &str) -> Option<&CurrencyDescriptor> {
        self.currency_by_code
            .get(code)
            .map(|&idx| &self.catalog.currencies[idx])
    }

    pub(crate) fn default_currency(&self) -> &CurrencyDescriptor {
        &self.catalog.currencies[self.default_currency]
    }

    pub(crate) fn default_exchange(&self) -> &str {
        &self.catalog.default_exchange
    }

    /// Locale conventions for `tag`, or those of the default currency.
    pub(crate) fn locale(&self, tag: &str) -> &LocaleFormat {
        let idx = self
            .locale_by_tag
            .get(tag)
            .copied()
            .unwrap_or(self.default_locale);
        &self.catalog.locales[idx]
    }

    pub(crate) fn currencies(&self) -> &[CurrencyDescriptor] {
        &self.catalog.currencies
    }

    pub(crate) fn rules(&self) -> &[ExchangeSuffixRule] {
        &self.catalog.suffix_rules
    }
}

fn check_suffix_rules(
    rules: &[ExchangeSuffixRule],
    currency_by_code: &HashMap<String, usize>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for rule in rules {
        if rule.suffix.is_empty() {
            return Err(CatalogError::EmptySuffix {
                exchange: rule.exchange.clone(),
            });
        }
        // Tickers are upper-cased before matching
        if rule.suffix != rule.suffix.to_ascii_uppercase() {
            return Err(CatalogError::NonCanonicalSuffix(rule.suffix.clone()));
        }
        if !seen.insert(rule.suffix.as_str()) {
            return Err(CatalogError::DuplicateSuffix(rule.suffix.clone()));
        }
        if !currency_by_code.contains_key(&rule.currency) {
            return Err(CatalogError::UnknownCurrency {
                suffix: rule.suffix.clone(),
                currency: rule.currency.clone(),
            });
        }
    }

    // A ticker may match at most one rule
    for rule in rules {
        if let Some(other) = rules
            .iter()
            .find(|other| other.suffix != rule.suffix && rule.suffix.ends_with(&other.suffix))
        {
            return Err(CatalogError::OverlappingSuffix {
                suffix: rule.suffix.clone(),
                other: other.suffix.clone(),
            });
        }
    }

    Ok(())
}

// ── Public lookups ───────────────────────────────────────────────────────────

/// Look up a currency descriptor by code. Case-insensitive, ignores padding.
pub fn currency_by_code(code: &str) -> Option<&'static CurrencyDescriptor> {
    REGISTRY.currency(&code.trim().to_ascii_uppercase())
}

/// The fallback currency for tickers without a known suffix (USD).
pub fn default_currency() -> &'static CurrencyDescriptor {
    REGISTRY.default_currency()
}

/// The fallback exchange label ("NASDAQ/NYSE").
pub fn default_exchange() -> &'static str {
    REGISTRY.default_exchange()
}

/// Number conventions for a locale tag, falling back to the default currency's locale.
pub fn locale_format(tag: &str) -> &'static LocaleFormat {
    REGISTRY.locale(tag)
}

/// All supported currencies in catalog order.
pub fn supported_currencies() -> &'static [CurrencyDescriptor] {
    REGISTRY.currencies()
}

/// All exchange suffix rules in matching order.
pub fn suffix_rules() -> &'static [ExchangeSuffixRule] {
    REGISTRY.rules()
}

/// Check a catalog against the table invariants without installing it.
pub fn validate_catalog(catalog: &Catalog) -> Result<(), CatalogError> {
    CurrencyRegistry::build(catalog.clone()).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Grouping, SymbolPosition};

    fn shipped() -> Catalog {
        Catalog::from_json(include_str!("catalog.json")).unwrap()
    }

    fn rule(suffix: &str, currency: &str) -> ExchangeSuffixRule {
        ExchangeSuffixRule {
            suffix: suffix.to_string(),
            exchange: format!("Exchange {}", suffix),
            currency: currency.to_string(),
        }
    }

    #[test]
    fn test_shipped_catalog_is_valid() {
        assert_eq!(validate_catalog(&shipped()), Ok(()));
    }

    #[test]
    fn test_every_rule_references_known_currency() {
        for rule in suffix_rules() {
            assert!(
                currency_by_code(&rule.currency).is_some(),
                "{} -> {}",
                rule.suffix,
                rule.currency
            );
        }
    }

    #[test]
    fn test_currency_by_code() {
        assert_eq!(currency_by_code("BRL").unwrap().symbol, "R$");
        assert_eq!(currency_by_code(" brl ").unwrap().code, "BRL");
        assert_eq!(currency_by_code("JPY").unwrap().minor_units, 0);
        assert!(currency_by_code("XYZ").is_none());
        assert!(currency_by_code("").is_none());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(default_currency().code, "USD");
        assert_eq!(default_currency().locale, "en-US");
        assert_eq!(default_exchange(), "NASDAQ/NYSE");
    }

    #[test]
    fn test_locale_format() {
        let br = locale_format("pt-BR");
        assert_eq!(br.decimal, ',');
        assert_eq!(br.group, '.');
        assert!(br.symbol_spacing);

        let de = locale_format("de-DE");
        assert_eq!(de.symbol_position, SymbolPosition::Suffix);

        assert_eq!(locale_format("en-IN").grouping, Grouping::Indian);

        // Unknown tags fall back to en-US
        assert_eq!(locale_format("xx-XX").tag, "en-US");
    }

    #[test]
    fn test_tables_are_listed_in_order() {
        assert_eq!(supported_currencies().len(), 13);
        assert_eq!(supported_currencies()[0].code, "USD");
        assert_eq!(suffix_rules().len(), 17);
        assert_eq!(suffix_rules()[0].suffix, ".SA");
    }

    #[test]
    fn test_rejects_duplicate_suffix() {
        let mut catalog = shipped();
        catalog.suffix_rules.push(rule(".SA", "BRL"));
        assert_eq!(
            validate_catalog(&catalog),
            Err(CatalogError::DuplicateSuffix(".SA".to_string()))
        );
    }

    #[test]
    fn test_rejects_overlapping_suffix() {
        let mut catalog = shipped();
        catalog.suffix_rules.push(rule("A", "USD"));
        assert_eq!(
            validate_catalog(&catalog),
            Err(CatalogError::OverlappingSuffix {
                suffix: ".SA".to_string(),
                other: "A".to_string(),
            })
        );
    }

    #[test]
    fn test_rejects_unknown_currency_reference() {
        let mut catalog = shipped();
        catalog.suffix_rules.push(rule(".XX", "XXX"));
        assert_eq!(
            validate_catalog(&catalog),
            Err(CatalogError::UnknownCurrency {
                suffix: ".XX".to_string(),
                currency: "XXX".to_string(),
            })
        );
    }

    #[test]
    fn test_rejects_lowercase_and_empty_suffix() {
        let mut catalog = shipped();
        catalog.suffix_rules.push(rule(".de", "EUR"));
        assert_eq!(
            validate_catalog(&catalog),
            Err(CatalogError::NonCanonicalSuffix(".de".to_string()))
        );

        let mut catalog = shipped();
        catalog.suffix_rules.push(rule("", "EUR"));
        assert!(matches!(
            validate_catalog(&catalog),
            Err(CatalogError::EmptySuffix { .. })
        ));
    }

    #[test]
    fn test_rejects_unknown_locale() {
        let mut catalog = shipped();
        catalog.currencies[0].locale = "xx-XX".to_string();
        assert_eq!(
            validate_catalog(&catalog),
            Err(CatalogError::UnknownLocale {
                currency: "USD".to_string(),
                locale: "xx-XX".to_string(),
            })
        );
    }

    #[test]
    fn test_rejects_missing_default_currency() {
        let mut catalog = shipped();
        catalog.default_currency = "ZZZ".to_string();
        assert_eq!(
            validate_catalog(&catalog),
            Err(CatalogError::MissingDefaultCurrency("ZZZ".to_string()))
        );
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            Catalog::from_json("{"),
            Err(CatalogError::Malformed(_))
        ));
    }
}
