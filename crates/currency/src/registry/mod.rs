//! Static currency, locale and exchange suffix tables.

pub(crate) mod catalog;

pub use catalog::{
    currency_by_code, default_currency, default_exchange, locale_format, suffix_rules,
    supported_currencies, validate_catalog, Catalog,
};
