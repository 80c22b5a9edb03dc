use serde::{Deserialize, Serialize};

/// Maps a trailing ticker suffix to an exchange and its trading currency.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeSuffixRule {
    /// Upper-case suffix matched against the end of a ticker (e.g. ".SA").
    pub suffix: String,
    /// Exchange label (e.g. "B3 (São Paulo)").
    pub exchange: String,
    /// Currency code, must exist in the currency table.
    pub currency: String,
}

impl ExchangeSuffixRule {
    /// Whether `canonical_ticker` ends with this rule's suffix.
    pub fn matches(&self, canonical_ticker: &str) -> bool {
        canonical_ticker.ends_with(self.suffix.as_str())
    }
}
