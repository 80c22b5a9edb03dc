use serde::{Deserialize, Serialize};
use stockadvisor_currency::DisplayContext;

/// Response of `GET /stock/info/{symbol}`.
///
/// `currency` and `exchange` are authoritative when present and take
/// precedence over values derived from the ticker suffix.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StockInfo {
    pub symbol: String,
    #[serde(default)]
    pub name: String,
    pub current_price: f64,
    #[serde(default)]
    pub previous_close: f64,
    pub change: f64,
    pub change_percent: f64,
    #[serde(default)]
    pub volume: u64,
    #[serde(default)]
    pub market_cap: Option<u64>,
    #[serde(default)]
    pub pe_ratio: Option<f64>,
    /// Fraction, e.g. 0.0052 for 0.52%.
    #[serde(default)]
    pub dividend_yield: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub exchange: Option<String>,
}

impl StockInfo {
    /// Context for resolving display currency and exchange with API overrides.
    pub fn display_context(&self) -> DisplayContext<'_> {
        DisplayContext::new(&self.symbol)
            .with_currency(self.currency.as_deref())
            .with_exchange(self.exchange.as_deref())
    }
}
