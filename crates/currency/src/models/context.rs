/// Inputs for resolving how a quote should be displayed.
///
/// `currency_hint` and `exchange_hint` carry the authoritative values an API
/// response may supply; when present they win over the ticker suffix.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DisplayContext<'a> {
    pub symbol: &'a str,
    pub currency_hint: Option<&'a str>,
    pub exchange_hint: Option<&'a str>,
}

impl<'a> DisplayContext<'a> {
    pub fn new(symbol: &'a str) -> Self {
        Self {
            symbol,
            currency_hint: None,
            exchange_hint: None,
        }
    }

    pub fn with_currency(mut self, currency: Option<&'a str>) -> Self {
        self.currency_hint = currency;
        self
    }

    pub fn with_exchange(mut self, exchange: Option<&'a str>) -> Self {
        self.exchange_hint = exchange;
        self
    }
}
