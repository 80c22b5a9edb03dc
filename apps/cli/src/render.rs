//! Text rendering of the stock card. Pure: takes fetched data, returns lines.

use stockadvisor_client::{HistoricalData, PredictionOutcome, StockInfo};
use stockadvisor_currency::{
    format_percent, format_signed_percent, get_change_color, resolve_display, ResolvedDisplay,
    PLACEHOLDER,
};

const UNAVAILABLE: &str = "data unavailable";

const SCALES: [(f64, &str); 4] = [(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "K")];

/// Compact rendering for volumes and market caps: `1_234_567.0` -> `"1.23M"`.
pub fn format_large_number(value: f64) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }
    let magnitude = value.abs();
    for (scale, unit) in SCALES {
        if magnitude >= scale {
            return format!("{:.2}{}", value / scale, unit);
        }
    }
    format!("{:.0}", value)
}

/// Line shown in place of the card when the quote itself cannot be loaded.
pub fn unavailable_quote() -> String {
    format!("Quote:      {}", UNAVAILABLE)
}

/// Render the full card. Missing sections render as "data unavailable".
pub fn render_card(
    info: &StockInfo,
    history: Option<&HistoricalData>,
    prediction: Option<&PredictionOutcome>,
) -> String {
    let display = resolve_display(&info.display_context());
    let mut lines = quote_lines(info, &display);
    lines.push(history_line(history, &display));
    lines.push(prediction_line(prediction, &display));
    lines.join("\n")
}

fn quote_lines(info: &StockInfo, display: &ResolvedDisplay<'_>) -> Vec<String> {
    let title = if info.name.is_empty() {
        info.symbol.clone()
    } else {
        format!("{} ({})", info.name, info.symbol)
    };

    let mut lines = vec![
        title,
        format!(
            "Exchange:   {}    Currency: {}",
            display.exchange, display.currency.code
        ),
        format!("Price:      {}", display.format(info.current_price)),
        format!(
            "Change:     {} ({}) [{}]",
            display.format_signed(info.change),
            format_signed_percent(info.change_percent),
            get_change_color(info.change).as_str()
        ),
        format!("Volume:     {}", format_large_number(info.volume as f64)),
    ];
    if let Some(market_cap) = info.market_cap {
        lines.push(format!(
            "Market cap: {} {}",
            format_large_number(market_cap as f64),
            display.currency.code
        ));
    }
    if let Some(pe) = info.pe_ratio {
        lines.push(format!("P/E:        {:.2}", pe));
    }
    if let Some(dividend_yield) = info.dividend_yield {
        lines.push(format!(
            "Div yield:  {}",
            format_percent(dividend_yield * 100.0)
        ));
    }
    lines
}

fn history_line(history: Option<&HistoricalData>, display: &ResolvedDisplay<'_>) -> String {
    let Some(history) = history else {
        return format!("History:    {}", UNAVAILABLE);
    };
    let (Some(last), Some((low, high)), Some((from, to))) = (
        history.last_close(),
        history.price_range(),
        history.date_span(),
    ) else {
        return format!("History ({}): no bars", history.period);
    };

    format!(
        "History ({}): last close {}, range {} - {}, {} to {}",
        history.period,
        display.format(last),
        display.format(low),
        display.format(high),
        from,
        to
    )
}

fn prediction_line(prediction: Option<&PredictionOutcome>, display: &ResolvedDisplay<'_>) -> String {
    let Some(outcome) = prediction else {
        return format!("Prediction: {}", UNAVAILABLE);
    };
    let p = outcome.prediction();

    format!(
        "Prediction ({}): {} ({}) for {}, confidence {} ({:.2})",
        outcome.source_label(),
        display.format(p.predicted_price),
        format_signed_percent(p.price_change_pct),
        p.prediction_date,
        p.model_confidence,
        p.confidence_score
    )
}
