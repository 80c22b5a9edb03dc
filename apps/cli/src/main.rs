mod render;

use anyhow::{bail, Context};
use stockadvisor_client::{fetch_prediction, ClientConfig, Period, StockApi, StockApiClient};
use stockadvisor_currency::normalize_symbol;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_SYMBOL: &str = "AAPL";

fn init_tracing() {
    let log_format =
        std::env::var("STOCK_ADVISOR_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ClientConfig::from_env();
    init_tracing();

    let raw = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_SYMBOL.to_string());
    let symbol = normalize_symbol(&raw).with_context(|| format!("Invalid symbol '{}'", raw))?;

    let client = StockApiClient::new(&config)?;
    tracing::info!("Using Stock Advisor API at {}", client.base_url());

    match client.health().await {
        Ok(status) if status.is_healthy() => {}
        Ok(status) => bail!("API at {} reports status '{}'", client.base_url(), status.status),
        Err(e) => bail!("API at {} is offline: {}", client.base_url(), e),
    }

    let info = match client.stock_info(&symbol).await {
        Ok(info) => info,
        Err(e) if e.is_not_found() || e.is_invalid_input() => {
            bail!("Unknown symbol {}: {}", symbol, e)
        }
        Err(e) => {
            tracing::warn!("Quote unavailable for {}: {}", symbol, e);
            println!("{}\n{}", symbol, render::unavailable_quote());
            return Ok(());
        }
    };

    let (history, prediction) = tokio::join!(
        client.history(&symbol, Period::OneYear),
        fetch_prediction(&client, &symbol)
    );
    let history = history
        .map_err(|e| tracing::warn!("History unavailable for {}: {}", symbol, e))
        .ok();
    let prediction = prediction
        .map_err(|e| tracing::warn!("Prediction unavailable for {}: {}", symbol, e))
        .ok();

    println!(
        "{}",
        render::render_card(&info, history.as_ref(), prediction.as_ref())
    );
    Ok(())
}
