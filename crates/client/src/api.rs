use async_trait::async_trait;

use crate::errors::Result;
use crate::models::{
    AdvancedPrediction, HealthStatus, HistoricalData, Period, Prediction, StockInfo,
    TrainingPeriod,
};

/// Operations offered by the Stock Advisor API.
///
/// Symbols are validated and upper-cased by implementations before use.
#[async_trait]
pub trait StockApi: Send + Sync {
    /// Probe the service.
    async fn health(&self) -> Result<HealthStatus>;

    /// Current quote and key metrics.
    async fn stock_info(&self, symbol: &str) -> Result<StockInfo>;

    /// Daily bars over `period`.
    async fn history(&self, symbol: &str, period: Period) -> Result<HistoricalData>;

    /// Single-model prediction `days_ahead` trading days out (1..=30).
    async fn predict(&self, symbol: &str, days_ahead: u32) -> Result<Prediction>;

    /// Ensemble prediction trained on `period` of data.
    async fn predict_advanced(
        &self,
        symbol: &str,
        period: TrainingPeriod,
    ) -> Result<AdvancedPrediction>;
}
