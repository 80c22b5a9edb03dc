//! Response models of the Stock Advisor API
//!
//! - `health` - Service health probe
//! - `stock` - Current quote and key metrics (StockInfo)
//! - `history` - Daily OHLCV bars and the supported periods
//! - `prediction` - Basic and ensemble price predictions

mod health;
mod history;
mod prediction;
mod stock;

pub use health::HealthStatus;
pub use history::{HistoricalBar, HistoricalData, Period, TrainingPeriod};
pub use prediction::{AdvancedPrediction, Prediction};
pub use stock::StockInfo;
