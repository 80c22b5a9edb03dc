//! Stock Advisor API Client
//!
//! Typed access to the Stock Advisor REST API: quotes, history and price
//! predictions. Symbols are validated with the same rule as the dashboard
//! search box before any request is made.
//!
//! # Core Types
//!
//! - [`StockApi`] - The API operations, implemented over HTTP by [`StockApiClient`]
//! - [`ClientConfig`] - Base URL and timeout, read from the environment
//! - [`StockInfo`] - Quote with optional authoritative currency and exchange
//! - [`PredictionOutcome`] - Ensemble prediction or the basic fallback

pub mod api;
pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod prediction;

pub use api::StockApi;
pub use client::{StockApiClient, DAYS_AHEAD_RANGE};
pub use config::{ClientConfig, DEFAULT_API_URL};
pub use errors::{ClientError, Result};
pub use models::{
    AdvancedPrediction, HealthStatus, HistoricalBar, HistoricalData, Period, Prediction,
    StockInfo, TrainingPeriod,
};
pub use prediction::{confidence_score, fetch_prediction, PredictionOutcome, BASIC_MODEL};
