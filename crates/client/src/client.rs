//! HTTP client for the Stock Advisor API.

use async_trait::async_trait;
use log::debug;
use serde::de::DeserializeOwned;
use stockadvisor_currency::normalize_symbol;

use crate::api::StockApi;
use crate::config::ClientConfig;
use crate::errors::{ClientError, Result};
use crate::models::{
    AdvancedPrediction, HealthStatus, HistoricalData, Period, Prediction, StockInfo,
    TrainingPeriod,
};

/// Accepted range for `days_ahead` on the basic prediction endpoint.
pub const DAYS_AHEAD_RANGE: std::ops::RangeInclusive<u32> = 1..=30;

// ─────────────────────────────────────────────────────────────────────────────
// API Error Body
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, serde::Deserialize)]
struct ApiErrorResponse {
    detail: Option<serde_json::Value>,
    message: Option<String>,
    error: Option<String>,
}

/// Extract a readable message from an error body.
fn api_error_message(status: reqwest::StatusCode, body: &str) -> String {
    if let Ok(err) = serde_json::from_str::<ApiErrorResponse>(body) {
        let detail = err.detail.map(|d| match d {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        });
        if let Some(msg) = detail.or(err.message).or(err.error) {
            return msg;
        }
    }
    if body.trim().is_empty() {
        return format!("HTTP {}", status);
    }
    body.chars().take(200).collect()
}

/// Client for the Stock Advisor REST API.
///
/// # Example
///
/// ```ignore
/// let client = StockApiClient::new(&ClientConfig::from_env())?;
/// let info = client.stock_info("petr4.sa").await?;
/// ```
#[derive(Debug, Clone)]
pub struct StockApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl StockApiClient {
    /// Create a new client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ClientError::Request(format!("Failed to initialize HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the path `/{prefix}/{symbol}` for a validated symbol.
    fn symbol_path(prefix: &str, symbol: &str) -> Result<String> {
        let symbol = normalize_symbol(symbol)?;
        Ok(format!("{}/{}", prefix, urlencoding::encode(&symbol)))
    }

    /// Make a GET request and parse the response.
    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("[StockApi] GET {} {:?}", url, query);

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ClientError::Timeout(path.to_string())
                } else {
                    ClientError::Request(e.to_string())
                }
            })?;

        Self::parse_response(response).await
    }

    /// Parse an HTTP response, handling errors appropriately.
    async fn parse_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Request(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: api_error_message(status, &body),
            });
        }

        serde_json::from_str(&body).map_err(|e| ClientError::Decode(e.to_string()))
    }
}

#[async_trait]
impl StockApi for StockApiClient {
    async fn health(&self) -> Result<HealthStatus> {
        self.get("/health", &[]).await
    }

    async fn stock_info(&self, symbol: &str) -> Result<StockInfo> {
        let path = Self::symbol_path("/stock/info", symbol)?;
        self.get(&path, &[]).await
    }

    async fn history(&self, symbol: &str, period: Period) -> Result<HistoricalData> {
        let path = Self::symbol_path("/stock/history", symbol)?;
        self.get(&path, &[("period", period.to_string())]).await
    }

    async fn predict(&self, symbol: &str, days_ahead: u32) -> Result<Prediction> {
        let path = Self::symbol_path("/stock/predict", symbol)?;
        if !DAYS_AHEAD_RANGE.contains(&days_ahead) {
            return Err(ClientError::InvalidArgument(format!(
                "days_ahead must be between {} and {}, got {}",
                DAYS_AHEAD_RANGE.start(),
                DAYS_AHEAD_RANGE.end(),
                days_ahead
            )));
        }
        self.get(&path, &[("days_ahead", days_ahead.to_string())]).await
    }

    async fn predict_advanced(
        &self,
        symbol: &str,
        period: TrainingPeriod,
    ) -> Result<AdvancedPrediction> {
        let path = Self::symbol_path("/stock/predict-advanced", symbol)?;
        self.get(&path, &[("period", period.to_string())]).await
    }
}
