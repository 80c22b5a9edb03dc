//! Prediction with fallback.
//!
//! The ensemble endpoint is slow and can fail on short histories, so the
//! dashboard asks for it first and falls back to the single-model prediction,
//! reshaped into the ensemble format.

use std::collections::BTreeMap;

use log::{debug, warn};

use crate::api::StockApi;
use crate::errors::{ClientError, Result};
use crate::models::{AdvancedPrediction, Prediction, TrainingPeriod};

/// Name of the only model in a prediction converted from the basic endpoint.
pub const BASIC_MODEL: &str = "basic_model";

/// Training window used for the ensemble request.
const ADVANCED_PERIOD: TrainingPeriod = TrainingPeriod::OneYear;

/// Days ahead requested from the basic endpoint.
const BASIC_DAYS_AHEAD: u32 = 1;

/// Which endpoint produced the prediction.
#[derive(Clone, Debug, PartialEq)]
pub enum PredictionOutcome {
    /// The ensemble endpoint answered.
    Advanced(AdvancedPrediction),
    /// The ensemble failed; this is the basic prediction in ensemble shape.
    Basic(AdvancedPrediction),
}

impl PredictionOutcome {
    pub fn prediction(&self) -> &AdvancedPrediction {
        match self {
            PredictionOutcome::Advanced(p) | PredictionOutcome::Basic(p) => p,
        }
    }

    pub fn into_prediction(self) -> AdvancedPrediction {
        match self {
            PredictionOutcome::Advanced(p) | PredictionOutcome::Basic(p) => p,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, PredictionOutcome::Basic(_))
    }

    pub fn source_label(&self) -> &'static str {
        match self {
            PredictionOutcome::Advanced(_) => "ensemble",
            PredictionOutcome::Basic(_) => "basic",
        }
    }
}

/// Map a confidence label to the score the ensemble endpoint would report.
pub fn confidence_score(label: &str) -> f64 {
    match label {
        "High" => 0.9,
        "Medium" => 0.7,
        _ => 0.5,
    }
}

impl From<Prediction> for AdvancedPrediction {
    fn from(basic: Prediction) -> Self {
        let mut individual_predictions = BTreeMap::new();
        individual_predictions.insert(BASIC_MODEL.to_string(), basic.predicted_price);
        let mut model_weights = BTreeMap::new();
        model_weights.insert(BASIC_MODEL.to_string(), 1.0);

        AdvancedPrediction {
            price_change: basic.predicted_price - basic.current_price,
            confidence_score: confidence_score(&basic.model_confidence),
            symbol: basic.symbol,
            current_price: basic.current_price,
            predicted_price: basic.predicted_price,
            price_change_pct: basic.price_change_pct,
            prediction_date: basic.prediction_date,
            model_confidence: basic.model_confidence,
            individual_predictions,
            model_weights,
            prediction_std: 0.0,
            prediction_range: 0.0,
        }
    }
}

/// Fetch the ensemble prediction, falling back to the basic one.
///
/// Input errors are returned as-is since the fallback would hit them too.
pub async fn fetch_prediction<A>(api: &A, symbol: &str) -> Result<PredictionOutcome>
where
    A: StockApi + ?Sized,
{
    let advanced = match api.predict_advanced(symbol, ADVANCED_PERIOD).await {
        Ok(prediction) => return Ok(PredictionOutcome::Advanced(prediction)),
        Err(e) if e.is_invalid_input() => return Err(e),
        Err(e) => e,
    };
    warn!(
        "Advanced prediction failed for {}, trying basic prediction: {}",
        symbol, advanced
    );

    match api.predict(symbol, BASIC_DAYS_AHEAD).await {
        Ok(basic) => {
            debug!("Using basic prediction for {}", symbol);
            Ok(PredictionOutcome::Basic(basic.into()))
        }
        Err(basic) => Err(ClientError::PredictionUnavailable {
            advanced: Box::new(advanced),
            basic: Box::new(basic),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use stockadvisor_currency::SymbolError;

    use super::*;
    use crate::models::{HealthStatus, HistoricalData, Period, StockInfo};

    struct FakeApi {
        advanced: Result<AdvancedPrediction>,
        basic: Result<Prediction>,
        basic_calls: AtomicUsize,
    }

    impl FakeApi {
        fn new(advanced: Result<AdvancedPrediction>, basic: Result<Prediction>) -> Self {
            Self {
                advanced,
                basic,
                basic_calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl StockApi for FakeApi {
        async fn health(&self) -> Result<HealthStatus> {
            Err(ClientError::Request("unused".to_string()))
        }

        async fn stock_info(&self, _symbol: &str) -> Result<StockInfo> {
            Err(ClientError::Request("unused".to_string()))
        }

        async fn history(&self, _symbol: &str, _period: Period) -> Result<HistoricalData> {
            Err(ClientError::Request("unused".to_string()))
        }

        async fn predict(&self, _symbol: &str, days_ahead: u32) -> Result<Prediction> {
            assert_eq!(days_ahead, 1);
            self.basic_calls.fetch_add(1, Ordering::SeqCst);
            self.basic.clone()
        }

        async fn predict_advanced(
            &self,
            _symbol: &str,
            period: TrainingPeriod,
        ) -> Result<AdvancedPrediction> {
            assert_eq!(period, TrainingPeriod::OneYear);
            self.advanced.clone()
        }
    }

    fn basic(confidence: &str) -> Prediction {
        Prediction {
            symbol: "PETR4.SA".to_string(),
            current_price: 32.44,
            predicted_price: 33.0,
            price_change_pct: 1.73,
            prediction_date: "2024-03-07".to_string(),
            model_confidence: confidence.to_string(),
        }
    }

    fn advanced() -> AdvancedPrediction {
        let mut p = AdvancedPrediction::from(basic("High"));
        p.confidence_score = 0.83;
        p.individual_predictions.clear();
        p.individual_predictions.insert("random_forest".to_string(), 33.1);
        p.individual_predictions.insert("gradient_boosting".to_string(), 32.9);
        p
    }

    fn server_error() -> ClientError {
        ClientError::Api {
            status: 500,
            message: "Failed during advanced prediction training".to_string(),
        }
    }

    #[tokio::test]
    async fn test_advanced_prediction_is_used_when_available() {
        let api = FakeApi::new(Ok(advanced()), Ok(basic("High")));
        let outcome = fetch_prediction(&api, "PETR4.SA").await.unwrap();

        assert!(!outcome.is_fallback());
        assert_eq!(outcome.source_label(), "ensemble");
        assert_eq!(outcome.prediction().confidence_score, 0.83);
        assert_eq!(api.basic_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_falls_back_to_basic_prediction() {
        let api = FakeApi::new(Err(server_error()), Ok(basic("Medium")));
        let outcome = fetch_prediction(&api, "PETR4.SA").await.unwrap();

        assert!(outcome.is_fallback());
        assert_eq!(outcome.source_label(), "basic");
        let prediction = outcome.into_prediction();
        assert_eq!(prediction.confidence_score, 0.7);
        assert_eq!(prediction.model_weights.get(BASIC_MODEL), Some(&1.0));
        assert_eq!(api.basic_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_both_failures_are_reported() {
        let api = FakeApi::new(
            Err(server_error()),
            Err(ClientError::Timeout("/stock/predict/PETR4.SA".to_string())),
        );
        let error = fetch_prediction(&api, "PETR4.SA").await.unwrap_err();

        assert_eq!(
            error,
            ClientError::PredictionUnavailable {
                advanced: Box::new(server_error()),
                basic: Box::new(ClientError::Timeout("/stock/predict/PETR4.SA".to_string())),
            }
        );
    }

    #[tokio::test]
    async fn test_invalid_input_skips_fallback() {
        let api = FakeApi::new(
            Err(ClientError::InvalidSymbol(SymbolError::Empty)),
            Ok(basic("High")),
        );
        let error = fetch_prediction(&api, "").await.unwrap_err();

        assert_eq!(error, ClientError::InvalidSymbol(SymbolError::Empty));
        assert_eq!(api.basic_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_basic_to_advanced_conversion() {
        let converted = AdvancedPrediction::from(basic("High"));

        assert!((converted.price_change - 0.56).abs() < 1e-9);
        assert_eq!(converted.confidence_score, 0.9);
        assert_eq!(
            converted.individual_predictions.get(BASIC_MODEL),
            Some(&33.0)
        );
        assert_eq!(converted.prediction_std, 0.0);
        assert_eq!(converted.prediction_range, 0.0);
        assert_eq!(converted.model_confidence, "High");
    }

    #[test]
    fn test_confidence_score() {
        assert_eq!(confidence_score("High"), 0.9);
        assert_eq!(confidence_score("Medium"), 0.7);
        assert_eq!(confidence_score("Low"), 0.5);
        assert_eq!(confidence_score("unknown"), 0.5);
    }
}
