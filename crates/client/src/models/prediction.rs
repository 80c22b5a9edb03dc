use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Response of `GET /stock/predict/{symbol}` (single model).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub symbol: String,
    pub current_price: f64,
    pub predicted_price: f64,
    pub price_change_pct: f64,
    pub prediction_date: String,
    /// "High", "Medium" or "Low".
    pub model_confidence: String,
}

/// Response of `GET /stock/predict-advanced/{symbol}` (ensemble).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdvancedPrediction {
    pub symbol: String,
    pub current_price: f64,
    pub predicted_price: f64,
    pub price_change: f64,
    pub price_change_pct: f64,
    pub prediction_date: String,
    pub model_confidence: String,
    pub confidence_score: f64,
    #[serde(default)]
    pub individual_predictions: BTreeMap<String, f64>,
    #[serde(default)]
    pub model_weights: BTreeMap<String, f64>,
    #[serde(default)]
    pub prediction_std: f64,
    #[serde(default)]
    pub prediction_range: f64,
}
