use serde::{Deserialize, Serialize};

/// Direction of a price change, mapped to a visual treatment by the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorToken {
    Positive,
    Negative,
    Neutral,
}

impl ColorToken {
    /// Classify a change value. NaN counts as no change.
    pub fn from_change(value: f64) -> Self {
        if value > 0.0 {
            ColorToken::Positive
        } else if value < 0.0 {
            ColorToken::Negative
        } else {
            ColorToken::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorToken::Positive => "positive",
            ColorToken::Negative => "negative",
            ColorToken::Neutral => "neutral",
        }
    }
}
