use serde::{Deserialize, Deserializer};

use crate::domain::errors::{PanelError, PanelResult};

/// Decoded broadcast payload: `{"sentiment": <number|string>, "pred": [<number>, ...]}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Prediction {
    #[serde(deserialize_with = "number_or_numeric_string")]
    pub sentiment: f64,
    pub pred: Vec<f64>,
}

impl Prediction {
    /// Decode a raw broadcast body. Nothing is mutated on failure.
    pub fn decode(raw: &str) -> PanelResult<Self> {
        let prediction: Prediction = serde_json::from_str(raw)?;
        if !prediction.sentiment.is_finite() {
            return Err(PanelError::MalformedPayload(format!(
                "sentiment is not finite: {}",
                prediction.sentiment
            )));
        }
        Ok(prediction)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    Text(String),
}

fn number_or_numeric_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(value) => Ok(value),
        NumberOrString::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|e| serde::de::Error::custom(format!("sentiment {:?}: {}", text, e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_nan_text() {
        let err = Prediction::decode(r#"{"sentiment":"NaN","pred":[]}"#).unwrap_err();
        assert!(matches!(err, PanelError::MalformedPayload(_)));
    }
}
