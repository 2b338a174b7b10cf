//! # Prediction Result
//!
//! Body returned by the prediction endpoint on success.
//!
//! Only `prediction` and `confidence` are required; the endpoint may add a
//! per-species probability map, latency, model version and a timestamp.
//!
//! ```rust
//! use iris_core::prediction::PredictionResult;
//! use iris_core::species::Species;
//!
//! let result = PredictionResult::from_json(r#"{"prediction":"setosa","confidence":97.5}"#).unwrap();
//! assert_eq!(result.prediction, Species::Setosa);
//! assert!(result.probabilities.is_none());
//! ```

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::errors::{IrisError, IrisResult};
use crate::species::Species;

/// Epoch values below this are read as seconds, at or above as milliseconds
const EPOCH_MILLIS_THRESHOLD: f64 = 1e11;

/// Successful classification returned by the endpoint.
///
/// Optional metadata the client cannot read is dropped with a warning and
/// never costs the caller the prediction itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Predicted species
    pub prediction: Species,

    /// Confidence in percent (0-100)
    pub confidence: f64,

    /// Per-species probability in percent
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_probabilities"
    )]
    pub probabilities: Option<BTreeMap<Species, f64>>,

    /// Server-side inference latency
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_latency")]
    pub latency_ms: Option<f64>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_model_version"
    )]
    pub model_version: Option<String>,

    /// When the prediction was made (RFC 3339 string or epoch number on the wire)
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_timestamp")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl PredictionResult {
    /// Minimal result with only the required fields
    pub fn new(prediction: Species, confidence: f64) -> Self {
        PredictionResult {
            prediction,
            confidence,
            probabilities: None,
            latency_ms: None,
            model_version: None,
            timestamp: None,
        }
    }

    /// Decode and validate a response body
    pub fn from_json(body: &str) -> IrisResult<Self> {
        let result: PredictionResult =
            serde_json::from_str(body).map_err(|e| IrisError::malformed(e.to_string()))?;
        result.validate()?;
        Ok(result)
    }

    /// Check that the required confidence is usable for display
    pub fn validate(&self) -> IrisResult<()> {
        if !self.confidence.is_finite() || !(0.0..=100.0).contains(&self.confidence) {
            return Err(IrisError::malformed(format!(
                "confidence {} is outside 0-100",
                self.confidence
            )));
        }
        Ok(())
    }

    /// Probabilities sorted from most to least likely
    pub fn ranked_probabilities(&self) -> Vec<(Species, f64)> {
        let mut ranked: Vec<(Species, f64)> = self
            .probabilities
            .as_ref()
            .map(|p| p.iter().map(|(s, v)| (*s, *v)).collect())
            .unwrap_or_default();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }
}

fn lenient_probabilities<'de, D>(deserializer: D) -> Result<Option<BTreeMap<Species, f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = match Option::<Value>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(Value::Object(entries)) => entries,
        Some(other) => {
            tracing::warn!(value = %other, "Ignoring probabilities that are not an object");
            return Ok(None);
        }
    };

    let mut probabilities = BTreeMap::new();
    for (key, value) in entries {
        let species = match Species::from_str_flexible(&key) {
            Ok(species) => species,
            Err(_) => {
                tracing::warn!(key = %key, "Ignoring probability for unknown species");
                continue;
            }
        };
        match value.as_f64().filter(|p| p.is_finite()) {
            Some(p) => {
                probabilities.insert(species, p);
            }
            None => tracing::warn!(key = %key, value = %value, "Ignoring non-numeric probability"),
        }
    }

    Ok(Some(probabilities).filter(|p| !p.is_empty()))
}

fn lenient_latency<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(value) = Option::<Value>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let latency = value.as_f64().filter(|ms| ms.is_finite() && *ms >= 0.0);
    if latency.is_none() {
        tracing::warn!(value = %value, "Ignoring invalid latency_ms");
    }
    Ok(latency)
}

fn lenient_model_version<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Value::String(version)) => Ok(Some(version)),
        Some(other) => {
            tracing::warn!(value = %other, "Ignoring model_version that is not a string");
            Ok(None)
        }
    }
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(value) = Option::<Value>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let timestamp = match &value {
        Value::Number(n) => n.as_f64().and_then(epoch_to_datetime),
        Value::String(text) => parse_timestamp_text(text),
        _ => None,
    };
    if timestamp.is_none() {
        tracing::warn!(value = %value, "Ignoring unreadable timestamp");
    }
    Ok(timestamp)
}

/// Convert an epoch number (seconds or milliseconds) to UTC
pub fn epoch_to_datetime(value: f64) -> Option<DateTime<Utc>> {
    if !value.is_finite() {
        return None;
    }
    let millis = if value.abs() < EPOCH_MILLIS_THRESHOLD {
        value * 1000.0
    } else {
        value
    };
    Utc.timestamp_millis_opt(millis.round() as i64).single()
}

/// Parse an RFC 3339 timestamp, a naive ISO-8601 one treated as UTC, or an
/// epoch number sent as a string
pub fn parse_timestamp_text(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Some(naive) = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
    {
        return Some(naive.and_utc());
    }
    let is_epoch = !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit() || b == b'.');
    if is_epoch {
        return text.parse::<f64>().ok().and_then(epoch_to_datetime);
    }
    None
}
