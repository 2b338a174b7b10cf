//! # Display Text
//!
//! Pure functions turning a [`PredictionResult`] or [`IrisError`] into the
//! strings the GUI and CLI show. Keeping formatting here means both
//! front-ends read the same and the text is testable without a window.

use serde::Serialize;

use crate::errors::IrisError;
use crate::prediction::PredictionResult;
use crate::species::Species;

/// Fixed headline for any failure at the prediction endpoint
pub const BACKEND_ERROR_HEADLINE: &str = "Could not reach AI backend";

/// Headline for input the form could not parse
pub const INPUT_ERROR_HEADLINE: &str = "Invalid input";

/// Shown under errors that may clear up on their own
pub const RETRY_HINT: &str = "You can try again.";

/// One row of the probability breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbabilityRow {
    pub species: Species,
    pub percent: f64,
    pub text: String,
}

/// Rendered success state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultView {
    /// e.g. "Prediction: SETOSA"
    pub species_label: String,
    /// e.g. "Confidence: 97.50%"
    pub confidence_text: String,
    pub description: String,
    /// Most likely first; empty when the endpoint sent no breakdown
    pub probabilities: Vec<ProbabilityRow>,
    pub latency_text: Option<String>,
    pub model_version_text: Option<String>,
    pub timestamp_text: Option<String>,
}

impl ResultView {
    pub fn from_result(result: &PredictionResult) -> Self {
        let probabilities = result
            .ranked_probabilities()
            .into_iter()
            .map(|(species, percent)| ProbabilityRow {
                species,
                percent,
                text: format!("{}: {:.2}%", species.display_name(), percent),
            })
            .collect();

        ResultView {
            species_label: format!("Prediction: {}", result.prediction.key().to_uppercase()),
            confidence_text: format!("Confidence: {:.2}%", result.confidence),
            description: result.prediction.description().to_string(),
            probabilities,
            latency_text: result.latency_ms.map(|ms| format!("Latency: {:.1} ms", ms)),
            model_version_text: result.model_version.as_ref().map(|v| format!("Model: {}", v)),
            timestamp_text: result
                .timestamp
                .map(|ts| format!("Predicted at: {}", ts.format("%Y-%m-%d %H:%M:%S UTC"))),
        }
    }

    /// Metadata lines that are present, in display order
    pub fn metadata_lines(&self) -> Vec<&str> {
        [&self.latency_text, &self.model_version_text, &self.timestamp_text]
            .into_iter()
            .filter_map(|line| line.as_deref())
            .collect()
    }
}

/// Rendered error state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorView {
    pub headline: String,
    /// Short cause without internal detail
    pub detail: Option<String>,
    /// Present when resubmitting the same input may succeed
    pub retry_hint: Option<String>,
}

impl ErrorView {
    pub fn from_error(error: &IrisError) -> Self {
        let (headline, detail) = match error {
            IrisError::Transport { .. } => (BACKEND_ERROR_HEADLINE, Some("Network error".to_string())),
            IrisError::HttpStatus { status, .. } => {
                (BACKEND_ERROR_HEADLINE, Some(format!("Server returned HTTP {}", status)))
            }
            IrisError::MalformedResponse { .. } => {
                (BACKEND_ERROR_HEADLINE, Some("Unexpected response".to_string()))
            }
            IrisError::InvalidInput { field, reason, .. } => {
                (INPUT_ERROR_HEADLINE, Some(format!("{}: {}", field_label(field), reason)))
            }
            IrisError::RequestInFlight => (
                "Please wait",
                Some("A classification is already running".to_string()),
            ),
            IrisError::Config { .. } => (BACKEND_ERROR_HEADLINE, Some("Client is misconfigured".to_string())),
        };

        ErrorView {
            headline: headline.to_string(),
            detail,
            retry_hint: error.is_recoverable().then(|| RETRY_HINT.to_string()),
        }
    }

    /// Headline and detail on one line
    pub fn message(&self) -> String {
        match &self.detail {
            Some(detail) => format!("{} ({})", self.headline, detail),
            None => self.headline.clone(),
        }
    }
}

fn field_label(key: &str) -> &str {
    crate::measurement::MeasurementField::ALL
        .iter()
        .find(|f| f.key() == key)
        .map(|f| f.label())
        .unwrap_or(key)
}
