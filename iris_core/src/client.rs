//! # Prediction Backend
//!
//! [`PredictionBackend`] is the seam between the request flow and the network.
//! [`HttpBackend`] is the reqwest implementation that talks to the real
//! endpoint; tests substitute an in-memory backend.
//!
//! Failure mapping:
//! - no response at all -> [`IrisError::Transport`]
//! - non-2xx status -> [`IrisError::HttpStatus`]
//! - 2xx with an unusable body -> [`IrisError::MalformedResponse`]

use std::future::Future;

use reqwest::Url;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::errors::{IrisError, IrisResult};
use crate::measurement::MeasurementInput;
use crate::prediction::PredictionResult;

/// Outcome of a successful health check
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthReport {
    pub status: u16,
    /// Response body as JSON, or as a plain string when it is not JSON
    pub body: serde_json::Value,
}

/// Anything that can turn measurements into a prediction.
pub trait PredictionBackend {
    /// Issue exactly one prediction request
    fn predict(&self, input: &MeasurementInput) -> impl Future<Output = IrisResult<PredictionResult>>;

    /// Diagnostic liveness check
    fn health(&self) -> impl Future<Output = IrisResult<HealthReport>>;
}

/// reqwest-backed client for the prediction endpoint
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    endpoint: Url,
    health_url: Url,
}

impl HttpBackend {
    /// Build a client from configuration.
    ///
    /// Fails with [`IrisError::Config`] when the endpoint does not parse or
    /// the TLS backend cannot be initialised.
    pub fn new(config: &ClientConfig) -> IrisResult<Self> {
        let endpoint = config.endpoint_url()?;
        let health_url = config.health_url()?;

        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| IrisError::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(HttpBackend {
            client,
            endpoint,
            health_url,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn health_url(&self) -> &Url {
        &self.health_url
    }

    /// POST the measurements as JSON and decode the prediction
    pub async fn predict(&self, input: &MeasurementInput) -> IrisResult<PredictionResult> {
        tracing::info!(endpoint = %self.endpoint, "Sending classification request");
        tracing::debug!(?input, "Request payload");

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(input)
            .send()
            .await
            .map_err(|e| IrisError::transport(describe_reqwest_error(&e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(IrisError::http_status(status.as_u16(), body));
        }

        let body = response
            .text()
            .await
            .map_err(|e| IrisError::transport(format!("Failed to read response body: {}", describe_reqwest_error(&e))))?;

        let result = PredictionResult::from_json(&body)?;
        tracing::info!(
            prediction = result.prediction.key(),
            confidence = result.confidence,
            "Received prediction"
        );
        Ok(result)
    }

    /// GET the derived `/health` URL
    pub async fn health(&self) -> IrisResult<HealthReport> {
        let response = self
            .client
            .get(self.health_url.clone())
            .send()
            .await
            .map_err(|e| IrisError::transport(describe_reqwest_error(&e)))?;

        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(IrisError::http_status(status.as_u16(), text));
        }

        let body = serde_json::from_str(&text).unwrap_or(serde_json::Value::String(text));
        Ok(HealthReport {
            status: status.as_u16(),
            body,
        })
    }
}

impl PredictionBackend for HttpBackend {
    fn predict(&self, input: &MeasurementInput) -> impl Future<Output = IrisResult<PredictionResult>> {
        HttpBackend::predict(self, input)
    }

    fn health(&self) -> impl Future<Output = IrisResult<HealthReport>> {
        HttpBackend::health(self)
    }
}

/// Run the health check and log its outcome. Never fails.
pub async fn log_health<B: PredictionBackend>(backend: &B) -> Option<HealthReport> {
    match backend.health().await {
        Ok(report) => {
            tracing::info!(status = report.status, body = %report.body, "Prediction backend is healthy");
            Some(report)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Prediction backend health check failed");
            None
        }
    }
}

/// reqwest errors hide the root cause (refused, DNS, TLS) in the source chain
fn describe_reqwest_error(error: &reqwest::Error) -> String {
    let mut message = error.to_string();
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = std::error::Error::source(cause);
    }
    if error.is_timeout() {
        message.push_str(" (timed out)");
    }
    message
}
