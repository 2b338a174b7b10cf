//! # Classification Request Flow
//!
//! Owns the lifecycle of one user-initiated prediction:
//!
//! ```text
//! Idle / ResultShown / ErrorShown
//!        │ begin_submit()  (fields parsed, nothing in flight)
//!        ▼
//!     Loading ──complete(token, Ok)──▶ ResultShown
//!        └──────complete(token, Err)─▶ ErrorShown
//! ```
//!
//! The flow is split into [`ClassificationFlow::begin_submit`] and
//! [`ClassificationFlow::complete`] so an event loop (the GUI) can run the
//! network call elsewhere and feed the outcome back. [`ClassificationFlow::submit`]
//! glues the two together for callers that can simply await.
//!
//! At most one request is in flight. A submit while loading is refused with
//! [`IrisError::RequestInFlight`], and a completion carrying any token other
//! than the in-flight one is dropped.

use serde::Serialize;

use crate::client::PredictionBackend;
use crate::errors::{IrisError, IrisResult};
use crate::measurement::{MeasurementField, MeasurementInput, RawMeasurements};
use crate::prediction::PredictionResult;
use crate::samples::sample_for;
use crate::species::Species;

/// Identifies one issued request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// What the result area is showing. Exactly one at a time.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum UiState {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// A request is in flight
    Loading,
    /// Last request succeeded
    ResultShown(PredictionResult),
    /// Last request (or its input) failed
    ErrorShown(IrisError),
}

impl UiState {
    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Loading)
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        match self {
            UiState::ResultShown(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&IrisError> {
        match self {
            UiState::ErrorShown(error) => Some(error),
            _ => None,
        }
    }

    /// Short name for logs and the status bar
    pub fn name(&self) -> &'static str {
        match self {
            UiState::Idle => "idle",
            UiState::Loading => "loading",
            UiState::ResultShown(_) => "result-shown",
            UiState::ErrorShown(_) => "error-shown",
        }
    }
}

/// A request that has been accepted and must be completed with its token
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingRequest {
    pub token: RequestToken,
    pub input: MeasurementInput,
}

/// Form fields plus display state for one session
#[derive(Debug, Clone, Default)]
pub struct ClassificationFlow {
    inputs: RawMeasurements,
    state: UiState,
    in_flight: Option<RequestToken>,
    next_token: u64,
}

impl ClassificationFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn inputs(&self) -> &RawMeasurements {
        &self.inputs
    }

    pub fn set_field(&mut self, field: MeasurementField, value: impl Into<String>) {
        self.inputs.set(field, value);
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// True while no request is in flight
    pub fn can_submit(&self) -> bool {
        self.in_flight.is_none()
    }

    pub fn in_flight(&self) -> Option<RequestToken> {
        self.in_flight
    }

    /// Copy a species' sample values into the form. No request is made.
    pub fn load_sample(&mut self, species: Species) {
        let profile = sample_for(species);
        self.inputs.fill_from(&profile.input);
        tracing::debug!(species = species.key(), "Loaded sample measurements");
    }

    /// Accept a submission: parse the fields and enter `Loading`.
    ///
    /// Refused with [`IrisError::RequestInFlight`] (state untouched) while a
    /// request is pending. A parse failure moves to `ErrorShown` and no
    /// request should be sent.
    pub fn begin_submit(&mut self) -> IrisResult<PendingRequest> {
        if let Some(token) = self.in_flight {
            tracing::warn!(token = token.value(), "Submission ignored, request already in flight");
            return Err(IrisError::RequestInFlight);
        }

        let input = match self.inputs.parse() {
            Ok(input) => input,
            Err(e) => {
                tracing::warn!(error = %e, "Rejected measurement input");
                self.state = UiState::ErrorShown(e.clone());
                return Err(e);
            }
        };

        self.next_token += 1;
        let token = RequestToken(self.next_token);
        self.in_flight = Some(token);
        self.state = UiState::Loading;
        tracing::debug!(token = token.value(), "Classification request started");

        Ok(PendingRequest { token, input })
    }

    /// Terminal step for an accepted request.
    ///
    /// Returns `false` and changes nothing when `token` is not the request in
    /// flight.
    pub fn complete(&mut self, token: RequestToken, outcome: IrisResult<PredictionResult>) -> bool {
        if self.in_flight != Some(token) {
            tracing::debug!(token = token.value(), "Dropping completion for stale request");
            return false;
        }
        self.in_flight = None;

        self.state = match outcome {
            Ok(result) => UiState::ResultShown(result),
            Err(e) => {
                if e.is_backend_failure() {
                    tracing::error!(token = token.value(), code = e.error_code(), error = %e, "Classification failed");
                } else {
                    tracing::warn!(token = token.value(), code = e.error_code(), error = %e, "Classification not sent");
                }
                UiState::ErrorShown(e)
            }
        };
        true
    }

    /// Run a full request against `backend`: begin, await, complete.
    pub async fn submit<B: PredictionBackend>(&mut self, backend: &B) -> IrisResult<&PredictionResult> {
        let pending = self.begin_submit()?;
        let outcome = backend.predict(&pending.input).await;
        self.complete(pending.token, outcome);

        match &self.state {
            UiState::ResultShown(result) => Ok(result),
            UiState::ErrorShown(error) => Err(error.clone()),
            other => Err(IrisError::malformed(format!(
                "request finished in unexpected state '{}'",
                other.name()
            ))),
        }
    }
}
