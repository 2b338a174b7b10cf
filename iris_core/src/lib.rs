//! # iris_core - Iris Classification Client
//!
//! `iris_core` drives a single prediction request against a remote iris
//! classifier: it collects four flower measurements, posts them as JSON to the
//! prediction endpoint, and turns the reply (or the failure) into display state.
//!
//! ## Design Philosophy
//!
//! - **Explicit UI state**: the front-ends render from [`flow::ClassificationFlow`],
//!   never from widget state
//! - **JSON-First**: wire types implement Serialize/Deserialize
//! - **Rich Errors**: structured [`IrisError`] variants, not just strings
//! - **One request at a time**: a request token guards against overlapping submits
//!
//! ## Quick Start
//!
//! ```rust
//! use iris_core::flow::{ClassificationFlow, UiState};
//! use iris_core::species::Species;
//!
//! let mut flow = ClassificationFlow::new();
//! flow.load_sample(Species::Setosa);
//!
//! let pending = flow.begin_submit().unwrap();
//! assert_eq!(pending.input.sepal_length, 5.1);
//! assert!(matches!(flow.state(), UiState::Loading));
//! ```
//!
//! ## Modules
//!
//! - [`species`] - Closed set of species keys and their descriptions
//! - [`measurement`] - Measurement input, raw form fields, parsing
//! - [`samples`] - Static sample profiles
//! - [`prediction`] - Prediction endpoint response
//! - [`config`] - Endpoint configuration
//! - [`client`] - Backend trait and reqwest implementation
//! - [`flow`] - The classification request flow state machine
//! - [`render`] - Display text for results and errors
//! - [`errors`] - Structured error types
//! - [`logging`] - Tracing subscriber setup

pub mod client;
pub mod config;
pub mod errors;
pub mod flow;
pub mod logging;
pub mod measurement;
pub mod prediction;
pub mod render;
pub mod samples;
pub mod species;

// Re-export commonly used types at crate root for convenience
pub use client::{HttpBackend, PredictionBackend};
pub use config::ClientConfig;
pub use errors::{IrisError, IrisResult};
pub use flow::{ClassificationFlow, PendingRequest, RequestToken, UiState};
pub use measurement::{MeasurementField, MeasurementInput, RawMeasurements};
pub use prediction::PredictionResult;
pub use species::Species;
