//! End-to-end request flow against a local mock prediction endpoint.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{unreachable_predict_url, MockPredictor, MockReply};
use iris_core::client::log_health;
use iris_core::render::{ErrorView, ResultView, BACKEND_ERROR_HEADLINE};
use iris_core::{
    ClassificationFlow, ClientConfig, HttpBackend, IrisError, MeasurementField, Species, UiState,
};

fn backend_for(url: &str) -> HttpBackend {
    HttpBackend::new(&ClientConfig::default().with_endpoint(url)).unwrap()
}

fn flow_with(values: [&str; 4]) -> ClassificationFlow {
    let mut flow = ClassificationFlow::new();
    for (field, value) in MeasurementField::ALL.iter().zip(values) {
        flow.set_field(*field, value);
    }
    flow
}

#[tokio::test]
async fn test_setosa_scenario() {
    let server = MockPredictor::start(MockReply::json(
        StatusCode::OK,
        json!({"prediction": "setosa", "confidence": 97.5}),
    ))
    .await;
    let backend = backend_for(&server.predict_url());
    let mut flow = flow_with(["5.1", "3.5", "1.4", "0.2"]);

    flow.submit(&backend).await.unwrap();

    let result = flow.state().result().unwrap();
    let view = ResultView::from_result(result);
    assert!(view.species_label.contains("SETOSA"));
    assert!(view.confidence_text.contains("97.5"));
    assert!(flow.state().error().is_none());
    assert!(!flow.is_loading());
}

#[tokio::test]
async fn test_exactly_one_post_with_parsed_values() {
    let server = MockPredictor::start(MockReply::json(
        StatusCode::OK,
        json!({"prediction": "virginica", "confidence": 81.0}),
    ))
    .await;
    let backend = backend_for(&server.predict_url());
    let mut flow = flow_with(["6.25", "-3", "5e0", "0.125"]);

    flow.submit(&backend).await.unwrap();

    let requests = server.predict_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].content_type.as_deref(), Some("application/json"));
    assert_eq!(
        requests[0].body,
        json!({"sepal_length": 6.25, "sepal_width": -3.0, "petal_length": 5.0, "petal_width": 0.125})
    );
}

#[tokio::test]
async fn test_full_response_is_rendered() {
    let server = MockPredictor::start(MockReply::json(
        StatusCode::OK,
        json!({
            "prediction": "versicolor",
            "confidence": 93.4,
            "probabilities": {"setosa": 0.6, "versicolor": 93.4, "virginica": 6.0},
            "latency_ms": 2.5,
            "model_version": "v2",
            "timestamp": 1717243200
        }),
    ))
    .await;
    let backend = backend_for(&server.predict_url());
    let mut flow = ClassificationFlow::new();
    flow.load_sample(Species::Versicolor);

    let result = flow.submit(&backend).await.unwrap();
    let view = ResultView::from_result(result);
    assert_eq!(view.species_label, "Prediction: VERSICOLOR");
    assert_eq!(view.probabilities[0].species, Species::Versicolor);
    assert_eq!(view.metadata_lines().len(), 3);
}

#[tokio::test]
async fn test_http_500_shows_error_not_result() {
    let server = MockPredictor::start(MockReply::raw(StatusCode::INTERNAL_SERVER_ERROR, "model crashed")).await;
    let backend = backend_for(&server.predict_url());
    let mut flow = flow_with(["5.1", "3.5", "1.4", "0.2"]);

    let err = flow.submit(&backend).await.unwrap_err();

    assert_eq!(
        err,
        IrisError::HttpStatus {
            status: 500,
            body: "model crashed".to_string()
        }
    );
    assert!(flow.state().result().is_none());
    assert!(matches!(flow.state(), UiState::ErrorShown(_)));
}

#[tokio::test]
async fn test_transport_failure_shows_error() {
    let backend = backend_for(&unreachable_predict_url().await);
    let mut flow = ClassificationFlow::new();
    flow.load_sample(Species::Setosa);

    let err = flow.submit(&backend).await.unwrap_err();
    assert_eq!(err.error_code(), "TRANSPORT");

    let view = ErrorView::from_error(flow.state().error().unwrap());
    assert_eq!(view.headline, BACKEND_ERROR_HEADLINE);
    assert!(!view.message().is_empty());
    assert!(flow.state().result().is_none());
    assert!(flow.can_submit());
}

#[tokio::test]
async fn test_malformed_body_shows_error() {
    let server = MockPredictor::start(MockReply::raw(StatusCode::OK, "{\"label\": \"setosa\"}")).await;
    let backend = backend_for(&server.predict_url());
    let mut flow = flow_with(["5.1", "3.5", "1.4", "0.2"]);

    let err = flow.submit(&backend).await.unwrap_err();
    assert_eq!(err.error_code(), "MALFORMED_RESPONSE");
    assert!(flow.state().result().is_none());
}

#[tokio::test]
async fn test_overlapping_submit_sends_one_request() {
    let server = MockPredictor::start(MockReply::json(
        StatusCode::OK,
        json!({"prediction": "setosa", "confidence": 99.0}),
    ))
    .await;
    let backend = backend_for(&server.predict_url());
    let mut flow = flow_with(["5.1", "3.5", "1.4", "0.2"]);

    let pending = flow.begin_submit().unwrap();
    assert_eq!(flow.begin_submit().unwrap_err(), IrisError::RequestInFlight);

    let outcome = backend.predict(&pending.input).await;
    assert!(flow.complete(pending.token, outcome));

    assert_eq!(server.predict_requests().len(), 1);
    assert!(flow.state().result().is_some());
}

#[tokio::test]
async fn test_invalid_input_never_reaches_network() {
    let server = MockPredictor::start(MockReply::json(
        StatusCode::OK,
        json!({"prediction": "setosa", "confidence": 99.0}),
    ))
    .await;
    let backend = backend_for(&server.predict_url());
    let mut flow = flow_with(["5.1", "", "1.4", "0.2"]);

    let err = flow.submit(&backend).await.unwrap_err();
    assert_eq!(err.error_code(), "INVALID_INPUT");
    assert!(server.predict_requests().is_empty());
}

#[tokio::test]
async fn test_load_sample_makes_no_request() {
    let server = MockPredictor::start(MockReply::json(
        StatusCode::OK,
        json!({"prediction": "virginica", "confidence": 99.0}),
    ))
    .await;
    let backend = backend_for(&server.predict_url());
    let mut flow = ClassificationFlow::new();

    for species in Species::ALL {
        flow.load_sample(species);
    }
    log_health(&backend).await;
    assert!(server.predict_requests().is_empty());
    assert_eq!(flow.state(), &UiState::Idle);

    flow.submit(&backend).await.unwrap();

    let requests = server.predict_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].body,
        json!({"sepal_length": 6.9, "sepal_width": 3.1, "petal_length": 5.4, "petal_width": 2.1})
    );
}

#[tokio::test]
async fn test_unreadable_metadata_still_shows_result() {
    let server = MockPredictor::start(MockReply::json(
        StatusCode::OK,
        json!({
            "prediction": "setosa",
            "confidence": 97.5,
            "probabilities": {"setosa": 97.5, "other": 2.5},
            "latency_ms": -0.01,
            "model_version": 2,
            "timestamp": "soon"
        }),
    ))
    .await;
    let backend = backend_for(&server.predict_url());
    let mut flow = flow_with(["5.1", "3.5", "1.4", "0.2"]);

    flow.submit(&backend).await.unwrap();

    let view = ResultView::from_result(flow.state().result().unwrap());
    assert_eq!(view.species_label, "Prediction: SETOSA");
    assert_eq!(view.probabilities.len(), 1);
    assert!(view.metadata_lines().is_empty());
}

#[tokio::test]
async fn test_health_check_hits_derived_url() {
    let server = MockPredictor::start(MockReply::raw(StatusCode::OK, "")).await;
    let backend = backend_for(&server.predict_url());

    let report = log_health(&backend).await.unwrap();
    assert_eq!(report.status, 200);
    assert_eq!(report.body["status"], "healthy");
    assert_eq!(server.health_hits(), 1);
    assert!(server.predict_requests().is_empty());
}

#[tokio::test]
async fn test_health_check_failure_is_swallowed() {
    let backend = backend_for(&unreachable_predict_url().await);
    assert!(log_health(&backend).await.is_none());
}
