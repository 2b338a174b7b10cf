// Mock prediction endpoint for integration tests
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

/// Canned reply for `/predict`
#[derive(Clone, Debug)]
pub struct MockReply {
    pub status: StatusCode,
    pub body: String,
}

impl MockReply {
    pub fn json(status: StatusCode, body: Value) -> Self {
        MockReply {
            status,
            body: body.to_string(),
        }
    }

    pub fn raw(status: StatusCode, body: &str) -> Self {
        MockReply {
            status,
            body: body.to_string(),
        }
    }
}

/// One request seen by the mock
#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub content_type: Option<String>,
    pub body: Value,
}

#[derive(Debug)]
struct MockState {
    reply: MockReply,
    predict_requests: Mutex<Vec<RecordedRequest>>,
    health_hits: Mutex<usize>,
}

/// Prediction server bound to an ephemeral local port
pub struct MockPredictor {
    state: Arc<MockState>,
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl MockPredictor {
    pub async fn start(reply: MockReply) -> Self {
        let state = Arc::new(MockState {
            reply,
            predict_requests: Mutex::new(Vec::new()),
            health_hits: Mutex::new(0),
        });

        let app = Router::new()
            .route("/predict", post(predict_handler))
            .route("/health", get(health_handler))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                eprintln!("Mock server error: {}", e);
            }
        });

        MockPredictor {
            state,
            base_url: format!("http://127.0.0.1:{}", port),
            handle,
        }
    }

    pub fn predict_url(&self) -> String {
        format!("{}/predict", self.base_url)
    }

    pub fn predict_requests(&self) -> Vec<RecordedRequest> {
        self.state.predict_requests.lock().unwrap().clone()
    }

    pub fn health_hits(&self) -> usize {
        *self.state.health_hits.lock().unwrap()
    }
}

impl Drop for MockPredictor {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn predict_handler(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, String) {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state
        .predict_requests
        .lock()
        .unwrap()
        .push(RecordedRequest { content_type, body });

    (state.reply.status, state.reply.body.clone())
}

async fn health_handler(State(state): State<Arc<MockState>>) -> Json<Value> {
    *state.health_hits.lock().unwrap() += 1;
    Json(json!({"status": "healthy", "model_loaded": true}))
}

/// URL of a local port with nothing listening
pub async fn unreachable_predict_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/predict", port)
}
