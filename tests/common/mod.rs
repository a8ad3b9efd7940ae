// Not every helper is used in every test, so we allow dead code
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{header, HeaderMap};
use axum::routing::post;
use axum::Router;
use tokio::net::TcpListener;

/// Initializes tracing for tests, respecting `RUST_LOG`; safe to call more
/// than once.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init()
        .ok();
}

/// A single request captured by the mock siteverify endpoint.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Value of the `Content-Type` header
    pub content_type: String,
    /// Raw form-url-encoded body
    pub body: String,
}

impl RecordedRequest {
    /// Splits the raw body into `(field, value)` pairs in wire order.
    ///
    /// Test inputs stay within unreserved characters, so no percent
    /// decoding is needed here.
    pub fn form_fields(&self) -> Vec<(String, String)> {
        self.body
            .split('&')
            .map(|pair| match pair.split_once('=') {
                Some((field, value)) => (field.to_string(), value.to_string()),
                None => (pair.to_string(), String::new()),
            })
            .collect()
    }
}

#[derive(Clone)]
struct MockState {
    canned_body: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// A mock siteverify service listening on a local port.
///
/// Answers every POST with a canned body and records what it received, so
/// tests can assert on the exact wire traffic the client produces.
pub struct MockSiteverify {
    /// Endpoint URL to hand to `Client::with_siteverify_url`
    pub url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockSiteverify {
    /// Starts the mock service on an ephemeral port.
    pub async fn start(canned_body: impl Into<String>) -> Self {
        init_tracing();

        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            canned_body: canned_body.into(),
            requests: Arc::clone(&requests),
        };

        let router = Router::new()
            .route("/siteverify", post(record_and_respond))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock siteverify listener");
        let addr = listener
            .local_addr()
            .expect("Failed to read mock siteverify address");

        tokio::spawn(async move {
            axum::serve(listener, router.into_make_service())
                .await
                .expect("Mock siteverify server failed");
        });

        Self {
            url: format!("http://{addr}/siteverify"),
            requests,
        }
    }

    /// Requests captured so far, in arrival order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

async fn record_and_respond(
    State(state): State<MockState>,
    headers: HeaderMap,
    body: String,
) -> String {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();

    state
        .requests
        .lock()
        .unwrap()
        .push(RecordedRequest { content_type, body });

    state.canned_body.clone()
}
