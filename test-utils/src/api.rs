//! Mock of the remote OSF validation API.
//!
//! Serves `GET /api/v1/bot/validate` on an ephemeral localhost port using Axum. Every
//! request body is recorded so tests can assert which member ids were submitted, and the
//! response status, body and latency are fixed when the mock is started.

use axum::{body::Bytes, extract::State, http::StatusCode, routing::get, Router};
use serde_json::Value;
use std::{
    net::SocketAddr,
    sync::{Arc, Mutex},
    time::Duration,
};
use tokio::{net::TcpListener, task::JoinHandle};

use crate::error::TestError;

/// Path of the validation endpoint served by the mock.
pub const VALIDATE_PATH: &str = "/api/v1/bot/validate";

/// Canned response returned by the mock for every request.
#[derive(Clone, Debug)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
    pub delay: Option<Duration>,
}

#[derive(Clone)]
struct ApiState {
    response: MockResponse,
    received: Arc<Mutex<Vec<Value>>>,
}

/// Running mock validation API.
///
/// The server task is aborted when this value is dropped.
pub struct MockValidationApi {
    addr: SocketAddr,
    received: Arc<Mutex<Vec<Value>>>,
    handle: JoinHandle<()>,
}

impl MockValidationApi {
    /// Binds an ephemeral localhost port and starts serving the canned response.
    ///
    /// # Arguments
    /// - `response` - Status, body and optional delay returned for every request
    ///
    /// # Returns
    /// - `Ok(MockValidationApi)` - Running mock server
    /// - `Err(TestError::Io)` - Failed to bind the listener
    pub async fn start(response: MockResponse) -> Result<Self, TestError> {
        let received = Arc::new(Mutex::new(Vec::new()));
        let state = ApiState {
            response,
            received: received.clone(),
        };

        let router = Router::new()
            .route(VALIDATE_PATH, get(validate))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        Ok(Self {
            addr,
            received,
            handle,
        })
    }

    /// Base URL of the mock, without a trailing slash.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Raw JSON payloads received so far, in arrival order.
    pub fn received(&self) -> Vec<Value> {
        self.received
            .lock()
            .map(|received| received.clone())
            .unwrap_or_default()
    }

    /// Member ids received so far, in arrival order.
    ///
    /// Payloads without a numeric `id` field are skipped.
    pub fn received_ids(&self) -> Vec<u64> {
        self.received()
            .iter()
            .filter_map(|payload| payload.get("id").and_then(Value::as_u64))
            .collect()
    }

    /// Number of requests the mock has answered.
    pub fn request_count(&self) -> usize {
        self.received().len()
    }
}

impl Drop for MockValidationApi {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn validate(State(state): State<ApiState>, body: Bytes) -> (StatusCode, String) {
    let payload = serde_json::from_slice(&body).unwrap_or(Value::Null);
    if let Ok(mut received) = state.received.lock() {
        received.push(payload);
    }

    if let Some(delay) = state.response.delay {
        tokio::time::sleep(delay).await;
    }

    let status =
        StatusCode::from_u16(state.response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    (status, state.response.body.clone())
}

/// Returns a localhost URL that nothing is listening on.
///
/// Binds an ephemeral port and releases it immediately, so connections to the returned
/// address are refused.
pub async fn unreachable_base_url() -> Result<String, TestError> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);

    Ok(format!("http://{}", addr))
}
