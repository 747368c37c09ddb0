//! HTTP backend seam shared by the provider adapters.
//!
//! Adapters (`recall-embeddings`, `recall-pinecone`) build a
//! [`ProviderRequest`] describing the call they want to make and hand it to
//! a [`ProviderBackend`]. Production code uses [`HttpBackend`] (reqwest);
//! tests use [`FakeBackend`], which replays queued responses and records
//! every request so the exact wire shape can be asserted.

use std::collections::VecDeque;

use async_trait::async_trait;
use recall_core::RecallError;
use serde_json::Value;
use tokio::sync::Mutex;

/// A JSON POST request to an upstream service.
#[derive(Debug, Clone)]
pub struct ProviderRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Value,
}

/// The upstream service's reply: HTTP status plus parsed JSON body.
#[derive(Debug, Clone)]
pub struct ProviderResponse {
    pub status: u16,
    pub body: Value,
}

/// Transport used by provider adapters to reach their service.
#[async_trait]
pub trait ProviderBackend: Send + Sync {
    async fn send(&self, request: ProviderRequest) -> Result<ProviderResponse, RecallError>;
}

/// Production backend using reqwest.
///
/// Performs no retries and imposes no timeout of its own; wrap calls in
/// `tokio::time::timeout` (or configure the `reqwest::Client`) to bound
/// them.
pub struct HttpBackend {
    client: reqwest::Client,
}

impl HttpBackend {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Build a backend on an existing client, e.g. one configured with
    /// connection pooling limits or a request timeout.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for HttpBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProviderBackend for HttpBackend {
    async fn send(&self, request: ProviderRequest) -> Result<ProviderResponse, RecallError> {
        let mut builder = self.client.post(&request.url);
        for (key, value) in &request.headers {
            builder = builder.header(key, value);
        }
        builder = builder.json(&request.body);

        let response = builder
            .send()
            .await
            .map_err(|e| RecallError::Transport(format!("HTTP request failed: {e}")))?;

        let status = response.status().as_u16();
        let body: Value = response
            .json()
            .await
            .map_err(|e| RecallError::Parsing(format!("failed to parse response JSON: {e}")))?;

        Ok(ProviderResponse { status, body })
    }
}

/// Test backend with queued responses.
///
/// Responses and errors are popped in FIFO order; once the queue is empty,
/// further sends fail. Every request received is recorded for inspection.
pub struct FakeBackend {
    responses: Mutex<VecDeque<Result<ProviderResponse, RecallError>>>,
    requests: Mutex<Vec<ProviderRequest>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn push_response(&self, response: ProviderResponse) -> &Self {
        self.responses
            .try_lock()
            .expect("not concurrent during setup")
            .push_back(Ok(response));
        self
    }

    pub fn push_error(&self, error: RecallError) -> &Self {
        self.responses
            .try_lock()
            .expect("not concurrent during setup")
            .push_back(Err(error));
        self
    }

    /// All requests received so far, in order.
    pub fn requests(&self) -> Vec<ProviderRequest> {
        self.requests
            .try_lock()
            .expect("not concurrent during inspection")
            .clone()
    }
}

impl Default for FakeBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProviderBackend for FakeBackend {
    async fn send(&self, request: ProviderRequest) -> Result<ProviderResponse, RecallError> {
        self.requests.lock().await.push(request);
        let mut responses = self.responses.lock().await;
        responses
            .pop_front()
            .unwrap_or_else(|| Err(RecallError::Transport("FakeBackend exhausted".to_string())))
    }
}
