use std::sync::Arc;

use async_trait::async_trait;
use recall_backend::{ProviderBackend, ProviderRequest};
use recall_core::{Embeddings, RecallError};
use serde_json::{json, Value};

/// Configuration for the OpenAI embeddings API.
#[derive(Debug, Clone)]
pub struct OpenAiEmbeddingsConfig {
    pub api_key: String,
    pub model: String,
    /// Requested output dimensionality. Supported by the `text-embedding-3`
    /// family; when set, it must match the schema of the vector index the
    /// embeddings are written to.
    pub dimensions: Option<u32>,
    pub base_url: String,
}

impl OpenAiEmbeddingsConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: "text-embedding-3-large".to_string(),
            dimensions: None,
            base_url: "https://api.openai.com/v1".to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_dimensions(mut self, dimensions: u32) -> Self {
        self.dimensions = Some(dimensions);
        self
    }

    /// Point the adapter at an OpenAI-compatible server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// OpenAI embeddings provider.
pub struct OpenAiEmbeddings {
    config: OpenAiEmbeddingsConfig,
    backend: Arc<dyn ProviderBackend>,
}

impl OpenAiEmbeddings {
    pub fn new(config: OpenAiEmbeddingsConfig, backend: Arc<dyn ProviderBackend>) -> Self {
        Self { config, backend }
    }

    fn build_request(&self, input: Vec<String>) -> ProviderRequest {
        let mut body = json!({
            "model": self.config.model,
            "input": input,
            "encoding_format": "float",
        });
        if let Some(dimensions) = self.config.dimensions {
            body["dimensions"] = json!(dimensions);
        }

        ProviderRequest {
            url: format!(
                "{}/embeddings",
                self.config.base_url.trim_end_matches('/')
            ),
            headers: vec![
                (
                    "Authorization".to_string(),
                    format!("Bearer {}", self.config.api_key),
                ),
                ("Content-Type".to_string(), "application/json".to_string()),
            ],
            body,
        }
    }
}

/// Parse an OpenAI-style embeddings response body into vectors, reordered
/// by the `index` field (the API does not guarantee input order).
fn parse_embeddings_response(body: &Value) -> Result<Vec<Vec<f32>>, RecallError> {
    let data = body
        .get("data")
        .and_then(Value::as_array)
        .ok_or_else(|| RecallError::Parsing("embeddings response missing 'data' array".into()))?;

    let mut rows: Vec<(usize, Vec<f32>)> = Vec::with_capacity(data.len());
    for (position, item) in data.iter().enumerate() {
        let index = item
            .get("index")
            .and_then(Value::as_u64)
            .map(|i| i as usize)
            .unwrap_or(position);
        let values = item
            .get("embedding")
            .and_then(Value::as_array)
            .ok_or_else(|| RecallError::Parsing("embeddings item missing 'embedding'".into()))?;

        let mut embedding = Vec::with_capacity(values.len());
        for value in values {
            let value = value.as_f64().ok_or_else(|| {
                RecallError::Parsing("non-numeric value in 'embedding'".into())
            })?;
            embedding.push(value as f32);
        }
        rows.push((index, embedding));
    }

    rows.sort_by_key(|(index, _)| *index);
    Ok(rows.into_iter().map(|(_, embedding)| embedding).collect())
}

#[async_trait]
impl Embeddings for OpenAiEmbeddings {
    async fn embed_documents(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, RecallError> {
        let input: Vec<String> = texts.iter().map(|s| s.to_string()).collect();
        let request = self.build_request(input);
        let response = self.backend.send(request).await?;

        if response.status != 200 {
            return Err(RecallError::Embedding(format!(
                "OpenAI API error ({}): {}",
                response.status, response.body
            )));
        }

        parse_embeddings_response(&response.body)
    }

    async fn embed_query(&self, text: &str) -> Result<Vec<f32>, RecallError> {
        let mut results = self.embed_documents(&[text]).await?;
        results
            .pop()
            .ok_or_else(|| RecallError::Embedding("empty embeddings response".to_string()))
    }
}
