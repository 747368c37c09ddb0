use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use recall_backend::{ProviderBackend, ProviderRequest, ProviderResponse};
use recall_core::{FilterOp, IndexMatch, MetadataFilter, RecallError, VectorIndex};
use serde_json::{json, Map, Value};

/// Configuration for [`PineconeIndex`].
#[derive(Debug, Clone)]
pub struct PineconeConfig {
    pub api_key: String,
    /// Index host URL, e.g. `https://my-index-abc123.svc.pinecone.io`.
    pub index_host: String,
    /// Optional namespace within the index.
    pub namespace: Option<String>,
}

impl PineconeConfig {
    pub fn new(api_key: impl Into<String>, index_host: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            index_host: index_host.into(),
            namespace: None,
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }
}

/// Pinecone-backed implementation of the [`VectorIndex`] trait.
///
/// Upserts are idempotent by id (Pinecone replaces the vector and metadata
/// wholesale) and queries filter server-side, so stale records never leave
/// the index host.
pub struct PineconeIndex {
    config: PineconeConfig,
    backend: Arc<dyn ProviderBackend>,
}

impl PineconeIndex {
    pub fn new(config: PineconeConfig, backend: Arc<dyn ProviderBackend>) -> Self {
        Self { config, backend }
    }

    /// Dimensionality of the live index, from `describe_index_stats`.
    ///
    /// Call once at startup to check the configured embedding dimensionality
    /// against the index schema before any write can corrupt a query.
    pub async fn dimension(&self) -> Result<usize, RecallError> {
        let response = self.send("describe_index_stats", json!({})).await?;
        response
            .body
            .get("dimension")
            .and_then(Value::as_u64)
            .map(|dimension| dimension as usize)
            .ok_or_else(|| {
                RecallError::Parsing("index stats response missing 'dimension'".into())
            })
    }

    fn request(&self, path: &str, body: Value) -> ProviderRequest {
        ProviderRequest {
            url: format!("{}/{path}", self.config.index_host.trim_end_matches('/')),
            headers: vec![
                ("Api-Key".to_string(), self.config.api_key.clone()),
                ("Content-Type".to_string(), "application/json".to_string()),
            ],
            body,
        }
    }

    async fn send(&self, path: &str, body: Value) -> Result<ProviderResponse, RecallError> {
        let response = self.backend.send(self.request(path, body)).await?;
        if !(200..300).contains(&response.status) {
            return Err(RecallError::Index(format!(
                "Pinecone API error ({}): {}",
                response.status, response.body
            )));
        }
        Ok(response)
    }
}

/// Render a typed metadata filter to Pinecone's operator form,
/// e.g. `{"created_at": {"$gte": 1700000000}}`.
fn filter_to_pinecone(filter: &MetadataFilter) -> Value {
    let mut fields = Map::new();
    for condition in filter.conditions() {
        let op = match condition.op {
            FilterOp::Eq => "$eq",
            FilterOp::Gte => "$gte",
            FilterOp::Lte => "$lte",
        };
        let ops = fields
            .entry(condition.field.clone())
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(ops) = ops {
            ops.insert(op.to_string(), condition.value.clone());
        }
    }
    Value::Object(fields)
}

fn parse_query_response(body: &Value) -> Result<Vec<IndexMatch>, RecallError> {
    let matches = body
        .get("matches")
        .and_then(Value::as_array)
        .ok_or_else(|| RecallError::Parsing("query response missing 'matches' array".into()))?;

    matches
        .iter()
        .map(|item| {
            let id = item
                .get("id")
                .and_then(Value::as_str)
                .ok_or_else(|| RecallError::Parsing("match missing 'id'".into()))?
                .to_string();
            let score = item
                .get("score")
                .and_then(Value::as_f64)
                .ok_or_else(|| RecallError::Parsing("match missing 'score'".into()))?
                as f32;
            let metadata = match item.get("metadata") {
                Some(Value::Object(map)) => map.clone().into_iter().collect(),
                _ => HashMap::new(),
            };
            Ok(IndexMatch {
                id,
                score,
                metadata,
            })
        })
        .collect()
}

#[async_trait]
impl VectorIndex for PineconeIndex {
    async fn upsert(
        &self,
        id: &str,
        vector: &[f32],
        metadata: HashMap<String, Value>,
    ) -> Result<(), RecallError> {
        let mut body = json!({
            "vectors": [{
                "id": id,
                "values": vector,
                "metadata": metadata,
            }],
        });
        if let Some(namespace) = &self.config.namespace {
            body["namespace"] = json!(namespace);
        }

        self.send("vectors/upsert", body).await?;
        Ok(())
    }

    async fn query(
        &self,
        vector: &[f32],
        top_k: usize,
        filter: Option<&MetadataFilter>,
    ) -> Result<Vec<IndexMatch>, RecallError> {
        let mut body = json!({
            "vector": vector,
            "topK": top_k,
            "includeMetadata": true,
        });
        if let Some(filter) = filter {
            if !filter.is_empty() {
                body["filter"] = filter_to_pinecone(filter);
            }
        }
        if let Some(namespace) = &self.config.namespace {
            body["namespace"] = json!(namespace);
        }

        let response = self.send("query", body).await?;
        parse_query_response(&response.body)
    }
}
