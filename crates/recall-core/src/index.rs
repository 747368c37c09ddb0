use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;

use crate::{MetadataFilter, RecallError};

/// A single result of a vector index query.
#[derive(Debug, Clone)]
pub struct IndexMatch {
    pub id: String,
    /// Cosine similarity to the query vector, in `[-1, 1]` (in practice
    /// `[0, 1]` for text embedding models).
    pub score: f32,
    pub metadata: HashMap<String, Value>,
}

/// Trait for vector index backends with metadata filtering.
#[async_trait]
pub trait VectorIndex: Send + Sync {
    /// Insert or replace a vector and its metadata, keyed by `id`.
    ///
    /// Upserts are idempotent by id and atomic: concurrent writes to the
    /// same id resolve to last-write-wins in the backend, and a failed call
    /// leaves no partial record behind.
    async fn upsert(
        &self,
        id: &str,
        vector: &[f32],
        metadata: HashMap<String, Value>,
    ) -> Result<(), RecallError>;

    /// Return up to `top_k` nearest neighbors of `vector`, restricted to
    /// records matching `filter`, ordered by descending similarity.
    async fn query(
        &self,
        vector: &[f32],
        top_k: usize,
        filter: Option<&MetadataFilter>,
    ) -> Result<Vec<IndexMatch>, RecallError>;
}
