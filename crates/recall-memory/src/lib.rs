//! In-memory vector index for tests and development.

use std::collections::HashMap;

use async_trait::async_trait;
use recall_core::{IndexMatch, MetadataFilter, RecallError, VectorIndex};
use serde_json::Value;
use tokio::sync::RwLock;

/// Stored vector with its metadata.
struct StoredRecord {
    vector: Vec<f32>,
    metadata: HashMap<String, Value>,
}

/// In-memory [`VectorIndex`] using cosine similarity.
///
/// Upserts replace by id; queries evaluate the metadata filter first, then
/// rank the remaining records by cosine similarity. Brute-force scan — fine
/// for tests and small local corpora, not a production index.
pub struct InMemoryVectorIndex {
    records: RwLock<HashMap<String, StoredRecord>>,
}

impl InMemoryVectorIndex {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

impl Default for InMemoryVectorIndex {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VectorIndex for InMemoryVectorIndex {
    async fn upsert(
        &self,
        id: &str,
        vector: &[f32],
        metadata: HashMap<String, Value>,
    ) -> Result<(), RecallError> {
        let mut records = self.records.write().await;
        records.insert(
            id.to_string(),
            StoredRecord {
                vector: vector.to_vec(),
                metadata,
            },
        );
        Ok(())
    }

    async fn query(
        &self,
        vector: &[f32],
        top_k: usize,
        filter: Option<&MetadataFilter>,
    ) -> Result<Vec<IndexMatch>, RecallError> {
        let records = self.records.read().await;

        let mut scored: Vec<IndexMatch> = records
            .iter()
            .filter(|(_, record)| filter.map_or(true, |f| f.matches(&record.metadata)))
            .map(|(id, record)| IndexMatch {
                id: id.clone(),
                score: cosine_similarity(vector, &record.vector),
                metadata: record.metadata.clone(),
            })
            .collect();

        // Sort by score descending
        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(top_k);

        Ok(scored)
    }
}

/// Compute cosine similarity between two vectors.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let mag_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let mag_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if mag_a == 0.0 || mag_b == 0.0 {
        return 0.0;
    }

    dot / (mag_a * mag_b)
}
