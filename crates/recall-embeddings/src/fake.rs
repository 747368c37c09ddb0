use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use async_trait::async_trait;
use recall_core::{Embeddings, RecallError};

/// Deterministic test embeddings derived from hashed byte trigrams.
///
/// Identical text always produces the identical vector (cosine similarity
/// 1.0), texts sharing most of their trigrams land close together, and
/// unrelated texts end up near-orthogonal. No network calls, no state.
pub struct FakeEmbeddings {
    dimension: usize,
}

impl FakeEmbeddings {
    pub fn new(dimension: usize) -> Self {
        Self { dimension }
    }

    fn embed_text(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.dimension];
        if self.dimension == 0 {
            return vector;
        }

        let bytes = text.as_bytes();
        if bytes.len() < 3 {
            let (bucket, sign) = hash_feature(bytes);
            vector[bucket % self.dimension] = sign;
            return vector;
        }

        // Signed feature hashing over byte trigrams keeps frequent trigrams
        // from biasing every pair of texts toward positive similarity.
        for window in bytes.windows(3) {
            let (bucket, sign) = hash_feature(window);
            vector[bucket % self.dimension] += sign;
        }

        let magnitude: f32 = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
        if magnitude > 0.0 {
            for value in &mut vector {
                *value /= magnitude;
            }
        }
        vector
    }
}

fn hash_feature(bytes: &[u8]) -> (usize, f32) {
    let mut hasher = DefaultHasher::new();
    bytes.hash(&mut hasher);
    let hash = hasher.finish();
    let sign = if hash & 1 == 0 { 1.0 } else { -1.0 };
    ((hash >> 1) as usize, sign)
}

#[async_trait]
impl Embeddings for FakeEmbeddings {
    async fn embed_documents(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, RecallError> {
        Ok(texts.iter().map(|text| self.embed_text(text)).collect())
    }

    async fn embed_query(&self, text: &str) -> Result<Vec<f32>, RecallError> {
        Ok(self.embed_text(text))
    }
}
