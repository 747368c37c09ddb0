use async_trait::async_trait;

use crate::RecallError;

/// Text-to-vector embedding provider.
///
/// Implementations must return vectors of a fixed dimensionality for the
/// lifetime of the process; consumers validate that length against the
/// index schema before writing.
#[async_trait]
pub trait Embeddings: Send + Sync {
    /// Embed a batch of document texts, one vector per input in order.
    async fn embed_documents(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, RecallError>;

    /// Embed a single query text.
    async fn embed_query(&self, text: &str) -> Result<Vec<f32>, RecallError>;
}
