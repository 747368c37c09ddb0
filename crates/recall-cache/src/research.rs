use std::sync::Arc;
use std::time::Duration;

use recall_core::{entry_id, CacheEntry, Embeddings, MetadataFilter, RecallError, VectorIndex};
use tracing::{debug, warn};

/// Configuration for [`ResearchCache`].
#[derive(Debug, Clone)]
pub struct ResearchCacheConfig {
    /// Minimum cosine similarity for a stored question to count as the same
    /// question. The right value depends on the corpus and the embedding
    /// model; tune per deployment.
    pub similarity_threshold: f32,
    /// Maximum age of an entry still eligible for reuse. Older entries stay
    /// in the index for audit but are filtered out of lookups.
    pub freshness_window: Duration,
    /// Embedding dimensionality the index was created with. Every embedding
    /// is checked against this before it can reach the index.
    pub dimension: usize,
}

impl ResearchCacheConfig {
    /// Create a configuration for an index with the given dimensionality.
    ///
    /// Defaults: similarity threshold `0.95`, freshness window 30 days.
    pub fn new(dimension: usize) -> Self {
        Self {
            similarity_threshold: 0.95,
            freshness_window: Duration::from_secs(30 * 24 * 60 * 60),
            dimension,
        }
    }

    pub fn with_similarity_threshold(mut self, threshold: f32) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    pub fn with_freshness_window(mut self, window: Duration) -> Self {
        self.freshness_window = window;
        self
    }
}

/// Semantic cache for completed research runs.
///
/// Questions are matched by embedding similarity, not text equality: a
/// stored entry is reused when it is the nearest neighbor of the incoming
/// question, clears the similarity threshold, and is younger than the
/// freshness window. Staleness is a query-time filter — old entries are
/// never deleted, they just stop matching.
///
/// The cache holds no state of its own and may be shared freely across
/// tasks; concurrent stores of the same question resolve to the index's
/// last-write-wins upsert. There are no internal retries or timeouts —
/// wrap calls in `tokio::time::timeout` to bound them. Upstream failures
/// come back as errors, never as a miss, so callers can tell "nothing
/// cached" from "cache backend is down" and choose their own fallback.
///
/// # Example
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use recall_cache::{ResearchCache, ResearchCacheConfig};
/// use recall_embeddings::FakeEmbeddings;
/// use recall_memory::InMemoryVectorIndex;
///
/// # async fn example() -> Result<(), recall_core::RecallError> {
/// let cache = ResearchCache::new(
///     Arc::new(FakeEmbeddings::new(256)),
///     Arc::new(InMemoryVectorIndex::new()),
///     ResearchCacheConfig::new(256),
/// );
///
/// if let Some(entry) = cache.lookup("How does Acxiom collect demographic data?").await? {
///     println!("cached: {}", entry.result_summary);
/// }
/// # Ok(())
/// # }
/// ```
pub struct ResearchCache {
    embeddings: Arc<dyn Embeddings>,
    index: Arc<dyn VectorIndex>,
    config: ResearchCacheConfig,
}

impl ResearchCache {
    pub fn new(
        embeddings: Arc<dyn Embeddings>,
        index: Arc<dyn VectorIndex>,
        config: ResearchCacheConfig,
    ) -> Self {
        Self {
            embeddings,
            index,
            config,
        }
    }

    pub fn config(&self) -> &ResearchCacheConfig {
        &self.config
    }

    /// Look up a cached summary for `query_text`.
    ///
    /// Returns `Ok(None)` when no stored question is similar and recent
    /// enough. The text is embedded verbatim; callers that want case or
    /// punctuation variants to share an entry must normalize before
    /// calling.
    pub async fn lookup(&self, query_text: &str) -> Result<Option<CacheEntry>, RecallError> {
        let query_text = non_empty(query_text, "query_text")?;
        let embedding = self.embed_checked(query_text).await?;

        let cutoff =
            chrono::Utc::now().timestamp() - self.config.freshness_window.as_secs() as i64;
        let filter = MetadataFilter::gte("created_at", cutoff);

        let matches = self.index.query(&embedding, 1, Some(&filter)).await?;
        let Some(best) = matches.into_iter().next() else {
            debug!("no candidate within freshness window");
            return Ok(None);
        };

        if best.score < self.config.similarity_threshold {
            warn!(
                id = %best.id,
                score = best.score,
                threshold = self.config.similarity_threshold,
                "nearest candidate below similarity threshold"
            );
            return Ok(None);
        }

        let entry = CacheEntry::from_metadata(best.id, &best.metadata)?;
        debug!(id = %entry.id, score = best.score, "cache hit");
        Ok(Some(entry))
    }

    /// Store a completed research result under its question text.
    ///
    /// The id is derived from `query_text`, so storing the same question
    /// again replaces the previous entry instead of duplicating it. The
    /// write is a single upsert into the index — on failure nothing is
    /// stored.
    pub async fn store(
        &self,
        query_text: &str,
        domain: &str,
        category: &str,
        summary: &str,
    ) -> Result<CacheEntry, RecallError> {
        let query_text = non_empty(query_text, "query_text")?;
        let summary = non_empty(summary, "summary")?;
        let embedding = self.embed_checked(query_text).await?;

        let entry = CacheEntry {
            id: entry_id(query_text),
            query_text: query_text.to_string(),
            result_summary: summary.to_string(),
            domain: domain.to_string(),
            category: category.to_string(),
            created_at: chrono::Utc::now().timestamp(),
        };

        self.index
            .upsert(&entry.id, &embedding, entry.to_metadata())
            .await?;

        debug!(id = %entry.id, domain, category, "stored research summary");
        Ok(entry)
    }

    /// Embed a query and verify the result matches the configured
    /// dimensionality before it can reach the index.
    async fn embed_checked(&self, text: &str) -> Result<Vec<f32>, RecallError> {
        let embedding = self.embeddings.embed_query(text).await?;
        if embedding.len() != self.config.dimension {
            return Err(RecallError::Config(format!(
                "embedding dimension {} does not match index dimension {}",
                embedding.len(),
                self.config.dimension
            )));
        }
        Ok(embedding)
    }
}

fn non_empty<'a>(value: &'a str, name: &str) -> Result<&'a str, RecallError> {
    if value.trim().is_empty() {
        return Err(RecallError::Validation(format!("{name} must not be empty")));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = ResearchCacheConfig::new(256);
        assert_eq!(config.dimension, 256);
        assert_eq!(config.similarity_threshold, 0.95);
        assert_eq!(config.freshness_window, Duration::from_secs(30 * 24 * 60 * 60));
    }

    #[test]
    fn config_builders() {
        let config = ResearchCacheConfig::new(64)
            .with_similarity_threshold(0.9)
            .with_freshness_window(Duration::from_secs(3600));
        assert_eq!(config.similarity_threshold, 0.9);
        assert_eq!(config.freshness_window, Duration::from_secs(3600));
    }
}
