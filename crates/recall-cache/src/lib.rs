//! Semantic caching of completed research runs.
//!
//! A full research run — multiple chat-completion turns, follow-up
//! questions, summarization — is expensive. [`ResearchCache`] answers the
//! question "has a sufficiently similar question been researched recently?"
//! by nearest-neighbor search over question embeddings, so callers can skip
//! the run entirely on a hit.

mod research;

pub use research::{ResearchCache, ResearchCacheConfig};

// Re-export core types for convenience.
pub use recall_core::{CacheEntry, Embeddings, RecallError, VectorIndex};
