//! Recall — a semantic cache for expensive research runs.
//!
//! This crate re-exports the Recall sub-crates for convenient single-import
//! usage. Enable features to control which modules are available.
//!
//! # Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `default` | `cache`, `embeddings`, `memory` |
//! | `pinecone` | Pinecone vector index adapter |
//! | `full` | All features enabled |
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use recall::cache::{ResearchCache, ResearchCacheConfig};
//! use recall::embeddings::{OpenAiEmbeddings, OpenAiEmbeddingsConfig};
//! use recall::pinecone::{PineconeConfig, PineconeIndex};
//! use recall::backend::HttpBackend;
//!
//! let backend = Arc::new(HttpBackend::new());
//! let embeddings = Arc::new(OpenAiEmbeddings::new(
//!     OpenAiEmbeddingsConfig::new("sk-...").with_dimensions(256),
//!     backend.clone(),
//! ));
//! let index = Arc::new(PineconeIndex::new(
//!     PineconeConfig::new("pc-...", "https://researcher-cache.svc.pinecone.io"),
//!     backend,
//! ));
//! let cache = ResearchCache::new(embeddings, index, ResearchCacheConfig::new(256));
//! ```

/// Core traits and types: CacheEntry, Embeddings, VectorIndex, MetadataFilter, RecallError.
/// Always available.
pub use recall_core as core;

/// HTTP provider backend seam with production and test implementations.
#[cfg(feature = "backend")]
pub use recall_backend as backend;

/// Semantic research cache: ResearchCache, ResearchCacheConfig.
#[cfg(feature = "cache")]
pub use recall_cache as cache;

/// Embedding providers: OpenAI adapter plus a deterministic test double.
#[cfg(feature = "embeddings")]
pub use recall_embeddings as embeddings;

/// In-memory vector index for tests and development.
#[cfg(feature = "memory")]
pub use recall_memory as memory;

/// Pinecone vector index adapter.
#[cfg(feature = "pinecone")]
pub use recall_pinecone as pinecone;
