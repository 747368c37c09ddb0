//! Pinecone vector index integration for Recall.
//!
//! This crate provides [`PineconeIndex`], an implementation of the
//! [`VectorIndex`](recall_core::VectorIndex) trait backed by
//! [Pinecone](https://www.pinecone.io/) using its REST API.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use recall_backend::HttpBackend;
//! use recall_pinecone::{PineconeConfig, PineconeIndex};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = PineconeConfig::new("your-api-key", "https://my-index-abc123.svc.pinecone.io");
//! let index = PineconeIndex::new(config, Arc::new(HttpBackend::new()));
//!
//! // Validate the configured embedding dimensionality against the live index.
//! let dimension = index.dimension().await?;
//! assert_eq!(dimension, 256);
//! # Ok(())
//! # }
//! ```

mod index;

pub use index::{PineconeConfig, PineconeIndex};

// Re-export core types for convenience.
pub use recall_core::{IndexMatch, MetadataFilter, VectorIndex};
