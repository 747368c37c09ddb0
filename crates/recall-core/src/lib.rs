//! Core traits and types for Recall.
//!
//! This crate defines the contracts the rest of the workspace is built
//! against: the [`Embeddings`] and [`VectorIndex`] capability traits, the
//! [`CacheEntry`] record stored in the index, the typed [`MetadataFilter`]
//! used to restrict queries, and the shared [`RecallError`] type.
//!
//! Nothing here talks to the network; concrete providers live in the
//! adapter crates (`recall-embeddings`, `recall-pinecone`, `recall-memory`).

mod embeddings;
mod entry;
mod error;
mod filter;
mod index;

pub use embeddings::Embeddings;
pub use entry::{entry_id, CacheEntry};
pub use error::RecallError;
pub use filter::{FilterCondition, FilterOp, MetadataFilter};
pub use index::{IndexMatch, VectorIndex};
