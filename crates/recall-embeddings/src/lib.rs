mod fake;
mod openai;

pub use fake::FakeEmbeddings;
pub use openai::{OpenAiEmbeddings, OpenAiEmbeddingsConfig};

// Re-export the Embeddings trait from core.
pub use recall_core::Embeddings;
