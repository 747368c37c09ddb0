use thiserror::Error;

/// Error type shared across the Recall crates.
///
/// Variants carry a subsystem-specific message. A cache miss is not an
/// error: lookups report it as `Ok(None)`, so an `Err` always means
/// something actually failed.
#[derive(Error, Debug)]
pub enum RecallError {
    /// The embedding provider call failed (network error, non-2xx status).
    #[error("embedding provider error: {0}")]
    Embedding(String),

    /// The vector index call failed (network error, non-2xx status).
    #[error("vector index error: {0}")]
    Index(String),

    /// The HTTP transport failed before a service-level response was seen.
    #[error("transport error: {0}")]
    Transport(String),

    /// An upstream service answered with a payload that could not be parsed.
    #[error("malformed provider response: {0}")]
    Parsing(String),

    /// Invalid or inconsistent configuration, e.g. an embedding whose
    /// dimensionality does not match the index schema.
    #[error("configuration error: {0}")]
    Config(String),

    /// Caller-supplied input rejected before any provider call was made.
    #[error("validation error: {0}")]
    Validation(String),
}

impl RecallError {
    /// Whether this error means an upstream service is unavailable or
    /// misbehaving, as opposed to a local configuration or input problem.
    ///
    /// Upstream failures are surfaced instead of being reported as a cache
    /// miss; callers use this classification to decide whether to degrade
    /// (run the research without the cache), retry, or abort.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            RecallError::Embedding(_)
                | RecallError::Index(_)
                | RecallError::Transport(_)
                | RecallError::Parsing(_)
        )
    }
}
