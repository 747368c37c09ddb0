use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::RecallError;

/// A cached research result, as stored in and returned from a vector index.
///
/// The embedding vector itself is not carried here: it lives in the index,
/// keyed by `id`. Entries are immutable once written; storing the same
/// question again replaces the whole entry under the same id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    /// Content-derived identifier: lowercase hex SHA-256 of `query_text`.
    pub id: String,
    /// The research question, verbatim.
    pub query_text: String,
    /// The cached answer text.
    pub result_summary: String,
    /// Domain the question is about, e.g. `"acxiom.com"`.
    pub domain: String,
    /// Data category of the question, e.g. `"demographic"`.
    pub category: String,
    /// Write timestamp, seconds since the Unix epoch. Used only by the
    /// freshness filter, never mutated.
    pub created_at: i64,
}

impl CacheEntry {
    /// Render this entry as the metadata map stored alongside its vector.
    pub fn to_metadata(&self) -> HashMap<String, Value> {
        HashMap::from([
            ("query_text".to_string(), Value::from(self.query_text.clone())),
            (
                "result_summary".to_string(),
                Value::from(self.result_summary.clone()),
            ),
            ("domain".to_string(), Value::from(self.domain.clone())),
            ("category".to_string(), Value::from(self.category.clone())),
            ("created_at".to_string(), Value::from(self.created_at)),
        ])
    }

    /// Reconstruct an entry from an index match's id and metadata map.
    ///
    /// A map with missing or mistyped fields is treated as a malformed
    /// upstream payload, not as a miss.
    pub fn from_metadata(
        id: impl Into<String>,
        metadata: &HashMap<String, Value>,
    ) -> Result<Self, RecallError> {
        Ok(Self {
            id: id.into(),
            query_text: metadata_str(metadata, "query_text")?,
            result_summary: metadata_str(metadata, "result_summary")?,
            domain: metadata_str(metadata, "domain")?,
            category: metadata_str(metadata, "category")?,
            created_at: metadata
                .get("created_at")
                .and_then(Value::as_i64)
                .ok_or_else(|| missing_field("created_at"))?,
        })
    }
}

fn metadata_str(metadata: &HashMap<String, Value>, field: &str) -> Result<String, RecallError> {
    metadata
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| missing_field(field))
}

fn missing_field(field: &str) -> RecallError {
    RecallError::Parsing(format!("entry metadata missing or mistyped field '{field}'"))
}

/// Compute the content-derived entry id for a query text (SHA-256, hex).
///
/// The id is a pure function of the text, which makes index writes
/// idempotent: the same question always lands on the same id. The text is
/// hashed verbatim — no case, whitespace, or punctuation normalization.
pub fn entry_id(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}
