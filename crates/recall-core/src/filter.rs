use std::collections::HashMap;

use serde_json::Value;

/// Comparison operator of a single filter condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    /// Field equals the value.
    Eq,
    /// Field is numerically greater than or equal to the value.
    Gte,
    /// Field is numerically less than or equal to the value.
    Lte,
}

/// One `(field, operator, value)` condition of a [`MetadataFilter`].
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCondition {
    pub field: String,
    pub op: FilterOp,
    pub value: Value,
}

/// A conjunction of typed conditions over index metadata.
///
/// Backends render this to their own wire form (Pinecone:
/// `{"field": {"$gte": value}}`); local indexes evaluate it with
/// [`matches`](MetadataFilter::matches). Keeping the filter a typed
/// expression instead of a free-form mapping means a malformed query cannot
/// be expressed, let alone reach the external index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetadataFilter {
    conditions: Vec<FilterCondition>,
}

impl MetadataFilter {
    /// An empty filter, matching everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-condition filter: `field == value`.
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new().and_eq(field, value)
    }

    /// Single-condition filter: `field >= value`.
    pub fn gte(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new().and_gte(field, value)
    }

    /// Single-condition filter: `field <= value`.
    pub fn lte(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new().and_lte(field, value)
    }

    /// Add an equality condition.
    pub fn and_eq(self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.and(field, FilterOp::Eq, value)
    }

    /// Add a `>=` condition.
    pub fn and_gte(self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.and(field, FilterOp::Gte, value)
    }

    /// Add a `<=` condition.
    pub fn and_lte(self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.and(field, FilterOp::Lte, value)
    }

    fn and(mut self, field: impl Into<String>, op: FilterOp, value: impl Into<Value>) -> Self {
        self.conditions.push(FilterCondition {
            field: field.into(),
            op,
            value: value.into(),
        });
        self
    }

    /// The conditions of this filter, in insertion order.
    pub fn conditions(&self) -> &[FilterCondition] {
        &self.conditions
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Evaluate the filter against a metadata map.
    ///
    /// A missing field fails its condition. Range conditions compare
    /// numerically; a non-numeric operand fails the condition rather than
    /// erroring.
    pub fn matches(&self, metadata: &HashMap<String, Value>) -> bool {
        self.conditions.iter().all(|condition| {
            let Some(actual) = metadata.get(&condition.field) else {
                return false;
            };
            match condition.op {
                FilterOp::Eq => actual == &condition.value,
                FilterOp::Gte => match (actual.as_f64(), condition.value.as_f64()) {
                    (Some(actual), Some(bound)) => actual >= bound,
                    _ => false,
                },
                FilterOp::Lte => match (actual.as_f64(), condition.value.as_f64()) {
                    (Some(actual), Some(bound)) => actual <= bound,
                    _ => false,
                },
            }
        })
    }
}
