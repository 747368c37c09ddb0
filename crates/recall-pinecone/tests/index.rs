use std::collections::HashMap;
use std::sync::Arc;

use recall_backend::{FakeBackend, ProviderResponse};
use recall_core::{MetadataFilter, RecallError, VectorIndex};
use recall_pinecone::{PineconeConfig, PineconeIndex};
use serde_json::{json, Value};

fn make_index(backend: Arc<FakeBackend>) -> PineconeIndex {
    let config = PineconeConfig::new("pc-key", "https://idx.svc.pinecone.io");
    PineconeIndex::new(config, backend)
}

fn make_metadata() -> HashMap<String, Value> {
    HashMap::from([
        ("domain".to_string(), json!("acxiom.com")),
        ("created_at".to_string(), json!(1_700_000_000)),
    ])
}

#[test]
fn config_builder() {
    let config = PineconeConfig::new("pc-key", "https://idx.svc.pinecone.io")
        .with_namespace("research");
    assert_eq!(config.api_key, "pc-key");
    assert_eq!(config.index_host, "https://idx.svc.pinecone.io");
    assert_eq!(config.namespace.as_deref(), Some("research"));
}

#[tokio::test]
async fn upsert_sends_expected_body_and_headers() {
    let backend = Arc::new(FakeBackend::new());
    backend.push_response(ProviderResponse {
        status: 200,
        body: json!({"upsertedCount": 1}),
    });

    let index = make_index(backend.clone());
    index
        .upsert("abc123", &[0.1, 0.2], make_metadata())
        .await
        .unwrap();

    let requests = backend.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.url, "https://idx.svc.pinecone.io/vectors/upsert");
    assert_eq!(request.body["vectors"][0]["id"], "abc123");
    assert_eq!(request.body["vectors"][0]["values"], json!([0.1f32, 0.2f32]));
    assert_eq!(
        request.body["vectors"][0]["metadata"]["domain"],
        "acxiom.com"
    );
    assert!(request
        .headers
        .iter()
        .any(|(key, value)| key == "Api-Key" && value == "pc-key"));
}

#[tokio::test]
async fn upsert_includes_configured_namespace() {
    let backend = Arc::new(FakeBackend::new());
    backend.push_response(ProviderResponse {
        status: 200,
        body: json!({"upsertedCount": 1}),
    });

    let config = PineconeConfig::new("pc-key", "https://idx.svc.pinecone.io")
        .with_namespace("research");
    let index = PineconeIndex::new(config, backend.clone());
    index.upsert("abc123", &[0.1], HashMap::new()).await.unwrap();

    let requests = backend.requests();
    assert_eq!(requests[0].body["namespace"], "research");
}

#[tokio::test]
async fn query_sends_filter_in_operator_form() {
    let backend = Arc::new(FakeBackend::new());
    backend.push_response(ProviderResponse {
        status: 200,
        body: json!({"matches": []}),
    });

    let index = make_index(backend.clone());
    let filter = MetadataFilter::gte("created_at", 1_700_000_000_i64);
    index.query(&[0.1, 0.2], 1, Some(&filter)).await.unwrap();

    let requests = backend.requests();
    let request = &requests[0];
    assert_eq!(request.url, "https://idx.svc.pinecone.io/query");
    assert_eq!(request.body["topK"], 1);
    assert_eq!(request.body["includeMetadata"], true);
    assert_eq!(
        request.body["filter"],
        json!({"created_at": {"$gte": 1_700_000_000_i64}})
    );
}

#[tokio::test]
async fn query_parses_matches() {
    let backend = Arc::new(FakeBackend::new());
    backend.push_response(ProviderResponse {
        status: 200,
        body: json!({
            "matches": [
                {"id": "abc123", "score": 0.97, "metadata": {"domain": "acxiom.com"}},
                {"id": "def456", "score": 0.42, "metadata": {"domain": "lotame.com"}},
            ],
        }),
    });

    let index = make_index(backend);
    let matches = index.query(&[0.1], 2, None).await.unwrap();

    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].id, "abc123");
    assert!((matches[0].score - 0.97).abs() < 1e-6);
    assert_eq!(matches[0].metadata["domain"], "acxiom.com");
}

#[tokio::test]
async fn query_with_missing_matches_is_parsing_error() {
    let backend = Arc::new(FakeBackend::new());
    backend.push_response(ProviderResponse {
        status: 200,
        body: json!({"results": []}),
    });

    let index = make_index(backend);
    let err = index.query(&[0.1], 1, None).await.unwrap_err();
    assert!(matches!(err, RecallError::Parsing(_)));
}

#[tokio::test]
async fn non_2xx_status_is_index_error() {
    let backend = Arc::new(FakeBackend::new());
    backend.push_response(ProviderResponse {
        status: 503,
        body: json!({"message": "index unavailable"}),
    });

    let index = make_index(backend);
    let err = index.upsert("abc123", &[0.1], HashMap::new()).await.unwrap_err();
    assert!(matches!(err, RecallError::Index(_)));
    assert!(err.is_upstream());
}

#[tokio::test]
async fn dimension_reads_index_stats() {
    let backend = Arc::new(FakeBackend::new());
    backend.push_response(ProviderResponse {
        status: 200,
        body: json!({"dimension": 256, "totalVectorCount": 1280}),
    });

    let index = make_index(backend.clone());
    assert_eq!(index.dimension().await.unwrap(), 256);

    let requests = backend.requests();
    assert_eq!(
        requests[0].url,
        "https://idx.svc.pinecone.io/describe_index_stats"
    );
}
