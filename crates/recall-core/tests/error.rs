use recall_core::RecallError;

#[test]
fn variants_render_messages() {
    let errors = vec![
        RecallError::Embedding("test".into()),
        RecallError::Index("test".into()),
        RecallError::Transport("test".into()),
        RecallError::Parsing("test".into()),
        RecallError::Config("test".into()),
        RecallError::Validation("test".into()),
    ];
    for err in &errors {
        assert!(!err.to_string().is_empty());
    }
}

#[test]
fn upstream_classification() {
    assert!(RecallError::Embedding("provider offline".into()).is_upstream());
    assert!(RecallError::Index("index offline".into()).is_upstream());
    assert!(RecallError::Transport("connection refused".into()).is_upstream());
    assert!(RecallError::Parsing("unexpected payload".into()).is_upstream());

    assert!(!RecallError::Config("dimension mismatch".into()).is_upstream());
    assert!(!RecallError::Validation("empty query".into()).is_upstream());
}
