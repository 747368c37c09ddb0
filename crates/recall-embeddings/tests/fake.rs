use recall_core::Embeddings;
use recall_embeddings::FakeEmbeddings;

fn cosine(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let mag_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let mag_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    dot / (mag_a * mag_b)
}

#[tokio::test]
async fn identical_text_yields_identical_vector() {
    let embeddings = FakeEmbeddings::new(64);
    let a = embeddings.embed_query("What is Rust?").await.unwrap();
    let b = embeddings.embed_query("What is Rust?").await.unwrap();
    assert_eq!(a, b);
    assert!((cosine(&a, &b) - 1.0).abs() < 1e-5);
}

#[tokio::test]
async fn vectors_have_configured_dimension() {
    let embeddings = FakeEmbeddings::new(32);
    let vector = embeddings.embed_query("dimension check").await.unwrap();
    assert_eq!(vector.len(), 32);
}

#[tokio::test]
async fn vectors_are_unit_length() {
    let embeddings = FakeEmbeddings::new(64);
    let vector = embeddings.embed_query("normalize me").await.unwrap();
    let magnitude: f32 = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
    assert!((magnitude - 1.0).abs() < 1e-4);
}

#[tokio::test]
async fn near_duplicate_texts_are_similar() {
    let embeddings = FakeEmbeddings::new(64);
    let a = embeddings.embed_query("What is Rust?").await.unwrap();
    let b = embeddings.embed_query("What is Rust!").await.unwrap();
    assert!(cosine(&a, &b) > 0.8, "got {}", cosine(&a, &b));
}

#[tokio::test]
async fn unrelated_texts_are_dissimilar() {
    let embeddings = FakeEmbeddings::new(64);
    let a = embeddings
        .embed_query("How does Acxiom collect demographic data?")
        .await
        .unwrap();
    let b = embeddings
        .embed_query("What is the boiling point of mercury?")
        .await
        .unwrap();
    assert!(cosine(&a, &b) < 0.5, "got {}", cosine(&a, &b));
}

#[tokio::test]
async fn embed_documents_matches_embed_query() {
    let embeddings = FakeEmbeddings::new(64);
    let batch = embeddings
        .embed_documents(&["first text", "second text"])
        .await
        .unwrap();
    let single = embeddings.embed_query("first text").await.unwrap();
    assert_eq!(batch.len(), 2);
    assert_eq!(batch[0], single);
}

#[tokio::test]
async fn short_text_is_supported() {
    let embeddings = FakeEmbeddings::new(16);
    let vector = embeddings.embed_query("ok").await.unwrap();
    assert_eq!(vector.len(), 16);
    assert!(vector.iter().any(|v| *v != 0.0));
}
