//! Chunk-to-embedding pipeline test with a mock embedding backend.

use async_trait::async_trait;

use textmill_core::{
    chunk_text, validate_chunks, ChunkConfig, ChunkStrategy, Embedder, Embedding, EmbeddingError,
};

/// Deterministic embedder: vector encodes the text length, token count is a
/// whitespace split.
struct MockEmbedder {
    dims: usize,
}

#[async_trait]
impl Embedder for MockEmbedder {
    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Embedding>, EmbeddingError> {
        Ok(texts
            .iter()
            .map(|text| Embedding {
                vector: vec![text.len() as f32; self.dims],
                token_count: text.split_whitespace().count(),
            })
            .collect())
    }

    fn dimensions(&self) -> usize {
        self.dims
    }
}

#[tokio::test]
async fn chunks_flow_through_an_embedder() {
    let config = ChunkConfig {
        strategy: ChunkStrategy::Paragraph,
        chunk_size: 80,
        overlap: 10,
    };
    let content = "\
The chunking engine feeds an embedding pipeline downstream.\n\n\
Each chunk becomes one vector, stored with its token count.\n\n\
Nothing in the engine itself ever talks to a provider.";

    let chunks = validate_chunks(&chunk_text(content, &config));
    assert!(chunks.len() > 1, "expected several chunks, got {}", chunks.len());

    let embedder = MockEmbedder { dims: 8 };
    let texts: Vec<&str> = chunks.iter().map(String::as_str).collect();
    let embeddings = embedder.embed_batch(&texts).await.unwrap();

    assert_eq!(embeddings.len(), chunks.len(), "one embedding per chunk");
    for embedding in &embeddings {
        assert_eq!(embedding.vector.len(), embedder.dimensions());
        assert!(embedding.token_count > 0);
    }
}

#[tokio::test]
async fn empty_content_embeds_nothing() {
    let chunks = chunk_text("   \n\n   ", &ChunkConfig::default());
    assert!(chunks.is_empty());

    let embedder = MockEmbedder { dims: 4 };
    let embeddings = embedder.embed_batch(&[]).await.unwrap();
    assert!(embeddings.is_empty());
}
