use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("API error: {0}")]
    Api(String),

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// One embedded chunk: the vector plus the provider-reported token count.
#[derive(Debug, Clone)]
pub struct Embedding {
    pub vector: Vec<f32>,
    pub token_count: usize,
}

/// Trait for embedding backends that consume chunk text.
///
/// The chunker only produces the strings; providers, persistence, and any
/// notification of stored embeddings live behind this seam.
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Embed a batch of chunks, returning one embedding per input (in order).
    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Embedding>, EmbeddingError>;

    /// The dimensionality of the output vectors.
    fn dimensions(&self) -> usize;
}
