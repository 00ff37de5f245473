//! textmill-core — document chunking for embedding pipelines.

pub mod chunker;
pub mod config;
pub mod embedding;

pub use chunker::{chunk_text, optimal_chunk_size, validate_chunks, ChunkConfig, ChunkStrategy};
pub use embedding::{Embedder, Embedding, EmbeddingError};
