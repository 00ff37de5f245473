pub mod traits;

pub use traits::{Embedder, Embedding, EmbeddingError};
