//! Strategy-based text chunking engine.
//!
//! Splits UTF-8 text into bounded, overlapping chunks suitable for embedding,
//! dispatching by configured strategy: sentence accumulation, paragraph
//! accumulation with sentence fallback, or fixed windows with word-boundary
//! snapping. All slicing and size accounting is codepoint-based; a chunk can
//! never end mid-character.

mod helpers;
mod quality;
mod strategies;
mod types;

pub use quality::{optimal_chunk_size, validate_chunks};
pub use strategies::chunk_text;
pub use types::{ChunkConfig, ChunkStrategy};
