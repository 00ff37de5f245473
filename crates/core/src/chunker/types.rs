//! Chunking configuration types.

use std::fmt;

use serde::{Deserialize, Serialize};

// ── Strategy ────────────────────────────────────────────────────────

/// Segmentation strategy selected by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkStrategy {
    /// Accumulate sentences up to the size budget, carrying overlap.
    Sentence,
    /// Accumulate paragraphs, delegating oversized ones to sentences.
    Paragraph,
    /// Fixed-length windows snapped to word boundaries.
    Fixed,
}

impl ChunkStrategy {
    /// Parse a strategy name. Unrecognized values fall back to `Sentence`.
    pub fn parse(value: &str) -> Self {
        match value {
            "sentence" => Self::Sentence,
            "paragraph" => Self::Paragraph,
            "fixed" => Self::Fixed,
            _ => Self::Sentence,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sentence => "sentence",
            Self::Paragraph => "paragraph",
            Self::Fixed => "fixed",
        }
    }
}

impl fmt::Display for ChunkStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Configuration ───────────────────────────────────────────────────

/// Configuration for the chunking engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkConfig {
    /// Segmentation strategy (default: sentence).
    pub strategy: ChunkStrategy,
    /// Soft upper bound on a chunk's length in codepoints (default: 1000).
    pub chunk_size: usize,
    /// Codepoints of trailing context carried into the next chunk (default: 200).
    pub overlap: usize,
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            strategy: ChunkStrategy::Sentence,
            chunk_size: 1000,
            overlap: 200,
        }
    }
}
