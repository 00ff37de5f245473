//! Chunk quality filtering and content-aware sizing.
//!
//! Unlike the segmenters, both helpers measure bytes, not codepoints.

use super::types::ChunkConfig;

/// Minimum trimmed byte length for a chunk to be worth embedding.
const MIN_CHUNK_BYTES: usize = 10;

/// Minimum ratio of alphanumeric bytes; below this a chunk is mostly noise.
const MIN_ALNUM_RATIO: f64 = 0.1;

/// Special-character ratio above which content is treated as code-like.
const CODE_RATIO: f64 = 0.3;

/// Drop degenerate chunks: too short, or too symbol-heavy to carry meaning.
/// Order is preserved; surviving chunks are returned trimmed.
pub fn validate_chunks(chunks: &[String]) -> Vec<String> {
    let mut valid = Vec::new();

    for chunk in chunks {
        let chunk = chunk.trim();
        if chunk.len() < MIN_CHUNK_BYTES {
            continue;
        }

        let alnum = chunk.bytes().filter(|b| b.is_ascii_alphanumeric()).count();
        if (alnum as f64) / (chunk.len() as f64) < MIN_ALNUM_RATIO {
            continue;
        }

        valid.push(chunk.to_string());
    }

    valid
}

/// Propose a chunk size from the shape of `content`.
///
/// Short content is kept as a single chunk; code-like or structured content
/// (high special-character density) gets smaller chunks; ordinary prose uses
/// the configured size. Advisory only, nothing here mutates the config.
pub fn optimal_chunk_size(content: &str, config: &ChunkConfig) -> usize {
    let length = content.len();
    if length <= 500 {
        return length;
    }

    let special = content
        .bytes()
        .filter(|b| !b.is_ascii_alphanumeric() && !b.is_ascii_whitespace())
        .count();
    if (special as f64) / (length as f64) > CODE_RATIO {
        return 800.min(config.chunk_size);
    }

    config.chunk_size
}
